// Route exports
pub mod views;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use views::{App, AppError, AppState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("No view at path: {0}")]
    UnknownPath(String),
}

/// Named navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    #[serde(rename = "/")]
    Landing,
    #[serde(rename = "/login")]
    Login,
    #[serde(rename = "/register")]
    Register,
    #[serde(rename = "/dashboard")]
    Dashboard,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Landing, Route::Login, Route::Register, Route::Dashboard];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
        }
    }

    /// Resolve a path, ignoring a trailing slash
    pub fn from_path(path: &str) -> Result<Route, RouteError> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        Route::ALL
            .iter()
            .copied()
            .find(|route| route.path() == normalized)
            .ok_or_else(|| RouteError::UnknownPath(trimmed.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
