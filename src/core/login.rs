use validator::Validate;
use crate::models::{LoginForm, Notification};
use crate::routes::Route;
use crate::services::SimulatedLatency;

/// Outcome of a login attempt
///
/// A rejected attempt is an ordinary outcome: the user may retry at once.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Accepted {
        notification: Notification,
        redirect: Route,
    },
    Rejected {
        notification: Notification,
    },
}

impl LoginOutcome {
    pub fn notification(&self) -> &Notification {
        match self {
            LoginOutcome::Accepted { notification, .. } => notification,
            LoginOutcome::Rejected { notification } => notification,
        }
    }

    pub fn redirect(&self) -> Option<Route> {
        match self {
            LoginOutcome::Accepted { redirect, .. } => Some(*redirect),
            LoginOutcome::Rejected { .. } => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, LoginOutcome::Accepted { .. })
    }
}

/// Submit the login form
///
/// Waits out the simulated latency, then accepts any pair of non-empty
/// email and password. Credentials are never checked.
pub async fn submit_login(form: &LoginForm, latency: &SimulatedLatency) -> LoginOutcome {
    latency.wait().await;

    if let Err(errors) = form.validate() {
        tracing::info!("Login rejected: field_errors={:?}", errors);
        return LoginOutcome::Rejected {
            notification: Notification::failure(
                "Login failed",
                "Please check your credentials and try again.",
            ),
        };
    }

    tracing::info!("Login accepted for {}", form.email);

    LoginOutcome::Accepted {
        notification: Notification::success("Login successful!", "Welcome back to RoomieFind."),
        redirect: Route::Dashboard,
    }
}
