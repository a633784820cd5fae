//! RoomieFind - headless view core for the RoomieFind roommate finder
//!
//! This library holds the logic behind the product's client views: the
//! dashboard's search and filter engine, the three-step registration wizard
//! and the login flow. All data is mock data kept in local view state.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter, find_matches, submit_login, LoginOutcome, MatchResult, Step, Wizard, WizardError};
pub use models::{FilterCriteria, LoginForm, Profile, RegistrationDraft, ViewEvent, ViewSnapshot};
pub use routes::{App, AppError, AppState, Route};
pub use services::{Catalog, SimulatedLatency};
