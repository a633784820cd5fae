// Core view logic exports
pub mod filters;
pub mod login;
pub mod matcher;
pub mod wizard;

pub use filters::{matches_budget, matches_criteria, matches_location, matches_query};
pub use login::{submit_login, LoginOutcome};
pub use matcher::{filter, find_matches, MatchResult};
pub use wizard::{RegistrationOutcome, Step, Wizard, WizardError, WizardStatus};
