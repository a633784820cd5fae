use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{BudgetRange, DraftField, Interest};

/// Dashboard search and filter values
///
/// Empty `query`/`location` and `budget: None` place no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub budget: Option<BudgetRange>,
}

impl FilterCriteria {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_location(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    pub fn with_budget(budget: BudgetRange) -> Self {
        Self {
            budget: Some(budget),
            ..Self::default()
        }
    }

    /// True when no criterion constrains the listing
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.location.is_empty() && self.budget.is_none()
    }
}

/// Login form contents at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// UI event delivered to the active view
///
/// Wire format: `{"event": "search", "query": "chen"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ViewEvent {
    Navigate { path: String },

    // Dashboard
    Search { query: String },
    FilterLocation { location: String },
    FilterBudget { budget: Option<BudgetRange> },

    // Login
    LoginEmail { email: String },
    LoginPassword { password: String },
    SubmitLogin,

    // Registration
    UpdateDraft { update: DraftField },
    AddInterest { interest: Interest },
    RemoveInterest { interest: Interest },
    NextStep,
    PreviousStep,
    SubmitRegistration,

    DismissNotifications,
}

impl ViewEvent {
    /// Short name used in logs and errors
    pub fn name(&self) -> &'static str {
        match self {
            ViewEvent::Navigate { .. } => "navigate",
            ViewEvent::Search { .. } => "search",
            ViewEvent::FilterLocation { .. } => "filterLocation",
            ViewEvent::FilterBudget { .. } => "filterBudget",
            ViewEvent::LoginEmail { .. } => "loginEmail",
            ViewEvent::LoginPassword { .. } => "loginPassword",
            ViewEvent::SubmitLogin => "submitLogin",
            ViewEvent::UpdateDraft { .. } => "updateDraft",
            ViewEvent::AddInterest { .. } => "addInterest",
            ViewEvent::RemoveInterest { .. } => "removeInterest",
            ViewEvent::NextStep => "nextStep",
            ViewEvent::PreviousStep => "previousStep",
            ViewEvent::SubmitRegistration => "submitRegistration",
            ViewEvent::DismissNotifications => "dismissNotifications",
        }
    }
}
