use serde::{Deserialize, Serialize};
use crate::core::wizard::{Step, WizardStatus};
use crate::models::domain::{BudgetRange, Interest, Profile, RegistrationDraft, LOCATION_OPTIONS};
use crate::models::requests::FilterCriteria;
use crate::routes::Route;

/// Number of interest badges a dashboard card shows before "+N"
pub const VISIBLE_INTERESTS: usize = 3;

/// Toast flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// Transient user-visible notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Notification {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: NotificationVariant::Default,
            created_at: chrono::Utc::now(),
        }
    }

    pub fn failure(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: NotificationVariant::Destructive,
            created_at: chrono::Utc::now(),
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Dashboard card for one roommate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCard {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub university: String,
    pub major: String,
    pub location: String,
    pub budget: String,
    pub bio: String,
    pub rating: f64,
    pub verified: bool,
    pub image: String,
    pub visible_interests: Vec<String>,
    pub hidden_interest_count: usize,
}

impl From<&Profile> for ProfileCard {
    fn from(profile: &Profile) -> Self {
        let visible_interests: Vec<String> = profile
            .interests
            .iter()
            .take(VISIBLE_INTERESTS)
            .cloned()
            .collect();
        let hidden_interest_count = profile.interests.len().saturating_sub(VISIBLE_INTERESTS);

        Self {
            id: profile.id,
            name: profile.name.clone(),
            age: profile.age,
            university: profile.university.clone(),
            major: profile.major.clone(),
            location: profile.location.clone(),
            budget: profile.budget.clone(),
            bio: profile.bio.clone(),
            rating: profile.rating,
            verified: profile.verified,
            image: profile.image.clone(),
            visible_interests,
            hidden_interest_count,
        }
    }
}

/// One entry of a dashboard select; an empty `value` clears the filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }

    /// Location select entries, "All Locations" first
    pub fn locations() -> Vec<Self> {
        LOCATION_OPTIONS
            .iter()
            .map(|(value, label)| Self::new(value, label))
            .collect()
    }

    /// Budget select entries, "All Budgets" first
    pub fn budgets() -> Vec<Self> {
        std::iter::once(Self::new("", "All Budgets"))
            .chain(BudgetRange::ALL.iter().map(|b| Self::new(b.token(), b.label())))
            .collect()
    }
}

/// Dashboard listing, "Showing {showing} of {total} roommates"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub criteria: FilterCriteria,
    pub showing: usize,
    pub total: usize,
    pub is_filtered: bool,
    pub no_results: bool,
    pub cards: Vec<ProfileCard>,
    pub location_options: Vec<FilterOption>,
    pub budget_options: Vec<FilterOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSnapshot {
    pub email: String,
    pub has_password: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSnapshot {
    pub step: Step,
    pub step_number: u8,
    pub step_title: String,
    pub total_steps: u8,
    pub status: WizardStatus,
    pub draft: RegistrationDraft,
    pub available_interests: Vec<Interest>,
    pub missing_fields: Vec<String>,
    pub can_submit: bool,
}

/// Call-to-action link on the landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingSnapshot {
    pub links: Vec<NavLink>,
}

/// Rendering-independent state of the active view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum ViewState {
    Landing(LandingSnapshot),
    Login(LoginSnapshot),
    Register(RegisterSnapshot),
    Dashboard(DashboardSnapshot),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    pub route: Route,
    pub state: ViewState,
    pub notifications: Vec<Notification>,
}

/// Error response written by the host loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
