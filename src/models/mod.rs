// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BudgetRange, Cleanliness, DraftField, Interest, Lifestyle, NightOwl, Pets, Profile,
    RegistrationDraft, RoomType, Smoking, LOCATION_OPTIONS,
};
pub use requests::{FilterCriteria, LoginForm, ViewEvent};
pub use responses::{
    DashboardSnapshot, ErrorResponse, FilterOption, LandingSnapshot, LoginSnapshot, NavLink,
    Notification, NotificationVariant, ProfileCard, RegisterSnapshot, ViewSnapshot, ViewState,
};
