// Service exports
pub mod catalog;
pub mod latency;
pub mod notifications;

pub use catalog::{Catalog, CatalogError};
pub use latency::{SimulatedLatency, LOGIN_LATENCY, REGISTER_LATENCY};
pub use notifications::{NotificationCenter, DEFAULT_NOTIFICATION_LIMIT};
