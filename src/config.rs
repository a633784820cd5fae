use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::routes::{AppError, AppState};
use crate::services::{Catalog, SimulatedLatency, DEFAULT_NOTIFICATION_LIMIT};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub latency: LatencySettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self { name: default_app_name() }
    }
}

fn default_app_name() -> String { "RoomieFind".to_string() }

/// Simulated round-trip delays
#[derive(Debug, Clone, Deserialize)]
pub struct LatencySettings {
    #[serde(default = "default_login_ms")]
    pub login_ms: u64,
    #[serde(default = "default_register_ms")]
    pub register_ms: u64,
}

impl Default for LatencySettings {
    fn default() -> Self {
        Self {
            login_ms: default_login_ms(),
            register_ms: default_register_ms(),
        }
    }
}

fn default_login_ms() -> u64 { 1500 }
fn default_register_ms() -> u64 { 2000 }

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationSettings {
    #[serde(default = "default_notification_limit")]
    pub limit: usize,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self { limit: default_notification_limit() }
    }
}

fn default_notification_limit() -> usize { DEFAULT_NOTIFICATION_LIMIT }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ROOMIE_)
    /// 5. LOG_LEVEL / LOG_FORMAT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ROOMIE__LATENCY__LOGIN_MS -> latency.login_ms
            .add_source(
                Environment::with_prefix("ROOMIE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_log_env(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ROOMIE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Collaborators for the view host; fails if the catalog is invalid
    pub fn app_state(&self) -> Result<AppState, AppError> {
        Ok(AppState {
            catalog: Catalog::mock()?,
            login_latency: SimulatedLatency::from_millis(self.latency.login_ms),
            register_latency: SimulatedLatency::from_millis(self.latency.register_ms),
            notification_limit: self.notifications.limit,
        })
    }
}

/// Let the plain LOG_LEVEL / LOG_FORMAT variables override the logging section
fn apply_log_env(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(level) = env::var("LOG_LEVEL") {
        builder = builder.set_override("logging.level", level)?;
    }
    if let Ok(format) = env::var("LOG_FORMAT") {
        builder = builder.set_override("logging.format", format)?;
    }

    builder.build()
}
