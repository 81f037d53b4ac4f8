//! Environment toggles

use std::env;

use crate::logging::Level;

/// Enables the cloud backend when set to a truthy value
pub const CLOUD_LOGGING_ENV: &str = "LOGKIT_CLOUD_LOGGING";

/// Default threshold for loggers created through the registry
pub const LOG_LEVEL_ENV: &str = "LOGKIT_LOG_LEVEL";

/// Interpret a boolean-like string: `1`, `true`, `yes`, `on` (any case) are true
pub fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Whether `LOGKIT_CLOUD_LOGGING` is set to a truthy value
pub fn cloud_logging_enabled() -> bool {
    env::var(CLOUD_LOGGING_ENV).map(|v| parse_bool(&v)).unwrap_or(false)
}

/// Level from `LOGKIT_LOG_LEVEL`, if set and valid
pub fn env_log_level() -> Option<Level> {
    env::var(LOG_LEVEL_ENV).ok().and_then(|v| v.parse().ok())
}

/// How a logger decides whether the cloud backend may be attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloudToggle {
    /// Read `LOGKIT_CLOUD_LOGGING` at construction time
    #[default]
    FromEnv,
    Enabled,
    Disabled,
}

impl CloudToggle {
    pub fn is_enabled(&self) -> bool {
        match self {
            CloudToggle::FromEnv => cloud_logging_enabled(),
            CloudToggle::Enabled => true,
            CloudToggle::Disabled => false,
        }
    }
}

impl From<bool> for CloudToggle {
    fn from(enabled: bool) -> Self {
        if enabled {
            CloudToggle::Enabled
        } else {
            CloudToggle::Disabled
        }
    }
}
