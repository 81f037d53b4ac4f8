//! Logger configuration
//!
//! - Environment toggles: `LOGKIT_CLOUD_LOGGING`, `LOGKIT_LOG_LEVEL`
//! - `LoggerSettings`: optional YAML file (~/.config/logkit/logging.yaml)

mod toggle;
mod settings;

pub use toggle::{
    CloudToggle, parse_bool, cloud_logging_enabled, env_log_level,
    CLOUD_LOGGING_ENV, LOG_LEVEL_ENV,
};
pub use settings::{LoggerSettings, SettingsError, SettingsResult};
