//! File-based logger settings (YAML)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::toggle::{env_log_level, parse_bool, CloudToggle, CLOUD_LOGGING_ENV};
use crate::logging::{Level, LogDestination};

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Logger settings as stored in `logging.yaml`
///
/// ```yaml
/// destination: cloud_backend
/// level: info
/// project: my-project
/// cloud_logging: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoggerSettings {
    #[serde(default)]
    pub destination: LogDestination,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Overrides `LOGKIT_CLOUD_LOGGING` when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_logging: Option<bool>,
}

impl LoggerSettings {
    /// Default settings file location (~/.config/logkit/logging.yaml)
    pub fn user_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("logkit").join("logging.yaml")
    }

    /// Load settings from the user settings file, defaults if it does not exist
    pub fn load_user() -> SettingsResult<Self> {
        Self::from_file(Self::user_path())
    }

    /// Load settings from a YAML file. A missing file yields defaults.
    pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> SettingsResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Overlay `LOGKIT_LOG_LEVEL` and `LOGKIT_CLOUD_LOGGING` when they are set
    pub fn apply_env(mut self) -> Self {
        if let Some(level) = env_log_level() {
            self.level = Some(level);
        }
        if let Ok(value) = std::env::var(CLOUD_LOGGING_ENV) {
            self.cloud_logging = Some(parse_bool(&value));
        }
        self
    }

    /// Toggle to hand to the logger builder
    pub fn cloud_toggle(&self) -> CloudToggle {
        self.cloud_logging
            .map(CloudToggle::from)
            .unwrap_or(CloudToggle::FromEnv)
    }

    pub fn to_yaml(&self) -> SettingsResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;
    use crate::config::LOG_LEVEL_ENV;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = LoggerSettings::from_file(dir.path().join("logging.yaml")).unwrap();
        assert_eq!(settings, LoggerSettings::default());
        assert_eq!(settings.destination, LogDestination::Local);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logging.yaml");
        fs::write(
            &path,
            "destination: cloud_backend\nlevel: warning\nproject: my-project\ncloud_logging: true\n",
        )
        .unwrap();

        let settings = LoggerSettings::from_file(&path).unwrap();
        assert_eq!(settings.destination, LogDestination::CloudBackend);
        assert_eq!(settings.level, Some(Level::Warning));
        assert_eq!(settings.project.as_deref(), Some("my-project"));
        assert_eq!(settings.cloud_toggle(), CloudToggle::Enabled);
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let settings = LoggerSettings::from_yaml_str(
            "destination: CLOUD_BACKEND\nlevel: WARNING\n",
        )
        .unwrap();
        assert_eq!(settings.destination, LogDestination::CloudBackend);
        assert_eq!(settings.level, Some(Level::Warning));

        let settings = LoggerSettings::from_yaml_str("destination: LOCAL\nlevel: Fatal\n").unwrap();
        assert_eq!(settings.destination, LogDestination::Local);
        assert_eq!(settings.level, Some(Level::Critical));

        let settings = LoggerSettings::from_yaml_str("destination: Google_Cloud\nlevel: warn\n").unwrap();
        assert_eq!(settings.destination, LogDestination::CloudBackend);
        assert_eq!(settings.level, Some(Level::Warning));
    }

    #[test]
    fn test_display_names_load_back() {
        let yaml = format!("destination: {}\nlevel: {}\n", LogDestination::CloudBackend, Level::Critical);
        let settings = LoggerSettings::from_yaml_str(&yaml).unwrap();
        assert_eq!(settings.destination, LogDestination::CloudBackend);
        assert_eq!(settings.level, Some(Level::Critical));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = LoggerSettings::from_yaml_str("destination: [nope").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));

        let err = LoggerSettings::from_yaml_str("destination: syslog").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_yaml_round_trip() {
        let settings = LoggerSettings {
            destination: LogDestination::CloudBackend,
            level: Some(Level::Error),
            project: Some("p".to_string()),
            cloud_logging: None,
        };
        let yaml = settings.to_yaml().unwrap();
        assert!(yaml.contains("cloud_backend"));
        assert!(!yaml.contains("cloud_logging"));
        assert_eq!(LoggerSettings::from_yaml_str(&yaml).unwrap(), settings);
    }

    #[test]
    fn test_user_path() {
        let path = LoggerSettings::user_path();
        assert!(path.ends_with("logkit/logging.yaml"));
    }

    #[test]
    #[serial]
    fn test_apply_env_overrides() {
        let vars = [(LOG_LEVEL_ENV, Some("error")), (CLOUD_LOGGING_ENV, Some("off"))];
        let settings = temp_env::with_vars(vars, || {
            LoggerSettings {
                level: Some(Level::Debug),
                cloud_logging: Some(true),
                ..Default::default()
            }
            .apply_env()
        });

        assert_eq!(settings.level, Some(Level::Error));
        assert_eq!(settings.cloud_toggle(), CloudToggle::Disabled);
    }

    #[test]
    #[serial]
    fn test_apply_env_leaves_file_values_when_unset() {
        let settings = temp_env::with_vars_unset([LOG_LEVEL_ENV, CLOUD_LOGGING_ENV], || {
            LoggerSettings {
                level: Some(Level::Warning),
                cloud_logging: Some(true),
                ..Default::default()
            }
            .apply_env()
        });

        assert_eq!(settings.level, Some(Level::Warning));
        assert_eq!(settings.cloud_toggle(), CloudToggle::Enabled);
    }
}
