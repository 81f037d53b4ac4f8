//! Where a logger sends its output

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Requested output destination, fixed at logger construction
///
/// Serializes as the snake_case name; deserializes through `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum LogDestination {
    /// Console lines on standard output
    #[default]
    Local,
    /// Cloud structured logging, when enabled and available
    CloudBackend,
}

impl LogDestination {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogDestination::Local => "local",
            LogDestination::CloudBackend => "cloud_backend",
        }
    }
}

impl fmt::Display for LogDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a destination name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown log destination: {0}")]
pub struct ParseDestinationError(pub String);

impl FromStr for LogDestination {
    type Err = ParseDestinationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(LogDestination::Local),
            "cloud_backend" | "cloud" | "google_cloud" => Ok(LogDestination::CloudBackend),
            _ => Err(ParseDestinationError(s.to_string())),
        }
    }
}

impl TryFrom<String> for LogDestination {
    type Error = ParseDestinationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
