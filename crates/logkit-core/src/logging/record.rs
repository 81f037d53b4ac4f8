//! A single log emission

use chrono::{DateTime, Utc};

use super::level::Level;

/// One log event as seen by formatters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub timestamp: DateTime<Utc>,
    /// Name of the emitting logger
    pub logger: String,
    pub message: String,
}

impl LogRecord {
    /// Create a record stamped with the current time
    pub fn new(level: Level, logger: impl Into<String>, message: impl Into<String>) -> Self {
        Self::at(Utc::now(), level, logger, message)
    }

    /// Create a record with an explicit timestamp
    pub fn at(
        timestamp: DateTime<Utc>,
        level: Level,
        logger: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            timestamp,
            logger: logger.into(),
            message: message.into(),
        }
    }
}
