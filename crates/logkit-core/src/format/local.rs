//! Console line formatter

use chrono::SecondsFormat;

use super::traits::Formatter;
use crate::logging::LogRecord;

/// Formats records as `[timestamp] [LEVEL   ] [name] message`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFormatter;

impl LocalFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for LocalFormatter {
    fn format(&self, record: &LogRecord) -> String {
        format!(
            "[{}] [{:<8}] [{}] {}",
            record.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            record.level,
            record.logger,
            record.message
        )
    }
}
