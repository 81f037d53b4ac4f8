//! Formatter trait definition

use crate::logging::LogRecord;

/// Turns a record into one line of output
///
/// The returned string must not contain the trailing newline; handlers add it.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> String;
}
