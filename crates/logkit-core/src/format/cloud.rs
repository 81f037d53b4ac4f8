//! Structured formatter for cloud log agents
//!
//! Cloud log agents that tail standard output parse one JSON object per line and
//! lift `severity`, `message` and `time` into the log entry.

use std::collections::BTreeMap;

use chrono::SecondsFormat;
use serde::Serialize;

use super::traits::Formatter;
use crate::logging::LogRecord;

/// One structured log entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudEntry<'a> {
    pub severity: &'static str,
    pub message: &'a str,
    pub time: String,
    pub log_name: String,
    pub labels: BTreeMap<&'static str, &'a str>,
}

/// Formats records as single-line JSON entries scoped to a project
#[derive(Debug, Clone)]
pub struct CloudFormatter {
    project: String,
    credentials_kind: String,
}

impl CloudFormatter {
    pub fn new(project: impl Into<String>, credentials_kind: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            credentials_kind: credentials_kind.into(),
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// Build the structured entry for a record
    pub fn entry<'a>(&'a self, record: &'a LogRecord) -> CloudEntry<'a> {
        let mut labels = BTreeMap::new();
        labels.insert("logger", record.logger.as_str());
        labels.insert("credentials", self.credentials_kind.as_str());

        CloudEntry {
            severity: record.level.as_str(),
            message: &record.message,
            time: record.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            log_name: format!("projects/{}/logs/{}", self.project, record.logger),
            labels,
        }
    }
}

impl Formatter for CloudFormatter {
    fn format(&self, record: &LogRecord) -> String {
        // Serializing plain strings into a map cannot fail; keep a readable line if it ever does
        serde_json::to_string(&self.entry(record)).unwrap_or_else(|e| {
            format!(
                "{{\"severity\":\"{}\",\"message\":\"unserializable log entry: {}\"}}",
                record.level.as_str(),
                e
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Level;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_cloud_entry_fields() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 15).unwrap();
        let record = LogRecord::at(ts, Level::Error, "svc", "boom");
        let formatter = CloudFormatter::new("my-project", "anonymous");

        let line = formatter.format(&record);
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["severity"], "ERROR");
        assert_eq!(value["message"], "boom");
        assert_eq!(value["time"], "2024-05-01T12:30:15.000Z");
        assert_eq!(value["logName"], "projects/my-project/logs/svc");
        assert_eq!(value["labels"]["logger"], "svc");
        assert_eq!(value["labels"]["credentials"], "anonymous");
    }

    #[test]
    fn test_cloud_escapes_message() {
        let record = LogRecord::new(Level::Info, "svc", "quote \" and\nnewline");
        let line = CloudFormatter::new("p", "anonymous").format(&record);

        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["message"], "quote \" and\nnewline");
    }
}
