//! Severity-leveled logger with a single attached handler

use std::fmt;

use logkit_auth::SharedCredentials;
use parking_lot::RwLock;

use super::destination::LogDestination;
use super::level::Level;
use super::record::LogRecord;
use crate::cloud::CloudClient;
use crate::config::{CloudToggle, LoggerSettings};
use crate::handler::{BoxedStream, Handler, HandlerKind, StreamHandler};
use crate::format::LocalFormatter;

/// A named logger writing to exactly one handler
///
/// Construction never fails. When the cloud backend is requested but disabled
/// or unavailable, the logger falls back to console output and leaves a note
/// on the `log` facade.
///
/// # Example
///
/// ```
/// use logkit_core::{Level, Logger};
///
/// let logger = Logger::new("svc");
/// logger.info("started");
///
/// logger.set_level(Level::Warning);
/// logger.debug("dropped");
/// ```
pub struct Logger {
    name: String,
    destination: LogDestination,
    level: RwLock<Level>,
    handler: Handler,
}

impl Logger {
    /// Create a console logger
    pub fn new(name: impl Into<String>) -> Self {
        Self::builder(name).build()
    }

    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The destination that was requested, not necessarily the one in use
    pub fn destination(&self) -> LogDestination {
        self.destination
    }

    /// The handler actually attached
    pub fn handler_kind(&self) -> HandlerKind {
        self.handler.kind()
    }

    pub fn level(&self) -> Level {
        *self.level.read()
    }

    /// Set the minimum severity that gets emitted
    pub fn set_level(&self, level: Level) {
        *self.level.write() = level;
    }

    pub fn is_enabled_for(&self, level: Level) -> bool {
        level >= self.level()
    }

    pub fn log(&self, level: Level, message: &str) {
        if self.is_enabled_for(level) {
            self.handler.emit(&LogRecord::new(level, self.name.as_str(), message));
        }
    }

    /// Log with format arguments, formatting only when the level passes
    pub fn log_fmt(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.is_enabled_for(level) {
            self.handler.emit(&LogRecord::new(level, self.name.as_str(), args.to_string()));
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    pub fn critical(&self, message: &str) {
        self.log(Level::Critical, message);
    }

    /// Install this logger as the process-wide `log` facade
    ///
    /// Fails if a global logger has already been set.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("destination", &self.destination)
            .field("level", &self.level())
            .field("handler", &self.handler.kind())
            .finish()
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.is_enabled_for(Level::from(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        self.log_fmt(Level::from(record.level()), *record.args());
    }

    fn flush(&self) {
        self.handler.flush();
    }
}

/// Builder for `Logger`
pub struct LoggerBuilder {
    name: String,
    destination: LogDestination,
    project: Option<String>,
    credentials: Option<SharedCredentials>,
    level: Level,
    stream: Option<BoxedStream>,
    cloud_toggle: CloudToggle,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            destination: LogDestination::default(),
            project: None,
            credentials: None,
            level: Level::default(),
            stream: None,
            cloud_toggle: CloudToggle::default(),
        }
    }

    /// Builder pre-filled from settings
    pub fn from_settings(name: impl Into<String>, settings: &LoggerSettings) -> Self {
        let mut builder = Self::new(name)
            .with_destination(settings.destination)
            .with_cloud_toggle(settings.cloud_toggle());
        if let Some(level) = settings.level {
            builder = builder.with_level(level);
        }
        if let Some(project) = &settings.project {
            builder = builder.with_project(project.as_str());
        }
        builder
    }

    pub fn with_destination(mut self, destination: LogDestination) -> Self {
        self.destination = destination;
        self
    }

    /// Project identifier forwarded to the cloud backend
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Credentials forwarded to the cloud backend
    pub fn with_credentials(mut self, credentials: SharedCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Write to this stream instead of standard output
    pub fn with_stream(mut self, stream: BoxedStream) -> Self {
        self.stream = Some(stream);
        self
    }

    /// Pin the cloud toggle instead of reading `LOGKIT_CLOUD_LOGGING`
    pub fn with_cloud_toggle(mut self, toggle: impl Into<CloudToggle>) -> Self {
        self.cloud_toggle = toggle.into();
        self
    }

    pub fn build(mut self) -> Logger {
        let handler = self.select_handler();
        Logger {
            name: self.name,
            destination: self.destination,
            level: RwLock::new(self.level),
            handler,
        }
    }

    fn select_handler(&mut self) -> Handler {
        match self.destination {
            LogDestination::Local => self.console_handler(),
            LogDestination::CloudBackend => {
                if !self.cloud_toggle.is_enabled() {
                    log::debug!(
                        "logger {:?}: cloud backend requested but cloud logging is disabled; using local console logger",
                        self.name
                    );
                    return self.console_handler();
                }

                match CloudClient::connect(self.project.as_deref(), self.credentials.as_ref()) {
                    Ok(client) => match self.stream.take() {
                        Some(stream) => client.handler_with_stream(stream),
                        None => client.handler(),
                    },
                    Err(e) => {
                        log::warn!(
                            "logger {:?}: cloud logging unavailable ({}); using local console logger",
                            self.name,
                            e
                        );
                        self.console_handler()
                    }
                }
            }
        }
    }

    fn console_handler(&mut self) -> Handler {
        match self.stream.take() {
            Some(stream) => Handler::Console(StreamHandler::new(LocalFormatter::new(), stream)),
            None => Handler::console(),
        }
    }
}

/// Convenience macros for logging with format arguments
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_fmt($crate::Level::Debug, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_fmt($crate::Level::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_fmt($crate::Level::Warning, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_fmt($crate::Level::Error, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_fmt($crate::Level::Critical, format_args!($($arg)*))
    };
}
