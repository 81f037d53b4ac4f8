//! Logkit Core
//!
//! A small logging layer: named, severity-leveled loggers that write console
//! lines to standard output, with an optional cloud structured-output mode.
//!
//! Cloud output is only attempted when the destination is
//! `LogDestination::CloudBackend` *and* `LOGKIT_CLOUD_LOGGING` is truthy. If
//! the backend cannot be used the logger falls back to the console; building a
//! logger never fails.
//!
//! ```rust
//! use std::sync::Arc;
//! use logkit_auth::AnonymousCredentials;
//! use logkit_core::{Logger, LogDestination};
//!
//! let logger = Logger::builder("svc")
//!     .with_destination(LogDestination::CloudBackend)
//!     .with_project("my-project")
//!     .with_credentials(Arc::new(AnonymousCredentials::new()))
//!     .build();
//!
//! logger.error("boom");
//! ```

pub mod logging;
pub mod format;
pub mod handler;
pub mod cloud;
pub mod config;

// Re-export commonly used types
pub use logging::{
    Level, LogDestination, LogRecord, Logger, LoggerBuilder, LoggerOptions,
    get_logger, create_logger, register_logger, has_logger, list_loggers, unregister_logger,
};

pub use format::{Formatter, LocalFormatter, CloudFormatter};

pub use handler::{Handler, HandlerKind, MemoryStream};

pub use cloud::{CloudClient, CloudError, CloudResult};

pub use config::{CloudToggle, LoggerSettings, SettingsError};

pub use logkit_auth::{Credentials, SharedCredentials};
