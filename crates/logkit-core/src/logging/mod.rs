//! Logger, severity levels and the logger registry

mod level;
mod destination;
mod record;
mod logger;
mod registry;

pub use level::{Level, ParseLevelError};
pub use destination::{LogDestination, ParseDestinationError};
pub use record::LogRecord;
pub use logger::{Logger, LoggerBuilder};
pub use registry::{
    get_logger, create_logger, register_logger, has_logger, list_loggers,
    unregister_logger, default_level, LoggerOptions,
};
