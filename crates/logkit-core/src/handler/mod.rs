//! Output handlers
//!
//! A logger owns exactly one `Handler`. The variant is chosen once, at
//! construction, from the requested destination.

mod stream;
mod memory;

pub use stream::{StreamHandler, BoxedStream};
pub use memory::MemoryStream;

use std::fmt;

use crate::format::{CloudFormatter, LocalFormatter};
use crate::logging::LogRecord;

/// Which handler a logger ended up with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Console,
    Cloud,
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerKind::Console => write!(f, "console"),
            HandlerKind::Cloud => write!(f, "cloud"),
        }
    }
}

/// The sink attached to a logger
#[derive(Debug)]
pub enum Handler {
    /// Human-readable lines
    Console(StreamHandler<LocalFormatter>),
    /// Structured JSON lines for a cloud log agent
    Cloud(StreamHandler<CloudFormatter>),
}

impl Handler {
    /// Console handler writing to standard output
    pub fn console() -> Self {
        Handler::Console(StreamHandler::stdout(LocalFormatter::new()))
    }

    pub fn kind(&self) -> HandlerKind {
        match self {
            Handler::Console(_) => HandlerKind::Console,
            Handler::Cloud(_) => HandlerKind::Cloud,
        }
    }

    /// Format and write one record
    pub fn emit(&self, record: &LogRecord) {
        match self {
            Handler::Console(handler) => handler.emit(record),
            Handler::Cloud(handler) => handler.emit(record),
        }
    }

    pub fn flush(&self) {
        match self {
            Handler::Console(handler) => handler.flush(),
            Handler::Cloud(handler) => handler.flush(),
        }
    }
}
