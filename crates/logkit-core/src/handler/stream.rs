//! Stream-backed handler

use std::fmt;
use std::io::{self, Write};

use parking_lot::Mutex;

use crate::format::Formatter;
use crate::logging::LogRecord;

/// Type alias for a boxed output stream
pub type BoxedStream = Box<dyn Write + Send>;

/// Writes formatted records to a stream, one line each
///
/// The stream is behind a mutex so concurrent emissions never interleave
/// within a line. Every line is flushed immediately.
pub struct StreamHandler<F: Formatter> {
    formatter: F,
    stream: Mutex<BoxedStream>,
}

impl<F: Formatter> StreamHandler<F> {
    pub fn new(formatter: F, stream: BoxedStream) -> Self {
        Self {
            formatter,
            stream: Mutex::new(stream),
        }
    }

    /// Handler writing to standard output
    pub fn stdout(formatter: F) -> Self {
        Self::new(formatter, Box::new(io::stdout()))
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    pub fn emit(&self, record: &LogRecord) {
        let line = self.formatter.format(record);
        let mut stream = self.stream.lock();
        // A failed console write must never surface to the caller
        let _ = writeln!(stream, "{}", line);
        let _ = stream.flush();
    }

    pub fn flush(&self) {
        let _ = self.stream.lock().flush();
    }
}

impl<F: Formatter + fmt::Debug> fmt::Debug for StreamHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamHandler")
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}
