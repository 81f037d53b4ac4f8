//! In-memory output stream

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use super::stream::BoxedStream;

/// Cloneable in-memory stream for capturing log output
///
/// All clones share one buffer, so a test can hand one clone to a logger and
/// read the output through another.
///
/// # Example
///
/// ```
/// use logkit_core::{Logger, MemoryStream};
///
/// let stream = MemoryStream::new();
/// let logger = Logger::builder("svc").with_stream(stream.boxed()).build();
/// logger.info("started");
/// assert!(stream.contents().contains("started"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStream {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// A boxed clone suitable for `StreamHandler::new`
    pub fn boxed(&self) -> BoxedStream {
        Box::new(self.clone())
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written output split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemoryStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
