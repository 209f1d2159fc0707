use crate::writers::LogWriter;
use std::sync::{Arc, Mutex};

/// A [`LogWriter`] that collects log lines in memory.
///
/// Cloning is cheap and all clones share the same buffer, so a clone kept by
/// the caller can inspect what a handler has written. Mainly useful for
/// tests and for applications that want to show recent log output in-process.
#[derive(Clone, Debug, Default)]
pub struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl BufferWriter {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current buffer content as text.
    #[must_use]
    pub fn text(&self) -> String {
        self.buffer
            .lock()
            .map(|buffer| String::from_utf8_lossy(&buffer).to_string())
            .unwrap_or_default()
    }
}

impl LogWriter for BufferWriter {
    fn write(&mut self, line: &[u8]) -> std::io::Result<()> {
        let mut buffer = self
            .buffer
            .lock()
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        buffer.extend_from_slice(line);
        Ok(())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
