use crate::writers::LogWriter;
use std::io::Write;

// `StdWriter` writes log lines to stdout or stderr.
enum StdStream {
    Err(std::io::Stderr),
    Out(std::io::Stdout),
}

/// A [`LogWriter`] that writes to the process's standard error or
/// standard output stream.
pub struct StdWriter {
    stream: StdStream,
}

impl StdWriter {
    /// A writer targeting stderr; this is what the console handler uses.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            stream: StdStream::Err(std::io::stderr()),
        }
    }

    /// A writer targeting stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            stream: StdStream::Out(std::io::stdout()),
        }
    }
}

impl LogWriter for StdWriter {
    fn write(&mut self, line: &[u8]) -> std::io::Result<()> {
        match &mut self.stream {
            StdStream::Err(stderr) => stderr.lock().write_all(line),
            StdStream::Out(stdout) => stdout.lock().write_all(line),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match &mut self.stream {
            StdStream::Err(stderr) => stderr.lock().flush(),
            StdStream::Out(stdout) => stdout.lock().flush(),
        }
    }
}
