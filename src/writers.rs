//! The output sinks that handlers write to.
//!
//! Every handler owns a boxed [`LogWriter`] together with its formatter and
//! its level threshold. Besides the built-in writers — [`StdWriter`] for the
//! console, [`FileWriter`] for a weekly-rotated logfile, and [`BufferWriter`]
//! for in-memory capture — callers can attach their own implementation with
//! [`setup_writer_logger`](crate::setup_writer_logger).

mod buffer_writer;
mod file_writer;
mod std_writer;

pub use buffer_writer::BufferWriter;
pub use file_writer::{FileWriter, KEEP_BACKUPS};
pub use std_writer::StdWriter;

/// Writes formatted log lines to a single output stream.
///
/// The handler serializes all access to its writer, so implementations do not
/// need their own interior locking.
pub trait LogWriter: Send {
    /// Writes out one formatted log line, including the trailing newline.
    ///
    /// # Errors
    ///
    /// `std::io::Error` if the sink rejects the line.
    fn write(&mut self, line: &[u8]) -> std::io::Result<()>;

    /// Flushes any buffered lines.
    ///
    /// # Errors
    ///
    /// `std::io::Error` if the sink cannot be flushed.
    fn flush(&mut self) -> std::io::Result<()>;
}
