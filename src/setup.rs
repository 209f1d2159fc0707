use crate::{
    dispatch::{context, Handler, StLogger},
    formats::Formatter,
    writers::{FileWriter, LogWriter, StdWriter},
    Level, StLogError,
};
use std::{
    path::PathBuf,
    sync::{Arc, Once},
};

/// Prepares the logging subsystem.
///
/// Installs `stlog` as the process-wide implementation behind the `log`
/// facade and opens the facade's root gate completely
/// (`log::set_max_level(LevelFilter::Trace)`), so that all filtering happens
/// at the handlers and at per-logger overrides. The two extra levels are
/// reachable through the [`critical!`](crate::critical) and
/// [`garbage!`](crate::garbage) macros and through [`Logger`](crate::Logger).
///
/// Safe to call any number of times; every call after the first is a no-op.
/// The attach functions call it internally, so calling it explicitly is only
/// needed when the facade should be wired up before any handler exists.
///
/// # Errors
///
/// `StLogError::Log` if some other logger implementation was installed
/// first; reported to the first caller only.
pub fn setup_logging() -> Result<(), StLogError> {
    static INSTALL: Once = Once::new();
    let mut result = Ok(());
    INSTALL.call_once(|| {
        result = log::set_boxed_logger(Box::new(StLogger(Arc::clone(context()))))
            .map_err(StLogError::from);
        if result.is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
    result
}

/// Attaches a console handler writing to stderr.
///
/// `level` is resolved with [`Level::resolve`] (case-insensitive, unknown
/// names fall back to `"error"`). `fmt` overrides the default line template,
/// see [`Formatter`](crate::Formatter). With `increase_padding`, the
/// logger-name field of the default template is widened to the longest
/// registered logger name, now and whenever a longer name is registered
/// later; the widening re-applies a fresh default formatter to every
/// already-attached handler.
///
/// The handler stays attached for the process lifetime.
///
/// # Errors
///
/// `StLogError::Format` for an invalid `fmt`; `StLogError::Log` if a foreign
/// logger occupies the facade.
pub fn setup_console_logger(
    level: &str,
    fmt: Option<&str>,
    increase_padding: bool,
) -> Result<(), StLogError> {
    setup_writer_logger(level, Box::new(StdWriter::stderr()), fmt, increase_padding)
}

/// Attaches a logfile handler with weekly rotation.
///
/// The file is created (or opened for appending) immediately, not at the
/// first write. Rotation happens at Monday 00:00 UTC; the
/// [`KEEP_BACKUPS`](crate::writers::KEEP_BACKUPS) newest rotated files are
/// kept. Level resolution, `fmt` and `increase_padding` behave as in
/// [`setup_console_logger`].
///
/// # Errors
///
/// `StLogError::Io` if `logfile` cannot be opened or created — a setup
/// failure that callers are expected to treat as fatal.
pub fn setup_logfile_logger<P: Into<PathBuf>>(
    level: &str,
    logfile: P,
    fmt: Option<&str>,
    increase_padding: bool,
) -> Result<(), StLogError> {
    let writer = FileWriter::new(logfile)?;
    setup_writer_logger(level, Box::new(writer), fmt, increase_padding)
}

/// Attaches a handler with a caller-supplied [`LogWriter`].
///
/// This is the generic form behind [`setup_console_logger`] and
/// [`setup_logfile_logger`]; use it to route log lines to custom sinks, e.g.
/// a [`BufferWriter`](crate::writers::BufferWriter).
///
/// # Errors
///
/// As [`setup_console_logger`].
pub fn setup_writer_logger(
    level: &str,
    writer: Box<dyn LogWriter>,
    fmt: Option<&str>,
    increase_padding: bool,
) -> Result<(), StLogError> {
    setup_logging()?;
    let context = context();
    if increase_padding {
        context.enable_padding_growth()?;
        context.refresh_padding()?;
    }
    let formatter = match fmt {
        Some(template) => Formatter::parse(template)?,
        None => Formatter::default_with_width(context.padding()?),
    };
    context.add_handler(Handler::new(Level::resolve(level), formatter, writer))
}

/// Tweaks the threshold of an individual named logger.
///
/// Only records carrying exactly `logger_name` are affected; siblings,
/// ancestors and handler thresholds stay as they are. The name is registered
/// if it was unknown so far. `level` is resolved with [`Level::resolve`].
///
/// # Errors
///
/// `StLogError::Log` if a foreign logger occupies the facade.
pub fn set_logger_level(logger_name: &str, level: &str) -> Result<(), StLogError> {
    setup_logging()?;
    context().set_level(logger_name, Level::resolve(level))
}
