// only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
//! Helpers around the standard `log` facade: two extra severity levels below
//! the conventional debug level ([`Level::Trace`] and [`Level::Garbage`]),
//! setup routines for a console handler and a weekly-rotating logfile
//! handler with a consistent timestamped line format, a per-logger level
//! override, and an optional mode that widens the logger-name field to the
//! longest registered logger name.
//!
//! Attach a handler once at startup and log through the usual macros:
//!
//! ```rust
//! use log::{info, warn};
//!
//! stlog::setup_console_logger("debug", None, false).unwrap();
//! stlog::setup_logfile_logger("info", "/var/log/myprog.log", None, false).unwrap();
//!
//! info!("this reaches the console and the logfile");
//! stlog::garbage!("this is below both thresholds");
//! ```
//!
//! Log lines look like
//!
//! ```text
//! 14:23:07,010 [myprog::worker:87  ][WARNING ] queue is full
//! ```
//!
//! All level names are matched case-insensitively; an unrecognized name
//! falls back to `"error"`, and `"none"` suppresses everything except
//! critical messages (see [`Level::resolve`]).
//!
//! The `critical` and `garbage` levels have no counterpart in the `log`
//! facade; reach them through the [`critical!`] and [`garbage!`] macros or
//! through a named [`Logger`] handle, which also carries `trace` and all
//! other levels as plain methods.
//!
//! Setup is add-only: handlers cannot be detached, and duplicate setup calls
//! are harmless no-ops. Setup failures (an unwritable logfile, a foreign
//! logger occupying the facade) are returned as [`StLogError`] and are meant
//! to abort startup; failures while logging never panic and never surface as
//! errors.

mod deferred_now;
mod dispatch;
mod formats;
mod level;
mod logger;
mod macros;
mod registry;
mod setup;
mod stlog_error;

pub mod writers;

pub use crate::deferred_now::DeferredNow;
pub use crate::formats::{Formatter, DEFAULT_PADDING};
pub use crate::level::Level;
pub use crate::logger::Logger;
pub use crate::setup::{
    set_logger_level, setup_console_logger, setup_logfile_logger, setup_logging,
    setup_writer_logger,
};
pub use crate::stlog_error::StLogError;

#[doc(hidden)]
pub use crate::dispatch::__log;
