use crate::{dispatch::context, Level};
use std::fmt::Display;

/// A named leveled-logger handle.
///
/// Wraps the generic leveled-log primitive with one method per severity,
/// including the two levels that the `log` facade cannot express,
/// [`critical`](Logger::critical) and [`garbage`](Logger::garbage).
/// Creating a handle registers its name, which is what the
/// `increase_padding` mode measures when widening the logger-name field.
///
/// ```rust
/// use stlog::Logger;
///
/// let log = Logger::new("worker.pool");
/// log.info("three workers spawned");
/// log.garbage("poll iteration 12841");
/// ```
///
/// Handles are cheap to create and independent of each other; two handles
/// with the same name address the same per-logger threshold.
#[derive(Clone, Debug)]
pub struct Logger {
    name: String,
}

impl Logger {
    /// Creates a handle with the given name and registers the name.
    #[must_use]
    pub fn new<S: Into<String>>(name: S) -> Self {
        let name = name.into();
        context().register_name(&name);
        Self { name }
    }

    /// The logger name carried by every record of this handle.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Logs `msg` at the given level.
    pub fn log<M: Display>(&self, level: Level, msg: M) {
        context().dispatch(level, &self.name, None, &format_args!("{msg}"));
    }

    /// Logs at [`Level::Critical`].
    pub fn critical<M: Display>(&self, msg: M) {
        self.log(Level::Critical, msg);
    }

    /// Logs at [`Level::Error`].
    pub fn error<M: Display>(&self, msg: M) {
        self.log(Level::Error, msg);
    }

    /// Logs at [`Level::Warning`].
    pub fn warning<M: Display>(&self, msg: M) {
        self.log(Level::Warning, msg);
    }

    /// Logs at [`Level::Info`].
    pub fn info<M: Display>(&self, msg: M) {
        self.log(Level::Info, msg);
    }

    /// Logs at [`Level::Debug`].
    pub fn debug<M: Display>(&self, msg: M) {
        self.log(Level::Debug, msg);
    }

    /// Logs at [`Level::Trace`].
    pub fn trace<M: Display>(&self, msg: M) {
        self.log(Level::Trace, msg);
    }

    /// Logs at [`Level::Garbage`].
    pub fn garbage<M: Display>(&self, msg: M) {
        self.log(Level::Garbage, msg);
    }
}
