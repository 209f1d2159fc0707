use std::fmt;

/// The severity levels known to `stlog`.
///
/// The five levels of the `log` facade are complemented on both ends:
/// [`Level::Critical`] above `Error`, and [`Level::Garbage`] below `Trace`.
/// The numeric rank of a level is exposed via [`Level::rank`];
/// a lower rank means more verbose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Extremely verbose diagnostics, rank 1.
    Garbage,
    /// Verbose diagnostics, rank 5.
    Trace,
    /// Developer-oriented output, rank 10.
    Debug,
    /// Normal operational output, rank 20.
    Info,
    /// Something unexpected, but the program continues, rank 30.
    Warning,
    /// An operation failed, rank 40.
    Error,
    /// The program is unlikely to continue, rank 50.
    Critical,
}

impl Level {
    /// The numeric rank of the level; lower rank = more verbose.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Garbage => 1,
            Self::Trace => 5,
            Self::Debug => 10,
            Self::Info => 20,
            Self::Warning => 30,
            Self::Error => 40,
            Self::Critical => 50,
        }
    }

    /// The display name of the level, as it appears in log lines.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Garbage => "GARBAGE",
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Resolves a level name, case-insensitively.
    ///
    /// `"warn"` and `"warning"` both resolve to [`Level::Warning`].
    /// `"none"` resolves to [`Level::Critical`], so that a handler configured
    /// with `"none"` suppresses everything except critical messages.
    ///
    /// An unrecognized name resolves to [`Level::Error`]; this method never
    /// fails. Callers that want strict validation should compare the input
    /// against the documented names themselves.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "garbage" => Self::Garbage,
            "trace" => Self::Trace,
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warn" | "warning" => Self::Warning,
            "error" => Self::Error,
            "critical" | "none" => Self::Critical,
            _ => Self::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warning,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Level;

    #[test]
    fn resolve_is_case_insensitive() {
        for name in ["trace", "Trace", "TRACE", "tRaCe"] {
            assert_eq!(Level::resolve(name), Level::Trace);
        }
        assert_eq!(Level::resolve("INFO"), Level::Info);
        assert_eq!(Level::resolve("Warn"), Level::Warning);
        assert_eq!(Level::resolve("warning"), Level::Warning);
        assert_eq!(Level::resolve("DEBUG"), Level::Debug);
        assert_eq!(Level::resolve("garbage"), Level::Garbage);
        assert_eq!(Level::resolve("Critical"), Level::Critical);
    }

    #[test]
    fn resolve_falls_back_to_error() {
        assert_eq!(Level::resolve(""), Level::Error);
        assert_eq!(Level::resolve("verbose"), Level::Error);
        assert_eq!(Level::resolve("off"), Level::Error);
        assert_eq!(Level::resolve("err or"), Level::Error);
    }

    #[test]
    fn none_means_critical() {
        // Long-standing behavior: "none" does not disable logging entirely,
        // it raises the threshold so that only critical messages pass.
        assert_eq!(Level::resolve("none"), Level::Critical);
        assert_eq!(Level::resolve("NONE"), Level::Critical);
    }

    #[test]
    fn ranks_are_strictly_ordered() {
        assert!(Level::Garbage.rank() < Level::Trace.rank());
        assert!(Level::Trace.rank() < Level::Debug.rank());
        assert!(Level::Debug.rank() < Level::Info.rank());
        assert!(Level::Info.rank() < Level::Warning.rank());
        assert!(Level::Warning.rank() < Level::Error.rank());
        assert!(Level::Error.rank() < Level::Critical.rank());
        assert_eq!(Level::Trace.rank(), 5);
        assert_eq!(Level::Garbage.rank(), 1);
    }

    #[test]
    fn ord_follows_rank() {
        assert!(Level::Garbage < Level::Trace);
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn facade_levels_map_onto_stlog_levels() {
        assert_eq!(Level::from(log::Level::Error), Level::Error);
        assert_eq!(Level::from(log::Level::Warn), Level::Warning);
        assert_eq!(Level::from(log::Level::Info), Level::Info);
        assert_eq!(Level::from(log::Level::Debug), Level::Debug);
        assert_eq!(Level::from(log::Level::Trace), Level::Trace);
    }
}
