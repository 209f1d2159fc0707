/// Describes errors in the initialization of `stlog`.
///
/// All variants can only occur during setup; once the handlers are attached,
/// write failures are reported to stderr by the log path itself and are not
/// surfaced through this type.
#[derive(Debug, thiserror::Error)]
pub enum StLogError {
    /// The logfile cannot be opened or created.
    #[error("logfile cannot be opened")]
    Io(#[from] std::io::Error),

    /// Registration with the log facade failed, because some other logger
    /// implementation was installed first.
    #[error("registration with the log facade failed")]
    Log(#[from] log::SetLoggerError),

    /// A caller-supplied format template cannot be parsed.
    #[error("invalid format template: {0}")]
    Format(String),

    /// An internal lock is poisoned.
    #[error("an internal lock is poisoned")]
    Poison,
}
