/// Logs a message at [`Level::Critical`](crate::Level::Critical), which the
/// `log` facade's own macros cannot express.
///
/// Mirrors the `log` macros: an optional `target:` names the logger (default
/// is `module_path!()`), the rest is a format string with arguments.
///
/// ```rust
/// stlog::critical!("shutting down: {}", "disk full");
/// stlog::critical!(target: "db.pool", "no connections left");
/// ```
#[macro_export]
macro_rules! critical {
    (target: $target:expr, $($arg:tt)+) => {
        $crate::__log($crate::Level::Critical, $target, line!(), format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::critical!(target: module_path!(), $($arg)+)
    };
}

/// Logs a message at [`Level::Garbage`](crate::Level::Garbage), below the
/// `log` facade's `trace!`.
///
/// Mirrors the `log` macros: an optional `target:` names the logger (default
/// is `module_path!()`), the rest is a format string with arguments.
///
/// ```rust
/// stlog::garbage!("entering poll iteration {}", 12841);
/// ```
#[macro_export]
macro_rules! garbage {
    (target: $target:expr, $($arg:tt)+) => {
        $crate::__log($crate::Level::Garbage, $target, line!(), format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::garbage!(target: module_path!(), $($arg)+)
    };
}
