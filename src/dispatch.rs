use crate::{formats::Formatter, registry::Registry, writers::LogWriter, DeferredNow, Level, StLogError};
use std::sync::{Arc, Mutex, OnceLock, RwLock};

// An output sink with its own level threshold and formatter.
//
// The Mutex is the handler's own lock: it serializes writes and is also what
// the padding-refresh path takes before swapping the formatter, so a
// concurrently logging thread never reads a formatter mid-swap.
pub(crate) struct Handler {
    threshold: Level,
    state: Mutex<HandlerState>,
}

struct HandlerState {
    formatter: Formatter,
    writer: Box<dyn LogWriter>,
}

impl Handler {
    pub(crate) fn new(threshold: Level, formatter: Formatter, writer: Box<dyn LogWriter>) -> Self {
        Self {
            threshold,
            state: Mutex::new(HandlerState { formatter, writer }),
        }
    }
}

// The process-wide logging context: the attached handlers plus the registry
// of logger names, threshold overrides and the padding width.
//
// Created once, lives for the process lifetime; handlers are add-only.
pub(crate) struct LogContext {
    handlers: RwLock<Vec<Handler>>,
    registry: RwLock<Registry>,
}

impl LogContext {
    fn new() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
            registry: RwLock::new(Registry::new()),
        }
    }

    pub(crate) fn add_handler(&self, handler: Handler) -> Result<(), StLogError> {
        self.handlers
            .write()
            .map_err(|_| StLogError::Poison)?
            .push(handler);
        Ok(())
    }

    pub(crate) fn padding(&self) -> Result<usize, StLogError> {
        Ok(self.registry.read().map_err(|_| StLogError::Poison)?.padding())
    }

    pub(crate) fn enable_padding_growth(&self) -> Result<(), StLogError> {
        self.registry
            .write()
            .map_err(|_| StLogError::Poison)?
            .enable_padding_growth();
        Ok(())
    }

    // Registers a logger name; while padding growth is active, a new name
    // can widen the name field of every attached handler.
    pub(crate) fn register_name(&self, name: &str) {
        let grow = match self.registry.write() {
            Ok(mut registry) => {
                registry.register(name);
                registry.grow_padding()
            }
            Err(_) => return,
        };
        if grow {
            self.refresh_padding().ok();
        }
    }

    pub(crate) fn set_level(&self, name: &str, level: Level) -> Result<(), StLogError> {
        self.registry
            .write()
            .map_err(|_| StLogError::Poison)?
            .set_level(name, level);
        Ok(())
    }

    // Widens the padding to the longest registered logger name and, if it
    // grew, installs a freshly built default formatter on every attached
    // handler. Handler thresholds are not touched. Each handler's own lock
    // is held only for the swap and released via its guard on all paths.
    pub(crate) fn refresh_padding(&self) -> Result<(), StLogError> {
        let widened = self
            .registry
            .write()
            .map_err(|_| StLogError::Poison)?
            .widen_padding();
        let Some(new_width) = widened else {
            return Ok(());
        };
        let handlers = self.handlers.read().map_err(|_| StLogError::Poison)?;
        for handler in handlers.iter() {
            let mut state = handler.state.lock().map_err(|_| StLogError::Poison)?;
            state.formatter = Formatter::default_with_width(new_width);
        }
        Ok(())
    }

    // The generic leveled-log primitive: everything - the log facade, the
    // macros, and the Logger handle - ends up here.
    //
    // Never panics and never returns an error; a record that cannot be
    // written is reported to stderr once and dropped.
    pub(crate) fn dispatch(
        &self,
        level: Level,
        name: &str,
        line: Option<u32>,
        args: &std::fmt::Arguments<'_>,
    ) {
        if let Ok(registry) = self.registry.read() {
            if let Some(threshold) = registry.threshold(name) {
                if level < threshold {
                    return;
                }
            }
        }
        let Ok(handlers) = self.handlers.read() else {
            return;
        };
        let mut now = DeferredNow::new();
        for handler in handlers.iter().filter(|h| level >= h.threshold) {
            let Ok(mut state) = handler.state.lock() else {
                continue;
            };
            let mut log_line = state.formatter.render(&mut now, level, name, line, args);
            log_line.push('\n');
            if let Err(e) = state.writer.write(log_line.as_bytes()) {
                eprintln!("[stlog] writing failed with {e}");
            }
        }
    }

    // Implementation of Log::enabled() with easier testable signature.
    fn ctx_enabled(&self, level: Level, name: &str) -> bool {
        if let Ok(registry) = self.registry.read() {
            if let Some(threshold) = registry.threshold(name) {
                if level < threshold {
                    return false;
                }
            }
        }
        self.handlers
            .read()
            .map(|handlers| handlers.iter().any(|h| level >= h.threshold))
            .unwrap_or(false)
    }

    fn flush_all(&self) {
        if let Ok(handlers) = self.handlers.read() {
            for handler in handlers.iter() {
                if let Ok(mut state) = handler.state.lock() {
                    state.writer.flush().ok();
                }
            }
        }
    }
}

// The one LogContext of the process.
pub(crate) fn context() -> &'static Arc<LogContext> {
    static CONTEXT: OnceLock<Arc<LogContext>> = OnceLock::new();
    CONTEXT.get_or_init(|| Arc::new(LogContext::new()))
}

/// Implementation detail of the `critical!` and `garbage!` macros.
#[doc(hidden)]
pub fn __log(level: Level, target: &str, line: u32, args: std::fmt::Arguments<'_>) {
    context().dispatch(level, target, Some(line), &args);
}

// Forwards records from the log facade into the context.
pub(crate) struct StLogger(pub(crate) Arc<LogContext>);

impl log::Log for StLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.0.ctx_enabled(Level::from(metadata.level()), metadata.target())
    }

    fn log(&self, record: &log::Record<'_>) {
        self.0.dispatch(
            Level::from(record.level()),
            record.target(),
            record.line(),
            record.args(),
        );
    }

    fn flush(&self) {
        self.0.flush_all();
    }
}
