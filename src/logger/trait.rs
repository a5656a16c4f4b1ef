//! Logger and sink capability definitions.

use std::sync::Arc;

use crate::event::{LogEvent, SharedError};
use crate::level::LogLevel;

use super::NoOpLogger;

/// Logging interface consumed by the bridge.
///
/// The bridge needs three operations from a structured logger: a
/// leveled write carrying an optional error, derivation of a child
/// logger enriched with one named property, and a display rendering.
/// The convenience methods delegate to [`Logger::write`].
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one logger can serve
/// concurrent invocations.
pub trait Logger: Send + Sync {
    /// Write one message at the given level, with an optional error.
    fn write(&self, level: LogLevel, error: Option<SharedError>, message: &str);

    /// Derive a child logger carrying one extra named property.
    fn with_property(&self, name: &str, value: &str) -> Arc<dyn Logger>;

    /// Render a display representation of this logger.
    fn describe(&self) -> String;

    /// Write a verbose-level message.
    fn verbose(&self, message: &str) {
        self.write(LogLevel::Verbose, None, message);
    }

    /// Write a debug-level message.
    fn debug(&self, message: &str) {
        self.write(LogLevel::Debug, None, message);
    }

    /// Write an information-level message.
    fn info(&self, message: &str) {
        self.write(LogLevel::Information, None, message);
    }

    /// Write a warning-level message.
    fn warn(&self, message: &str) {
        self.write(LogLevel::Warning, None, message);
    }

    /// Write an error-level message.
    fn error(&self, message: &str) {
        self.write(LogLevel::Error, None, message);
    }

    /// Write a fatal-level message.
    fn fatal(&self, message: &str) {
        self.write(LogLevel::Fatal, None, message);
    }
}

/// A consumer of structured log events, attachable to a logger.
pub trait LogEventSink: Send + Sync {
    /// Consume one structured log event.
    fn emit(&self, event: &LogEvent);
}

/// A logger paired with its optional sink capability.
///
/// Some loggers can also consume events as a sink (the pipeline logger
/// can; the no-op and tracing loggers cannot). Callers that want to
/// chain a logger as an extra output ask the handle instead of probing
/// the logger's concrete type.
#[derive(Clone)]
pub struct LoggerHandle {
    /// The logger itself.
    pub logger: Arc<dyn Logger>,
    /// The same logger viewed as a sink, when it supports that.
    pub sink: Option<Arc<dyn LogEventSink>>,
}

impl LoggerHandle {
    /// Wrap a logger that offers no sink capability.
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger, sink: None }
    }

    /// Wrap a logger together with its sink capability.
    pub fn with_sink(logger: Arc<dyn Logger>, sink: Arc<dyn LogEventSink>) -> Self {
        Self {
            logger,
            sink: Some(sink),
        }
    }

    /// The handle of the silent default logger.
    pub fn noop() -> Self {
        Self::new(Arc::new(NoOpLogger))
    }
}

/// Supplies the current logger handle on demand.
///
/// Injected wherever a component needs "the configured logger": the
/// event-logger-bound tracer and the invocation logger factory both
/// take one at construction instead of consulting process-wide state.
pub type LoggerProvider = Arc<dyn Fn() -> LoggerHandle + Send + Sync>;

/// A provider that always answers with the silent default logger.
pub fn noop_provider() -> LoggerProvider {
    Arc::new(LoggerHandle::noop)
}
