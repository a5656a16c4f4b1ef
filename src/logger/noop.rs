//! No-operation logger implementation.

use std::sync::Arc;

use crate::event::SharedError;
use crate::level::LogLevel;

use super::Logger;

/// A logger that discards all messages.
///
/// This is the default logger of an unconfigured host, and the one to
/// use in unit tests where log output would be noise. Its
/// [`LoggerHandle`](super::LoggerHandle) carries no sink capability, so
/// it is never chained as an extra output of another logger.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logbridge::logger::{Logger, NoOpLogger};
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// logger.info("this message is discarded");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn write(&self, _level: LogLevel, _error: Option<SharedError>, _message: &str) {
        // Intentionally empty - discard all log messages
    }

    fn with_property(&self, _name: &str, _value: &str) -> Arc<dyn Logger> {
        Arc::new(NoOpLogger)
    }

    fn describe(&self) -> String {
        "NoOpLogger".to_string()
    }
}
