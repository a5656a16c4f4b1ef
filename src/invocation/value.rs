//! Cached logger value.

use std::sync::Arc;

use crate::logger::Logger;

/// Wraps one constructed logger as a cached asynchronous value.
///
/// Built once per invocation and discarded with it. Every retrieval
/// observes the identical logger instance; nothing is recomputed. The
/// asynchronous signature exists for the host's invocation machinery
/// and always completes immediately.
pub struct CachedLoggerValue {
    logger: Arc<dyn Logger>,
}

impl CachedLoggerValue {
    /// Wrap a constructed logger.
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }

    /// The wrapped logger.
    pub fn logger(&self) -> Arc<dyn Logger> {
        self.logger.clone()
    }

    /// Retrieve the logger; the same instance on every call.
    pub async fn get_value(&self) -> Arc<dyn Logger> {
        self.logger.clone()
    }

    /// The logger's display representation.
    pub fn to_display_string(&self) -> String {
        self.logger.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::NoOpLogger;

    #[tokio::test]
    async fn test_get_value_returns_the_identical_instance() {
        let value = CachedLoggerValue::new(Arc::new(NoOpLogger));
        let first = value.get_value().await;
        let second = value.get_value().await;
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_get_value_matches_the_wrapped_logger() {
        let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
        let value = CachedLoggerValue::new(logger.clone());
        assert!(Arc::ptr_eq(&value.get_value().await, &logger));
    }

    #[test]
    fn test_display_string_comes_from_the_logger() {
        let value = CachedLoggerValue::new(Arc::new(NoOpLogger));
        assert_eq!(value.to_display_string(), "NoOpLogger");
    }
}
