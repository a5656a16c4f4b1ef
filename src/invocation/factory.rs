//! Invocation logger factory.

use std::sync::Arc;

use crate::bridge::HostTraceSink;
use crate::level::LogLevel;
use crate::logger::{LoggerProvider, PipelineLogger};

use super::{CachedLoggerValue, InvocationContext};

/// Property naming the invocation an event belongs to.
pub const INVOCATION_ID_PROPERTY: &str = "InvocationId";

/// Builds a fresh structured logger for each invocation.
///
/// Every constructed logger is configured the same way: minimum level
/// `Verbose` (the factory does no filtering; attached sinks decide),
/// one enrichment property carrying the invocation id, and one
/// [`HostTraceSink`] over the invocation's tracer. When the injected
/// provider answers with a sink-capable logger, that sink is chained
/// as one extra output, so events reach both the host tracer and the
/// configured background logger. The default no-op logger offers no
/// sink capability and is not chained.
pub struct InvocationLoggerFactory {
    provider: LoggerProvider,
}

impl InvocationLoggerFactory {
    /// Create a factory chaining the provider's logger where possible.
    pub fn new(provider: LoggerProvider) -> Self {
        Self { provider }
    }

    /// Build the logger for one invocation.
    pub fn create_logger(&self, context: &InvocationContext) -> Arc<PipelineLogger> {
        let mut builder = PipelineLogger::builder()
            .minimum_level(LogLevel::Verbose)
            .property(
                INVOCATION_ID_PROPERTY,
                context.invocation_id.to_string(),
            )
            .sink(Arc::new(HostTraceSink::new(context.tracer.clone())));

        if let Some(sink) = (self.provider)().sink {
            builder = builder.sink(sink);
        }

        builder.build()
    }

    /// Build the logger for one invocation and wrap it as a cached
    /// asynchronous value.
    ///
    /// Completes immediately; the asynchronous signature satisfies the
    /// host's invocation machinery.
    pub async fn bind(&self, context: &InvocationContext) -> CachedLoggerValue {
        CachedLoggerValue::new(self.create_logger(context))
    }
}
