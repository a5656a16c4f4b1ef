//! Event-logger-bound tracer: host trace events into the structured logger.

use crate::event::TraceEvent;
use crate::host::{HostTracer, HostTracerError};
use crate::level::{to_log_level, TraceLevel};
use crate::logger::LoggerProvider;

use super::SOURCE_NAME;

/// Property attached to forwarded events naming the host-side source.
pub const HOST_EVENT_SOURCE_PROPERTY: &str = "HostEventSource";

/// A [`HostTracer`] that writes host trace events to the structured
/// logger.
///
/// Attached to the host's tracer collection, it receives every trace
/// event the host's filtering layer admits and forwards it to the
/// logger supplied by the injected provider. Two kinds of events are
/// dropped without action:
///
/// - events whose source equals [`SOURCE_NAME`], which already crossed
///   the bridge once in the other direction
/// - events at [`TraceLevel::Off`], re-checked here even though the
///   host filters first
///
/// When the event carries a non-blank source, the write goes through a
/// child logger enriched with [`HOST_EVENT_SOURCE_PROPERTY`] set to
/// that source.
///
/// The tracer holds only read-only configuration, so concurrent calls
/// from multiple host subsystems need no locking here.
pub struct EventLoggerTracer {
    level: TraceLevel,
    provider: LoggerProvider,
}

impl EventLoggerTracer {
    /// Create a tracer forwarding to the provider's logger.
    ///
    /// `level` is the minimum severity this tracer advertises to the
    /// host's filtering layer; the filtering itself happens host-side.
    pub fn new(level: TraceLevel, provider: LoggerProvider) -> Self {
        Self { level, provider }
    }

    /// The minimum severity configured for host-side filtering.
    pub fn level(&self) -> TraceLevel {
        self.level
    }
}

impl HostTracer for EventLoggerTracer {
    fn trace(&self, event: &TraceEvent) -> Result<(), HostTracerError> {
        // Don't write the event if it originated from the bridge itself.
        if event.source.as_deref() == Some(SOURCE_NAME) || event.level == TraceLevel::Off {
            return Ok(());
        }

        let handle = (self.provider)();
        let logger = match event.source.as_deref() {
            Some(source) if !source.trim().is_empty() => handle
                .logger
                .with_property(HOST_EVENT_SOURCE_PROPERTY, source),
            _ => handle.logger,
        };

        logger.write(to_log_level(event.level), event.error.clone(), &event.message);
        Ok(())
    }
}
