//! Host-bound sink: structured log events out to the host tracer.

use std::sync::{Arc, Mutex};

use crate::event::{LogEvent, PropertyFormatter, TraceEvent};
use crate::host::HostTracer;
use crate::level::to_trace_level;
use crate::logger::LogEventSink;
use crate::selflog;

/// Source tag stamped on every event this sink forwards.
///
/// The reverse path ([`EventLoggerTracer`](super::EventLoggerTracer))
/// drops events carrying this tag, which is what prevents a forwarded
/// event from echoing back across the bridge.
pub const SOURCE_NAME: &str = "HostTraceSink";

/// A [`LogEventSink`] that writes structured log events to a host
/// tracer.
///
/// The held tracer is not assumed to be internally thread-safe, so
/// delivery happens inside this sink's own mutex: concurrent `emit`
/// calls serialize at the point of delivery and each sink's events
/// reach its tracer in `emit` order, never interleaved. The lock is
/// per sink instance.
///
/// A tracer failure during delivery is swallowed: the sink writes one
/// line to the [`selflog`](crate::selflog) channel and returns, so a
/// broken tracer never crashes a logging caller.
pub struct HostTraceSink {
    tracer: Mutex<Arc<dyn HostTracer>>,
    formatter: Option<Arc<dyn PropertyFormatter>>,
}

impl HostTraceSink {
    /// Create a sink over the given tracer, rendering property values
    /// verbatim.
    pub fn new(tracer: Arc<dyn HostTracer>) -> Self {
        Self {
            tracer: Mutex::new(tracer),
            formatter: None,
        }
    }

    /// Create a sink that renders property values through `formatter`.
    pub fn with_formatter(
        tracer: Arc<dyn HostTracer>,
        formatter: Arc<dyn PropertyFormatter>,
    ) -> Self {
        Self {
            tracer: Mutex::new(tracer),
            formatter: Some(formatter),
        }
    }
}

impl LogEventSink for HostTraceSink {
    fn emit(&self, event: &LogEvent) {
        let trace_event = TraceEvent {
            level: to_trace_level(event.level),
            message: event.render_message(self.formatter.as_deref()),
            source: Some(SOURCE_NAME.to_string()),
            error: event.error.clone(),
            timestamp: event.timestamp,
        };
        let tracer = self.tracer.lock().unwrap();
        if let Err(error) = tracer.trace(&trace_event) {
            selflog::write_line(format_args!(
                "Host tracer failed to deliver an event: {error}"
            ));
        }
    }
}
