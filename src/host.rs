//! Host tracer capability.
//!
//! The surrounding execution host supplies its own trace facility. The
//! bridge only needs the one operation defined here; everything else
//! about the host (its filtering layer, its tracer collection, its
//! invocation machinery) stays outside the crate.

use thiserror::Error;

use crate::event::TraceEvent;

/// Errors a host tracer can report while delivering an event.
#[derive(Debug, Error)]
pub enum HostTracerError {
    /// The tracer could not write to its output device.
    #[error("host tracer I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The tracer rejected or failed to deliver the event.
    #[error("host tracer delivery failure: {0}")]
    Delivery(String),
}

/// The host's leveled trace facility.
///
/// Implementations are not assumed to be internally thread-safe; the
/// host-bound sink serializes its deliveries to one tracer behind a
/// per-sink lock. Delivery failures reported here are swallowed by the
/// sink and surfaced only on the [`selflog`](crate::selflog) channel,
/// so a failing tracer never crashes a logging caller.
pub trait HostTracer: Send + Sync {
    /// Deliver one trace event.
    fn trace(&self, event: &TraceEvent) -> Result<(), HostTracerError>;
}
