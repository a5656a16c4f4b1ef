//! The two-way bridge between the structured logger and the host tracer.
//!
//! - [`HostTraceSink`] receives structured log events and forwards them
//!   to a host tracer, tagging each forwarded event with
//!   [`SOURCE_NAME`].
//! - [`EventLoggerTracer`] receives host trace events and forwards
//!   them to the structured logger, dropping events whose source equals
//!   [`SOURCE_NAME`].
//!
//! The tag check is what keeps the two directions from feeding each
//! other forever: an event that crosses the bridge once carries the
//! sink's identity and is recognized and dropped if it ever comes back.

mod sink;
mod tracer;

pub use sink::{HostTraceSink, SOURCE_NAME};
pub use tracer::{EventLoggerTracer, HOST_EVENT_SOURCE_PROPERTY};
