//! logbridge - bidirectional bridge between a structured event logger
//! and a host trace facility.
//!
//! The surrounding host provides a simple leveled tracer (a level, a
//! message, an optional source tag, an optional error). Application
//! code wants a structured, property-enriched logger. This crate
//! connects the two in both directions, in process, without
//! duplication or feedback:
//!
//! - [`bridge::HostTraceSink`] forwards structured log events to the
//!   host tracer, tagging them with [`bridge::SOURCE_NAME`]
//! - [`bridge::EventLoggerTracer`] forwards host trace events to the
//!   structured logger, dropping anything tagged with
//!   [`bridge::SOURCE_NAME`]
//! - [`invocation::InvocationLoggerFactory`] builds the logger handed
//!   to each unit-of-work run, enriched with the invocation id and
//!   wired to the run's tracer
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use uuid::Uuid;
//!
//! use logbridge::event::TraceEvent;
//! use logbridge::host::{HostTracer, HostTracerError};
//! use logbridge::invocation::{InvocationContext, InvocationLoggerFactory};
//! use logbridge::logger::{noop_provider, Logger};
//!
//! struct StdoutTracer;
//!
//! impl HostTracer for StdoutTracer {
//!     fn trace(&self, event: &TraceEvent) -> Result<(), HostTracerError> {
//!         println!("{event}");
//!         Ok(())
//!     }
//! }
//!
//! let factory = InvocationLoggerFactory::new(noop_provider());
//! let context = InvocationContext::new(Uuid::new_v4(), Arc::new(StdoutTracer));
//! let logger = factory.create_logger(&context);
//! logger.info("invocation started");
//! ```

pub mod bridge;
pub mod event;
pub mod host;
pub mod invocation;
pub mod level;
pub mod logger;
pub mod registration;
pub mod selflog;

/// Version of the logbridge library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
