//! Structured logger abstraction.
//!
//! This module defines the capabilities the bridge consumes and
//! implements, decoupled from any particular logging backend:
//!
//! - [`Logger`] trait: leveled writes, property enrichment, and a
//!   render-to-string operation
//! - [`LogEventSink`] trait: a consumer of structured log events
//! - [`LoggerHandle`]: a logger paired with its optional sink
//!   capability, so "can this logger also be chained as a sink" is an
//!   explicit question with an explicit answer
//! - [`PipelineLogger`]: the minimal enrichment and sink fan-out
//!   implementation used for per-invocation loggers
//! - [`NoOpLogger`]: silent logger for tests and unconfigured hosts
//! - [`TracingLogger`]: production adapter that delegates to the
//!   `tracing` crate
//!
//! # Usage
//!
//! Components that need logging accept an `Arc<dyn Logger>`:
//!
//! ```
//! use std::sync::Arc;
//! use logbridge::logger::{Logger, NoOpLogger};
//!
//! struct MyComponent {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl MyComponent {
//!     fn do_work(&self) {
//!         self.logger.info("starting work");
//!     }
//! }
//!
//! let component = MyComponent { logger: Arc::new(NoOpLogger) };
//! component.do_work();
//! ```

mod noop;
mod pipeline;
mod tracing_adapter;
mod r#trait;

pub use noop::NoOpLogger;
pub use pipeline::{PipelineLogger, PipelineLoggerBuilder};
pub use r#trait::{noop_provider, LogEventSink, Logger, LoggerHandle, LoggerProvider};
pub use tracing_adapter::TracingLogger;
