//! Per-invocation logger construction and caching.
//!
//! The host runs units of work ("invocations"), each identified by a
//! unique id and each handed a host tracer. This module builds the
//! structured logger for one invocation and wraps it as a cached
//! asynchronous value:
//!
//! - [`InvocationContext`]: what the host supplies per invocation
//! - [`InvocationLoggerFactory`]: builds the per-invocation logger
//! - [`CachedLoggerValue`]: hands the same logger back on every
//!   retrieval within the invocation

mod factory;
mod value;

use std::sync::Arc;

use uuid::Uuid;

use crate::host::HostTracer;

pub use factory::{InvocationLoggerFactory, INVOCATION_ID_PROPERTY};
pub use value::CachedLoggerValue;

/// Host-supplied context for one unit-of-work run.
///
/// Created by the host per invocation and read-only to the bridge.
#[derive(Clone)]
pub struct InvocationContext {
    /// Unique identifier of this invocation.
    pub invocation_id: Uuid,
    /// The host tracer serving this invocation.
    pub tracer: Arc<dyn HostTracer>,
}

impl InvocationContext {
    /// Create a context for the given invocation id and tracer.
    pub fn new(invocation_id: Uuid, tracer: Arc<dyn HostTracer>) -> Self {
        Self {
            invocation_id,
            tracer,
        }
    }
}
