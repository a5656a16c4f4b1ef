//! Registration surface toward the host.
//!
//! The host exposes a configuration object during startup; one call to
//! [`register`] wires the whole bridge into it. Everything behind the
//! [`HostConfiguration`] capability (the host's dependency-injection
//! machinery, its tracer collection) stays outside this crate.

use std::sync::Arc;

use crate::bridge::EventLoggerTracer;
use crate::host::HostTracer;
use crate::invocation::InvocationLoggerFactory;
use crate::level::TraceLevel;
use crate::logger::LoggerProvider;

/// The host's configuration surface, as much of it as the bridge needs.
pub trait HostConfiguration {
    /// Register the factory producing logger values for unit-of-work
    /// parameters.
    fn register_logger_factory(&mut self, factory: InvocationLoggerFactory);

    /// Attach a tracer to the host's tracer collection.
    fn add_tracer(&mut self, tracer: Arc<dyn HostTracer>);
}

/// Wire the bridge into a host configuration.
///
/// Registers one [`InvocationLoggerFactory`] and attaches one
/// [`EventLoggerTracer`] filtered at `level`
/// ([`TraceLevel::default()`] is `Info`). Both use `provider` to reach
/// the configured background logger.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logbridge::host::HostTracer;
/// use logbridge::invocation::InvocationLoggerFactory;
/// use logbridge::level::TraceLevel;
/// use logbridge::logger::noop_provider;
/// use logbridge::registration::{register, HostConfiguration};
///
/// #[derive(Default)]
/// struct Configuration {
///     factories: Vec<InvocationLoggerFactory>,
///     tracers: Vec<Arc<dyn HostTracer>>,
/// }
///
/// impl HostConfiguration for Configuration {
///     fn register_logger_factory(&mut self, factory: InvocationLoggerFactory) {
///         self.factories.push(factory);
///     }
///
///     fn add_tracer(&mut self, tracer: Arc<dyn HostTracer>) {
///         self.tracers.push(tracer);
///     }
/// }
///
/// let mut config = Configuration::default();
/// register(&mut config, TraceLevel::default(), noop_provider());
/// assert_eq!(config.factories.len(), 1);
/// assert_eq!(config.tracers.len(), 1);
/// ```
pub fn register(
    config: &mut dyn HostConfiguration,
    level: TraceLevel,
    provider: LoggerProvider,
) {
    config.register_logger_factory(InvocationLoggerFactory::new(provider.clone()));
    config.add_tracer(Arc::new(EventLoggerTracer::new(level, provider)));
}
