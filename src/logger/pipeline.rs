//! Enrichment and sink fan-out logger.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::event::{LogEvent, SharedError};
use crate::level::LogLevel;

use super::{LogEventSink, Logger, LoggerHandle, LoggerProvider};

/// A structured logger that enriches events with named properties and
/// fans them out to attached sinks.
///
/// Configuration is fixed at build time, so the logger is freely
/// shareable across threads without locking. Child loggers created via
/// [`Logger::with_property`] share the parent's sinks and add one
/// property.
///
/// The pipeline logger is itself a [`LogEventSink`], so one configured
/// logger can be chained as an extra output of another.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use logbridge::event::LogEvent;
/// use logbridge::level::LogLevel;
/// use logbridge::logger::{LogEventSink, Logger, PipelineLogger};
///
/// struct CollectingSink(Mutex<Vec<LogEvent>>);
///
/// impl LogEventSink for CollectingSink {
///     fn emit(&self, event: &LogEvent) {
///         self.0.lock().unwrap().push(event.clone());
///     }
/// }
///
/// let sink = Arc::new(CollectingSink(Mutex::new(Vec::new())));
/// let logger = PipelineLogger::builder()
///     .minimum_level(LogLevel::Information)
///     .property("Component", "demo")
///     .sink(sink.clone())
///     .build();
///
/// logger.info("started");
/// logger.debug("dropped by the level filter");
///
/// let events = sink.0.lock().unwrap();
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].properties.get("Component").map(String::as_str), Some("demo"));
/// ```
pub struct PipelineLogger {
    minimum_level: LogLevel,
    properties: BTreeMap<String, String>,
    sinks: Vec<Arc<dyn LogEventSink>>,
}

impl PipelineLogger {
    /// Start building a pipeline logger.
    pub fn builder() -> PipelineLoggerBuilder {
        PipelineLoggerBuilder::default()
    }

    /// The level below which writes are dropped.
    pub fn minimum_level(&self) -> LogLevel {
        self.minimum_level
    }

    /// Number of attached sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Look up an enrichment property by name.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// This logger's handle, sink capability included.
    pub fn handle(self: &Arc<Self>) -> LoggerHandle {
        LoggerHandle::with_sink(self.clone(), self.clone())
    }

    /// A provider that always answers with this logger's handle.
    pub fn provider(self: &Arc<Self>) -> LoggerProvider {
        let this = self.clone();
        Arc::new(move || this.handle())
    }
}

impl Logger for PipelineLogger {
    fn write(&self, level: LogLevel, error: Option<SharedError>, message: &str) {
        if level < self.minimum_level {
            return;
        }
        let mut event = LogEvent::new(level, message);
        event.properties = self.properties.clone();
        event.error = error;
        for sink in &self.sinks {
            sink.emit(&event);
        }
    }

    fn with_property(&self, name: &str, value: &str) -> Arc<dyn Logger> {
        let mut properties = self.properties.clone();
        properties.insert(name.to_string(), value.to_string());
        Arc::new(PipelineLogger {
            minimum_level: self.minimum_level,
            properties,
            sinks: self.sinks.clone(),
        })
    }

    fn describe(&self) -> String {
        format!(
            "PipelineLogger(minimum_level={}, sinks={}, properties={})",
            self.minimum_level,
            self.sinks.len(),
            self.properties.len()
        )
    }
}

impl LogEventSink for PipelineLogger {
    /// Forward an already-built event to this logger's sinks unchanged,
    /// subject to the minimum level.
    fn emit(&self, event: &LogEvent) {
        if event.level < self.minimum_level {
            return;
        }
        for sink in &self.sinks {
            sink.emit(event);
        }
    }
}

/// Builder for [`PipelineLogger`].
pub struct PipelineLoggerBuilder {
    minimum_level: LogLevel,
    properties: BTreeMap<String, String>,
    sinks: Vec<Arc<dyn LogEventSink>>,
}

impl Default for PipelineLoggerBuilder {
    fn default() -> Self {
        Self {
            minimum_level: LogLevel::Verbose,
            properties: BTreeMap::new(),
            sinks: Vec::new(),
        }
    }
}

impl PipelineLoggerBuilder {
    /// Drop writes below this level. Defaults to [`LogLevel::Verbose`],
    /// which admits everything.
    pub fn minimum_level(mut self, level: LogLevel) -> Self {
        self.minimum_level = level;
        self
    }

    /// Attach one enrichment property to every event.
    pub fn property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Attach a sink. Events are delivered in attachment order.
    pub fn sink(mut self, sink: Arc<dyn LogEventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Build the logger.
    pub fn build(self) -> Arc<PipelineLogger> {
        Arc::new(PipelineLogger {
            minimum_level: self.minimum_level,
            properties: self.properties,
            sinks: self.sinks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CollectingSink {
        events: Mutex<Vec<LogEvent>>,
    }

    impl LogEventSink for CollectingSink {
        fn emit(&self, event: &LogEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn test_write_fans_out_to_all_sinks_in_order() {
        let first = Arc::new(CollectingSink::default());
        let second = Arc::new(CollectingSink::default());
        let logger = PipelineLogger::builder()
            .sink(first.clone())
            .sink(second.clone())
            .build();

        logger.info("hello");

        assert_eq!(first.events.lock().unwrap().len(), 1);
        assert_eq!(second.events.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_write_attaches_properties() {
        let sink = Arc::new(CollectingSink::default());
        let logger = PipelineLogger::builder()
            .property("InvocationId", "abc-123")
            .sink(sink.clone())
            .build();

        logger.warn("low disk");

        let events = sink.events.lock().unwrap();
        assert_eq!(events[0].level, LogLevel::Warning);
        assert_eq!(
            events[0].properties.get("InvocationId").map(String::as_str),
            Some("abc-123")
        );
    }

    #[test]
    fn test_minimum_level_filters_writes() {
        let sink = Arc::new(CollectingSink::default());
        let logger = PipelineLogger::builder()
            .minimum_level(LogLevel::Warning)
            .sink(sink.clone())
            .build();

        logger.info("dropped");
        logger.error("kept");

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].template, "kept");
    }

    #[test]
    fn test_with_property_derives_enriched_child() {
        let sink = Arc::new(CollectingSink::default());
        let logger = PipelineLogger::builder()
            .property("A", "1")
            .sink(sink.clone())
            .build();

        let child = logger.with_property("B", "2");
        child.info("from child");
        logger.info("from parent");

        let events = sink.events.lock().unwrap();
        assert_eq!(events[0].properties.len(), 2);
        assert_eq!(events[0].properties.get("B").map(String::as_str), Some("2"));
        // The parent is unchanged.
        assert_eq!(events[1].properties.len(), 1);
    }

    #[test]
    fn test_as_sink_forwards_events_unchanged() {
        let inner = Arc::new(CollectingSink::default());
        let logger = PipelineLogger::builder()
            .property("Ignored", "x")
            .sink(inner.clone())
            .build();

        let event = LogEvent::new(LogLevel::Error, "pre-built").with_property("Origin", "other");
        LogEventSink::emit(logger.as_ref(), &event);

        let events = inner.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        // Forwarded events keep their own properties.
        assert!(events[0].properties.contains_key("Origin"));
        assert!(!events[0].properties.contains_key("Ignored"));
    }

    #[test]
    fn test_as_sink_applies_minimum_level() {
        let inner = Arc::new(CollectingSink::default());
        let logger = PipelineLogger::builder()
            .minimum_level(LogLevel::Error)
            .sink(inner.clone())
            .build();

        LogEventSink::emit(logger.as_ref(), &LogEvent::new(LogLevel::Debug, "dropped"));

        assert!(inner.events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_handle_carries_sink_capability() {
        let logger = PipelineLogger::builder().build();
        let handle = logger.handle();
        assert!(handle.sink.is_some());
    }

    #[test]
    fn test_provider_answers_with_same_logger() {
        let sink = Arc::new(CollectingSink::default());
        let logger = PipelineLogger::builder().sink(sink.clone()).build();
        let provider = logger.provider();

        provider().logger.info("through provider");

        assert_eq!(sink.events.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_describe_reports_configuration() {
        let logger = PipelineLogger::builder()
            .minimum_level(LogLevel::Debug)
            .property("A", "1")
            .build();
        assert_eq!(
            logger.describe(),
            "PipelineLogger(minimum_level=Debug, sinks=0, properties=1)"
        );
    }
}
