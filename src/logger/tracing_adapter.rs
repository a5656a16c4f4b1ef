//! Tracing library adapter implementation.

use std::fmt::Write as _;
use std::sync::Arc;

use crate::event::SharedError;
use crate::level::LogLevel;

use super::Logger;

/// Logger implementation that delegates to the `tracing` crate.
///
/// This adapter is the production backing for a process-wide logger: a
/// provider returning its handle plugs the bridge into whatever
/// `tracing` subscriber the application installed. Properties gathered
/// through [`Logger::with_property`] and any attached error are
/// appended to the message text, since `tracing` events cannot carry
/// dynamically named fields.
///
/// The adapter offers no sink capability; its handle answers
/// `sink: None` and is never chained as an extra output.
///
/// Level mapping: `Verbose` becomes `trace`, `Debug` becomes `debug`,
/// `Information` becomes `info`, `Warning` becomes `warn`, and both
/// `Error` and `Fatal` become `error`.
#[derive(Debug, Clone, Default)]
pub struct TracingLogger {
    context: Vec<(String, String)>,
}

impl TracingLogger {
    /// Create a new tracing logger adapter with no context properties.
    pub fn new() -> Self {
        Self::default()
    }

    fn format_message(&self, error: Option<&SharedError>, message: &str) -> String {
        let mut text = message.to_string();
        if !self.context.is_empty() {
            text.push_str(" [");
            for (index, (name, value)) in self.context.iter().enumerate() {
                if index > 0 {
                    text.push(' ');
                }
                let _ = write!(text, "{name}={value}");
            }
            text.push(']');
        }
        if let Some(error) = error {
            let _ = write!(text, ": {error}");
        }
        text
    }
}

impl Logger for TracingLogger {
    fn write(&self, level: LogLevel, error: Option<SharedError>, message: &str) {
        let text = self.format_message(error.as_ref(), message);
        match level {
            LogLevel::Verbose => tracing::trace!("{}", text),
            LogLevel::Debug => tracing::debug!("{}", text),
            LogLevel::Information => tracing::info!("{}", text),
            LogLevel::Warning => tracing::warn!("{}", text),
            LogLevel::Error | LogLevel::Fatal => tracing::error!("{}", text),
        }
    }

    fn with_property(&self, name: &str, value: &str) -> Arc<dyn Logger> {
        let mut context = self.context.clone();
        context.push((name.to_string(), value.to_string()));
        Arc::new(TracingLogger { context })
    }

    fn describe(&self) -> String {
        format!("TracingLogger(context={})", self.context.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Mutex;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct BufferWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for BufferWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = BufferWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn captured_output(f: impl FnOnce()) -> String {
        let writer = BufferWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let output = String::from_utf8(writer.0.lock().unwrap().clone()).unwrap();
        output
    }

    #[test]
    fn test_write_reaches_the_subscriber() {
        let logger = TracingLogger::new();
        let output = captured_output(|| logger.info("bridged message"));
        assert!(output.contains("bridged message"));
        assert!(output.contains("INFO"));
    }

    #[test]
    fn test_fatal_maps_to_error_level() {
        let logger = TracingLogger::new();
        let output = captured_output(|| logger.fatal("going down"));
        assert!(output.contains("ERROR"));
    }

    #[test]
    fn test_context_properties_appear_in_message() {
        let logger = TracingLogger::new()
            .with_property("HostEventSource", "DiskMonitor")
            .with_property("Attempt", "2");
        let output = captured_output(|| logger.warn("disk low"));
        assert!(output.contains("disk low [HostEventSource=DiskMonitor Attempt=2]"));
    }

    #[test]
    fn test_error_is_appended_to_message() {
        let logger = TracingLogger::new();
        let error: SharedError = Arc::new(io::Error::new(io::ErrorKind::Other, "boom"));
        let output =
            captured_output(|| logger.write(LogLevel::Error, Some(error), "write failed"));
        assert!(output.contains("write failed: boom"));
    }

    #[test]
    fn test_describe_reports_context_size() {
        let logger = TracingLogger::new().with_property("A", "1");
        assert_eq!(logger.describe(), "TracingLogger(context=1)");
    }

    #[test]
    fn test_tracing_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingLogger>();
    }
}
