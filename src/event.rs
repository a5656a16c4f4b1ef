//! Event types carried across the bridge.
//!
//! [`TraceEvent`] is the host-side shape: a level, a message, an
//! optional source tag, and an optional error. [`LogEvent`] is the
//! structured shape: a level, a message template, named properties, and
//! an optional error. Both carry a timestamp and are immutable once
//! constructed.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::level::{LogLevel, TraceLevel};

/// An error value that survives fan-out to multiple consumers.
pub type SharedError = Arc<dyn std::error::Error + Send + Sync>;

/// Formats property values during message rendering.
///
/// The host-bound sink accepts an optional formatter at construction,
/// for callers that need culture- or presentation-specific value
/// formatting. When absent, values render verbatim.
pub trait PropertyFormatter: Send + Sync {
    /// Format the value of the named property for display.
    fn format_value(&self, name: &str, value: &str) -> String;
}

/// A leveled trace event as the host tracer understands it.
#[derive(Debug, Clone)]
pub struct TraceEvent {
    /// Severity on the host scale.
    pub level: TraceLevel,
    /// Rendered message text.
    pub message: String,
    /// Origin tag, used for loop suppression.
    pub source: Option<String>,
    /// Error associated with the event, if any.
    pub error: Option<SharedError>,
    /// When the event was created.
    pub timestamp: DateTime<Utc>,
}

impl TraceEvent {
    /// Create a trace event with no source and no error, stamped now.
    pub fn new(level: TraceLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            source: None,
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Tag the event with an origin source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach an error to the event.
    pub fn with_error(mut self, error: SharedError) -> Self {
        self.error = Some(error);
        self
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "[{}] {}: {}", self.level, source, self.message),
            None => write!(f, "[{}] {}", self.level, self.message),
        }
    }
}

/// A structured log event: a message template plus named properties.
#[derive(Debug, Clone)]
pub struct LogEvent {
    /// Severity on the structured scale.
    pub level: LogLevel,
    /// Message template with `{Name}` placeholders.
    pub template: String,
    /// Named properties attached by enrichment.
    pub properties: BTreeMap<String, String>,
    /// Error associated with the event, if any.
    pub error: Option<SharedError>,
    /// When the event was created.
    pub timestamp: DateTime<Utc>,
}

impl LogEvent {
    /// Create an event with no properties and no error, stamped now.
    pub fn new(level: LogLevel, template: impl Into<String>) -> Self {
        Self {
            level,
            template: template.into(),
            properties: BTreeMap::new(),
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach a named property.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Attach an error.
    pub fn with_error(mut self, error: SharedError) -> Self {
        self.error = Some(error);
        self
    }

    /// Render the message template against the event's properties.
    ///
    /// `{Name}` placeholders are replaced with the matching property
    /// value, passed through `formatter` when one is given. Placeholders
    /// with no matching property are left verbatim, as are unbalanced
    /// braces. `{{` escapes a literal `{`.
    pub fn render_message(&self, formatter: Option<&dyn PropertyFormatter>) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            if let Some(stripped) = after.strip_prefix('{') {
                out.push('{');
                rest = stripped;
                continue;
            }
            match after.find('}') {
                Some(close) => {
                    let name = &after[..close];
                    match self.properties.get(name) {
                        Some(value) => match formatter {
                            Some(f) => out.push_str(&f.format_value(name, value)),
                            None => out.push_str(value),
                        },
                        None => {
                            out.push('{');
                            out.push_str(name);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}
