//! The two severity scales and the conversions between them.
//!
//! The host tracer and the structured event logger grade severity on
//! different scales:
//!
//! - [`TraceLevel`] is the host scale: `Off`, `Error`, `Warning`, `Info`,
//!   `Verbose`, ordered so that a configured level admits everything at
//!   or below it numerically (host convention).
//! - [`LogLevel`] is the structured scale: `Verbose` through `Fatal`,
//!   ordered ascending by severity.
//!
//! The mapping functions are total. `Debug` and `Fatal` have no host
//! counterpart and collapse onto `Verbose` and `Error` respectively, so
//! the mapping is not a bijection. A severity that cannot be mapped is
//! never an error: it degrades to `Info`/`Information` and leaves one
//! breadcrumb on the [`selflog`](crate::selflog) channel, since it
//! usually means one side's enum grew a variant the other side has not
//! heard of yet.

use std::fmt;

use crate::selflog;

/// Severity scale of the host tracer.
///
/// Declaration order follows the host's numeric convention
/// (`Off` = 0 through `Verbose` = 4), so `Ord` can be used for
/// host-style threshold filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TraceLevel {
    /// Tracing disabled; events at this level are dropped.
    Off,
    /// Error messages.
    Error,
    /// Warning messages.
    Warning,
    /// General information.
    Info,
    /// Verbose debugging information.
    Verbose,
}

impl TraceLevel {
    /// Convert a raw host level value into a [`TraceLevel`].
    ///
    /// Host levels cross process boundaries as plain integers. A value
    /// outside the known range degrades to [`TraceLevel::Info`] and
    /// writes one self-diagnostic line.
    pub fn from_raw(value: i32) -> TraceLevel {
        match value {
            0 => TraceLevel::Off,
            1 => TraceLevel::Error,
            2 => TraceLevel::Warning,
            3 => TraceLevel::Info,
            4 => TraceLevel::Verbose,
            other => {
                selflog::write_line(format_args!(
                    "Unexpected raw trace level {other}, using TraceLevel::Info."
                ));
                TraceLevel::Info
            }
        }
    }
}

impl Default for TraceLevel {
    fn default() -> Self {
        TraceLevel::Info
    }
}

impl fmt::Display for TraceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TraceLevel::Off => "Off",
            TraceLevel::Error => "Error",
            TraceLevel::Warning => "Warning",
            TraceLevel::Info => "Info",
            TraceLevel::Verbose => "Verbose",
        };
        f.write_str(name)
    }
}

/// Severity scale of the structured event logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Verbose debugging information.
    Verbose,
    /// Debugging information.
    Debug,
    /// General information.
    Information,
    /// Warning messages.
    Warning,
    /// Error messages.
    Error,
    /// Errors that end the process or invocation.
    Fatal,
}

impl LogLevel {
    /// Convert a raw structured level value into a [`LogLevel`].
    ///
    /// A value outside the known range (`Verbose` = 0 through
    /// `Fatal` = 5) degrades to [`LogLevel::Information`] and writes one
    /// self-diagnostic line.
    pub fn from_raw(value: i32) -> LogLevel {
        match value {
            0 => LogLevel::Verbose,
            1 => LogLevel::Debug,
            2 => LogLevel::Information,
            3 => LogLevel::Warning,
            4 => LogLevel::Error,
            5 => LogLevel::Fatal,
            other => {
                selflog::write_line(format_args!(
                    "Unexpected raw log level {other}, using LogLevel::Information."
                ));
                LogLevel::Information
            }
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Verbose => "Verbose",
            LogLevel::Debug => "Debug",
            LogLevel::Information => "Information",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
            LogLevel::Fatal => "Fatal",
        };
        f.write_str(name)
    }
}

/// Map a structured severity onto the host scale.
///
/// `Debug` collapses onto `Verbose` and `Fatal` onto `Error`; the host
/// scale has no finer grades.
pub fn to_trace_level(level: LogLevel) -> TraceLevel {
    match level {
        LogLevel::Verbose | LogLevel::Debug => TraceLevel::Verbose,
        LogLevel::Information => TraceLevel::Info,
        LogLevel::Warning => TraceLevel::Warning,
        LogLevel::Error | LogLevel::Fatal => TraceLevel::Error,
    }
}

/// Map a host severity onto the structured scale.
///
/// `Off` has no structured counterpart. Callers filter it out before
/// mapping; if it arrives here anyway it degrades to `Information` with
/// one self-diagnostic line.
pub fn to_log_level(level: TraceLevel) -> LogLevel {
    match level {
        TraceLevel::Verbose => LogLevel::Verbose,
        TraceLevel::Info => LogLevel::Information,
        TraceLevel::Warning => LogLevel::Warning,
        TraceLevel::Error => LogLevel::Error,
        TraceLevel::Off => {
            selflog::write_line(format_args!(
                "Unexpected trace level Off, using LogLevel::Information."
            ));
            LogLevel::Information
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_structured_to_host_mapping() {
        assert_eq!(to_trace_level(LogLevel::Verbose), TraceLevel::Verbose);
        assert_eq!(to_trace_level(LogLevel::Debug), TraceLevel::Verbose);
        assert_eq!(to_trace_level(LogLevel::Information), TraceLevel::Info);
        assert_eq!(to_trace_level(LogLevel::Warning), TraceLevel::Warning);
        assert_eq!(to_trace_level(LogLevel::Error), TraceLevel::Error);
        assert_eq!(to_trace_level(LogLevel::Fatal), TraceLevel::Error);
    }

    #[test]
    fn test_host_to_structured_mapping() {
        assert_eq!(to_log_level(TraceLevel::Verbose), LogLevel::Verbose);
        assert_eq!(to_log_level(TraceLevel::Info), LogLevel::Information);
        assert_eq!(to_log_level(TraceLevel::Warning), LogLevel::Warning);
        assert_eq!(to_log_level(TraceLevel::Error), LogLevel::Error);
    }

    #[test]
    fn test_round_trips_are_stable_for_shared_grades() {
        for level in [
            LogLevel::Verbose,
            LogLevel::Information,
            LogLevel::Warning,
            LogLevel::Error,
        ] {
            assert_eq!(to_log_level(to_trace_level(level)), level);
        }
        for level in [
            TraceLevel::Verbose,
            TraceLevel::Info,
            TraceLevel::Warning,
            TraceLevel::Error,
        ] {
            assert_eq!(to_trace_level(to_log_level(level)), level);
        }
    }

    #[test]
    fn test_debug_and_fatal_collapse() {
        assert_eq!(to_log_level(to_trace_level(LogLevel::Debug)), LogLevel::Verbose);
        assert_eq!(to_log_level(to_trace_level(LogLevel::Fatal)), LogLevel::Error);
    }

    #[test]
    fn test_host_ordering_follows_numeric_convention() {
        assert!(TraceLevel::Off < TraceLevel::Error);
        assert!(TraceLevel::Error < TraceLevel::Warning);
        assert!(TraceLevel::Warning < TraceLevel::Info);
        assert!(TraceLevel::Info < TraceLevel::Verbose);
    }

    #[test]
    fn test_structured_ordering_ascends_by_severity() {
        assert!(LogLevel::Verbose < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Information);
        assert!(LogLevel::Information < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn test_default_trace_level_is_info() {
        assert_eq!(TraceLevel::default(), TraceLevel::Info);
    }

    #[test]
    fn test_from_raw_known_values() {
        assert_eq!(TraceLevel::from_raw(0), TraceLevel::Off);
        assert_eq!(TraceLevel::from_raw(4), TraceLevel::Verbose);
        assert_eq!(LogLevel::from_raw(0), LogLevel::Verbose);
        assert_eq!(LogLevel::from_raw(5), LogLevel::Fatal);
    }

    #[test]
    fn test_unmapped_values_degrade_with_one_breadcrumb() {
        let _guard = crate::selflog::capture_guard();

        let lines = Arc::new(Mutex::new(Vec::new()));
        let collector = lines.clone();
        crate::selflog::enable(move |line| collector.lock().unwrap().push(line.to_string()));

        assert_eq!(TraceLevel::from_raw(99), TraceLevel::Info);
        assert_eq!(LogLevel::from_raw(-7), LogLevel::Information);
        assert_eq!(to_log_level(TraceLevel::Off), LogLevel::Information);

        crate::selflog::disable();

        let lines = lines.lock().unwrap();
        assert_eq!(
            lines
                .iter()
                .filter(|l| l.contains("raw trace level 99"))
                .count(),
            1
        );
        assert_eq!(
            lines.iter().filter(|l| l.contains("raw log level -7")).count(),
            1
        );
        assert_eq!(
            lines
                .iter()
                .filter(|l| l.contains("trace level Off"))
                .count(),
            1
        );
    }
}
