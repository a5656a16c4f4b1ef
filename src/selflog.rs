//! Self-diagnostics channel for the bridge itself.
//!
//! The bridge forwards events between two logging systems, so it cannot
//! report its own problems through either of them without risking
//! recursion. This module provides a third, process-wide channel that is
//! silent unless explicitly enabled.
//!
//! Only two kinds of breadcrumbs are written here: unmapped severity
//! values arriving at a raw boundary, and host tracer failures that the
//! bridge swallows during delivery.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! let lines = Arc::new(Mutex::new(Vec::new()));
//! let collector = lines.clone();
//! logbridge::selflog::enable(move |line| {
//!     collector.lock().unwrap().push(line.to_string());
//! });
//!
//! logbridge::selflog::write_line(format_args!("something odd happened"));
//! logbridge::selflog::disable();
//!
//! assert_eq!(lines.lock().unwrap().len(), 1);
//! ```

use std::fmt;
use std::sync::{Arc, RwLock};

type Output = Arc<dyn Fn(&str) + Send + Sync>;

static OUTPUT: RwLock<Option<Output>> = RwLock::new(None);

/// Route self-diagnostic lines to the given output.
///
/// Replaces any previously enabled output. The output must not call back
/// into the bridge's logging paths.
pub fn enable<F>(output: F)
where
    F: Fn(&str) + Send + Sync + 'static,
{
    *OUTPUT.write().unwrap() = Some(Arc::new(output));
}

/// Silence the self-diagnostics channel.
pub fn disable() {
    *OUTPUT.write().unwrap() = None;
}

/// Write one diagnostic line, if an output is enabled.
///
/// A no-op when the channel is disabled.
pub fn write_line(args: fmt::Arguments<'_>) {
    let output = OUTPUT.read().unwrap().clone();
    if let Some(output) = output {
        output(&args.to_string());
    }
}

/// Serializes tests that enable the process-wide output.
#[cfg(test)]
pub(crate) fn capture_guard() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::Mutex;
    static GUARD: Mutex<()> = Mutex::new(());
    GUARD.lock().unwrap_or_else(|e| e.into_inner())
}
