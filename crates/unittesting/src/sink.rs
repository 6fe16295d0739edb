//! Report sinks - where the harness writes its warning lines.
//!
//! The harness only ever emits warning-level text. [`TracingSink`] forwards it
//! to whatever `tracing` subscriber the process installed; [`MemorySink`]
//! keeps the lines for inspection.

use parking_lot::Mutex;
use tracing::warn;

/// Destination for report lines.
pub trait ReportSink: Send + Sync {
    /// Record one warning-level message.
    fn warn(&self, message: &str);
}

/// Forwards every line to `tracing` under the `unittesting` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn warn(&self, message: &str) {
        warn!(target: "unittesting", "{message}");
    }
}

/// Collects lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every recorded line.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Number of recorded lines containing `needle`.
    pub fn count_containing(&self, needle: &str) -> usize {
        self.lines
            .lock()
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }

    /// Drop every recorded line.
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl ReportSink for MemorySink {
    fn warn(&self, message: &str) {
        self.lines.lock().push(message.to_string());
    }
}
