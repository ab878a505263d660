//! Diagnostic sinks: forward to `tracing`, or record in memory.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use crate::ports::DiagnosticSinkPort;

/// Tracing target used for resolution trace lines.
pub const TRACE_TARGET: &str = "jarl_locate::resolve";

/// Forwards every trace line as an `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSinkPort for TracingDiagnostics {
    fn append(&self, line: String) {
        info!(target: TRACE_TARGET, "{line}");
    }
}

/// Keeps trace lines in memory, in append order.
///
/// Hosts that render the trace themselves (an output panel, a test) read it
/// back with [`RecordingDiagnostics::lines`].
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    lines: Mutex<Vec<String>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines appended so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return all recorded lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl DiagnosticSinkPort for RecordingDiagnostics {
    fn append(&self, line: String) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
    }
}
