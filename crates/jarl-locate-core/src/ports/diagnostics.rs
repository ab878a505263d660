//! Diagnostic sink port for the resolution trace.
//!
//! The resolver writes one human-readable line per candidate and per
//! outcome. Persistence and display belong to the sink.

/// Port for appending resolution trace lines to an ordered sink.
pub trait DiagnosticSinkPort: Send + Sync {
    /// Append one line, without trailing newline.
    fn append(&self, line: String);
}
