//! Default implementations of the resolver ports.

mod diagnostics;
mod filesystem;
mod which_search;

pub use diagnostics::{RecordingDiagnostics, TRACE_TARGET, TracingDiagnostics};
pub use filesystem::StdFileSystem;
pub use which_search::WhichSearch;
