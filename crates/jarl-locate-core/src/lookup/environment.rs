//! Environment (search path) lookup.

use std::path::PathBuf;

use crate::domain::PlatformFamily;
use crate::ports::{DiagnosticSinkPort, ExecutableSearchPort};

/// Search the executable search path for the platform binary.
///
/// A failed search and an empty result are indistinguishable here; both
/// come back as `None`.
pub async fn lookup_environment(
    search: &dyn ExecutableSearchPort,
    diagnostics: &dyn DiagnosticSinkPort,
    platform: PlatformFamily,
) -> Option<PathBuf> {
    let Some(path) = search.find(platform.binary_name()).await else {
        diagnostics.append("Failed to find environment executable".to_string());
        return None;
    };

    diagnostics.append(format!("Found environment executable: {}", path.display()));
    Some(path)
}
