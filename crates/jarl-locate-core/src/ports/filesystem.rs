//! Filesystem existence checks.

use std::path::Path;

/// Port for read-only existence checks.
///
/// Implementations must never create, modify or delete files.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystemPort: Send + Sync {
    /// Whether `path` exists at the moment of the call (a synchronous stat).
    fn exists(&self, path: &Path) -> bool;
}
