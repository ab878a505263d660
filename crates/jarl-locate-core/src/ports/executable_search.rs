//! Search-path lookup port.
//!
//! # Design Notes
//!
//! - The search may touch many directories, so it is async
//! - It is non-throwing: "search failed" and "no match" are both `None`
//! - No timeout is applied; a hung search-path entry hangs the caller

use std::path::PathBuf;

use async_trait::async_trait;

/// Port for locating an executable on the process search path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExecutableSearchPort: Send + Sync {
    /// Find `binary_name` following `which`-style matching rules.
    ///
    /// Directories are searched in the order the search-path variable lists
    /// them and the first match wins.
    async fn find(&self, binary_name: &str) -> Option<PathBuf>;
}
