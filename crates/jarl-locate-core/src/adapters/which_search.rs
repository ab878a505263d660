//! Search-path lookup backed by the `which` crate.

use std::ffi::OsString;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::ports::ExecutableSearchPort;

/// [`ExecutableSearchPort`] that runs `which` on the blocking thread pool.
///
/// By default the process `PATH` and working directory are used. A pinned
/// search path makes the lookup independent of the process environment.
#[derive(Debug, Clone, Default)]
pub struct WhichSearch {
    pinned: Option<PinnedSearchPath>,
}

#[derive(Debug, Clone)]
struct PinnedSearchPath {
    paths: OsString,
    cwd: PathBuf,
}

impl WhichSearch {
    /// Search the process `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `paths` (formatted like `PATH`) instead of the process variable.
    ///
    /// `cwd` is only used for relative entries in `paths`.
    pub fn with_search_path(paths: impl Into<OsString>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            pinned: Some(PinnedSearchPath {
                paths: paths.into(),
                cwd: cwd.into(),
            }),
        }
    }
}

#[async_trait]
impl ExecutableSearchPort for WhichSearch {
    async fn find(&self, binary_name: &str) -> Option<PathBuf> {
        let name = binary_name.to_string();
        let pinned = self.pinned.clone();

        let outcome = tokio::task::spawn_blocking(move || match pinned {
            Some(PinnedSearchPath { paths, cwd }) => which::which_in(&name, Some(paths), cwd),
            None => which::which(&name),
        })
        .await;

        match outcome {
            Ok(Ok(path)) => Some(path),
            Ok(Err(e)) => {
                debug!("which lookup for {binary_name} returned no match: {e}");
                None
            }
            Err(e) => {
                warn!("which lookup for {binary_name} did not complete: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn write_executable(path: &std::path::Path) {
        use std::os::unix::fs::PermissionsExt;

        std::fs::write(path, b"#!/bin/sh\n").unwrap();
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn first_directory_in_search_order_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        write_executable(&first.path().join("jarl"));
        write_executable(&second.path().join("jarl"));

        let paths = std::env::join_paths([first.path(), second.path()]).unwrap();
        let search = WhichSearch::with_search_path(paths, first.path());

        let found = search.find("jarl").await;
        assert_eq!(found, Some(first.path().join("jarl")));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_executable_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("jarl"), b"not executable").unwrap();

        let search = WhichSearch::with_search_path(dir.path().as_os_str(), dir.path());
        assert_eq!(search.find("jarl").await, None);
    }

    #[tokio::test]
    async fn empty_search_path_is_absent_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let search = WhichSearch::with_search_path("", dir.path());

        assert_eq!(search.find("jarl").await, None);
    }

    #[tokio::test]
    async fn missing_directory_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("does-not-exist");
        let search = WhichSearch::with_search_path(gone.as_os_str(), dir.path());

        assert_eq!(search.find("jarl").await, None);
    }
}
