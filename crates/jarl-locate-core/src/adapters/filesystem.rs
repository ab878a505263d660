use std::path::Path;

use crate::ports::FileSystemPort;

/// [`FileSystemPort`] backed by `std::fs` metadata.
///
/// Symlinks are followed; a dangling link counts as missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystemPort for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_existing_and_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("jarl");
        std::fs::write(&file, b"stub").unwrap();

        assert!(StdFileSystem.exists(&file));
        assert!(!StdFileSystem.exists(&dir.path().join("missing")));
    }
}
