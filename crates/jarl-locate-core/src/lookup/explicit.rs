//! Explicit `jarl.executablePath` lookup.
//!
//! The configured string is used verbatim: no `~` expansion, no
//! normalization, no symlink resolution, no permission check.

use std::path::PathBuf;

use crate::ports::{DiagnosticSinkPort, FileSystemPort};

/// Why an explicit path did not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplicitMiss {
    /// The setting was unset or empty.
    NotProvided,
    /// The setting names a path that does not exist.
    DoesNotExist(PathBuf),
}

/// Validate an explicit path, reporting why it was rejected.
///
/// An unset path never touches the filesystem.
pub fn check_explicit(
    fs: &dyn FileSystemPort,
    path: Option<&str>,
) -> Result<PathBuf, ExplicitMiss> {
    let Some(raw) = path.filter(|raw| !raw.is_empty()) else {
        return Err(ExplicitMiss::NotProvided);
    };

    let path = PathBuf::from(raw);
    if fs.exists(&path) {
        Ok(path)
    } else {
        Err(ExplicitMiss::DoesNotExist(path))
    }
}

/// Check the user-configured executable path.
pub fn lookup_explicit(
    fs: &dyn FileSystemPort,
    diagnostics: &dyn DiagnosticSinkPort,
    path: Option<&str>,
) -> Option<PathBuf> {
    match check_explicit(fs, path) {
        Ok(path) => {
            diagnostics.append(format!(
                "Found executable from `jarl.executablePath`: {}",
                path.display()
            ));
            Some(path)
        }
        Err(ExplicitMiss::NotProvided) => {
            diagnostics.append(
                "Failed to find executable from path, no `jarl.executablePath` provided"
                    .to_string(),
            );
            None
        }
        Err(ExplicitMiss::DoesNotExist(_)) => {
            diagnostics.append(
                "Failed to find executable from path, provided `jarl.executablePath` does not exist"
                    .to_string(),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RecordingDiagnostics;
    use crate::ports::MockFileSystemPort;
    use mockall::predicate::eq;
    use std::path::Path;

    #[test]
    fn unset_and_empty_skip_the_filesystem() {
        let mut fs = MockFileSystemPort::new();
        fs.expect_exists().never();

        assert_eq!(check_explicit(&fs, None), Err(ExplicitMiss::NotProvided));
        assert_eq!(check_explicit(&fs, Some("")), Err(ExplicitMiss::NotProvided));
    }

    #[test]
    fn missing_path_reports_distinct_reason() {
        let mut fs = MockFileSystemPort::new();
        fs.expect_exists()
            .with(eq(Path::new("/opt/x/jarl")))
            .times(1)
            .return_const(false);

        let sink = RecordingDiagnostics::new();
        assert_eq!(lookup_explicit(&fs, &sink, Some("/opt/x/jarl")), None);
        assert!(sink.lines()[0].contains("does not exist"));
    }

    #[test]
    fn unset_path_reports_not_provided() {
        let fs = MockFileSystemPort::new();
        let sink = RecordingDiagnostics::new();

        assert_eq!(lookup_explicit(&fs, &sink, None), None);
        assert!(sink.lines()[0].contains("no `jarl.executablePath` provided"));
    }

    #[test]
    fn existing_path_is_returned_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("jarl");
        std::fs::write(&file, b"stub").unwrap();
        let raw = file.to_string_lossy().into_owned();

        let sink = RecordingDiagnostics::new();
        let found = lookup_explicit(&crate::adapters::StdFileSystem, &sink, Some(&raw));

        assert_eq!(found, Some(file));
        assert!(sink.lines()[0].starts_with("Found executable from `jarl.executablePath`: "));
    }
}
