//! Bundled executable lookup.
//!
//! The release workflow places the binary at
//! `{extension_root}/bundled/bin/{binary_name}`.

use std::path::{Path, PathBuf};

use crate::domain::PlatformFamily;
use crate::ports::{DiagnosticSinkPort, FileSystemPort};

/// Directory under the extension root that holds shipped artifacts.
pub const BUNDLED_DIR: &str = "bundled";

/// Directory under [`BUNDLED_DIR`] that holds the executable.
pub const BUNDLED_BIN_DIR: &str = "bin";

/// Get the path where the bundled executable is expected.
pub fn bundled_executable_path(extension_root: &Path, platform: PlatformFamily) -> PathBuf {
    extension_root
        .join(BUNDLED_DIR)
        .join(BUNDLED_BIN_DIR)
        .join(platform.binary_name())
}

/// Check for the bundled executable.
pub fn lookup_bundled(
    fs: &dyn FileSystemPort,
    diagnostics: &dyn DiagnosticSinkPort,
    extension_root: &Path,
    platform: PlatformFamily,
) -> Option<PathBuf> {
    let path = bundled_executable_path(extension_root, platform);

    if !fs.exists(&path) {
        diagnostics.append(format!("Failed to find bundled executable: {}", path.display()));
        return None;
    }

    diagnostics.append(format!("Found bundled executable: {}", path.display()));
    Some(path)
}
