//! Resolution inputs and results.

use std::fmt;
use std::path::{Path, PathBuf};

use super::strategy::StrategySetting;

/// Where a resolved executable came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutableSource {
    /// The copy shipped under the extension root.
    Bundled,
    /// Found on the executable search path.
    Environment,
    /// The user's `jarl.executablePath` setting.
    Explicit,
}

impl ExecutableSource {
    /// Human-readable label used in diagnostic lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bundled => "bundled executable",
            Self::Environment => "environment executable",
            Self::Explicit => "executable from `jarl.executablePath`",
        }
    }
}

impl fmt::Display for ExecutableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => f.write_str("bundled"),
            Self::Environment => f.write_str("environment"),
            Self::Explicit => f.write_str("path"),
        }
    }
}

/// A validated executable path.
///
/// The file existed when it was checked. Nothing guarantees it still exists
/// when the caller spawns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved executable.
    pub path: PathBuf,
    /// How the path was found.
    pub source: ExecutableSource,
}

impl Resolution {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Inputs for a single `resolve` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveRequest {
    /// Host-owned workspace trust flag.
    pub trusted: bool,
    /// Configured strategy; ignored when `trusted` is false.
    pub strategy: StrategySetting,
    /// Raw `jarl.executablePath` value, used only by the `path` strategy.
    pub explicit_path: Option<String>,
}

impl ResolveRequest {
    pub fn new(trusted: bool, strategy: impl Into<StrategySetting>) -> Self {
        Self {
            trusted,
            strategy: strategy.into(),
            explicit_path: None,
        }
    }

    #[must_use]
    pub fn with_explicit_path(mut self, path: impl Into<String>) -> Self {
        self.explicit_path = Some(path.into());
        self
    }
}
