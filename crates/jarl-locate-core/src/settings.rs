//! Executable settings as an editor host stores them.
//!
//! Settings are read from an editor-style `settings.json` with flat dotted
//! keys. Unrelated keys are ignored. Comments (JSONC) are not supported.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{ResolveRequest, StrategySetting};

/// Settings key for the executable strategy.
pub const STRATEGY_KEY: &str = "jarl.executableStrategy";

/// Settings key for the explicit executable path.
pub const EXECUTABLE_PATH_KEY: &str = "jarl.executablePath";

/// Settings that drive executable resolution.
///
/// All fields are optional in the file; missing ones take defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExecutableSettings {
    /// Preferred executable source. Defaults to `bundled`.
    #[serde(rename = "jarl.executableStrategy")]
    pub executable_strategy: StrategySetting,

    /// Path used by the `path` strategy.
    #[serde(rename = "jarl.executablePath", skip_serializing_if = "Option::is_none")]
    pub executable_path: Option<String>,
}

/// Errors reading executable settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Invalid settings JSON{}: {reason}", describe_source(.path.as_deref()))]
    Parse {
        path: Option<PathBuf>,
        reason: String,
    },
}

fn describe_source(path: Option<&Path>) -> String {
    path.map(|path| format!(" in {}", path.display()))
        .unwrap_or_default()
}

impl ExecutableSettings {
    /// Parse settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|e| SettingsError::Parse {
            path: None,
            reason: e.to_string(),
        })
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| SettingsError::Parse {
            path: Some(path.to_path_buf()),
            reason: e.to_string(),
        })
    }

    /// Build a resolve request for the given trust flag.
    pub fn to_request(&self, trusted: bool) -> ResolveRequest {
        ResolveRequest {
            trusted,
            strategy: self.executable_strategy.clone(),
            explicit_path: self.executable_path.clone(),
        }
    }
}
