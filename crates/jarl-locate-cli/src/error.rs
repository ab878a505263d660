//! CLI-specific error types and exit codes.

use jarl_locate_core::{ResolveError, SettingsError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Resolution failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h:
    /// - 69: no usable executable (`EX_UNAVAILABLE`)
    /// - 78: configuration error (`EX_CONFIG`)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Resolve(ResolveError::UnknownStrategy(_)) | Self::Config(_) => 78,
            Self::Resolve(_) => 69,
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn unknown_strategy_is_a_config_error() {
        let err = CliError::from(ResolveError::UnknownStrategy("x".to_string()));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn missing_executable_is_unavailable() {
        let err = CliError::from(ResolveError::UntrustedBundledMissing {
            bundled: PathBuf::from("/ext/bundled/bin/jarl"),
        });
        assert_eq!(err.exit_code(), 69);
        assert!(err.to_string().contains("not trusted"));
    }
}
