//! Resolution error types.
//!
//! Every variant is a terminal failure of one `resolve` call. The resolver
//! never retries; callers may resolve again from scratch.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors returned by [`crate::ExecutableResolver::resolve`].
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The workspace is untrusted and the bundled executable is missing.
    #[error(
        "Workspace is not trusted and failed to find executable in bundled location: {}",
        .bundled.display()
    )]
    UntrustedBundledMissing {
        /// The bundled path that was probed
        bundled: PathBuf,
    },

    /// Strategy `bundled`: neither the bundled nor an environment executable exists.
    #[error(
        "Failed to find bundled executable ({}) and fallback environment executable",
        .bundled.display()
    )]
    StrategyBundledExhausted {
        /// The bundled path that was probed
        bundled: PathBuf,
    },

    /// Strategy `environment`: neither an environment nor the bundled executable exists.
    #[error(
        "Failed to find environment executable and fallback bundled executable ({})",
        .bundled.display()
    )]
    StrategyEnvironmentExhausted {
        /// The bundled path that was probed
        bundled: PathBuf,
    },

    /// Strategy `path`: `jarl.executablePath` is unset or does not exist.
    #[error(
        "Failed to find executable at `jarl.executablePath`{}",
        describe_explicit(.path.as_deref())
    )]
    StrategyPathMissing {
        /// The configured path, `None` when the setting was empty or unset
        path: Option<PathBuf>,
    },

    /// The configured strategy is not one of `bundled`, `environment`, `path`.
    #[error("Unknown executable strategy {0:?}; expected one of: bundled, environment, path")]
    UnknownStrategy(String),
}

fn describe_explicit(path: Option<&Path>) -> String {
    path.map_or_else(
        || " (not provided)".to_string(),
        |path| format!(" ({} does not exist)", path.display()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untrusted_message_mentions_trust_and_bundled_path() {
        let err = ResolveError::UntrustedBundledMissing {
            bundled: PathBuf::from("/ext/bundled/bin/jarl"),
        };
        let msg = err.to_string();
        assert!(msg.contains("not trusted"));
        assert!(msg.contains("/ext/bundled/bin/jarl"));
    }

    #[test]
    fn path_missing_distinguishes_unset_from_absent() {
        let unset = ResolveError::StrategyPathMissing { path: None };
        assert!(unset.to_string().ends_with("(not provided)"));

        let absent = ResolveError::StrategyPathMissing {
            path: Some(PathBuf::from("/opt/x/jarl")),
        };
        assert!(absent.to_string().contains("/opt/x/jarl does not exist"));
    }

    #[test]
    fn unknown_strategy_quotes_literal() {
        let err = ResolveError::UnknownStrategy("system".to_string());
        assert!(err.to_string().contains("\"system\""));
    }
}
