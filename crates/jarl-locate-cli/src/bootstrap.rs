//! Composition root: turns parsed arguments into resolver inputs.
//!
//! Precedence for the strategy and explicit path:
//! 1. Command-line flag or its environment variable
//! 2. The settings file passed with `--settings`
//! 3. Defaults (`bundled`, no explicit path)

use std::path::PathBuf;

use jarl_locate_core::{ExecutableSettings, ResolveRequest, ResolverConfig, StrategySetting};

use crate::error::CliError;
use crate::parser::Cli;

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Host facts for the resolver.
    pub resolver: ResolverConfig,
    /// The request to resolve.
    pub request: ResolveRequest,
}

impl CliConfig {
    /// Build configuration from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let extension_root = cli.extension_root.clone().ok_or_else(|| {
            CliError::Config(
                "extension root is not set; pass --extension-root or set JARL_EXTENSION_ROOT"
                    .to_string(),
            )
        })?;

        let settings = merge_settings(cli)?;

        Ok(Self {
            resolver: ResolverConfig::for_current_platform(absolute(extension_root)?),
            request: settings.to_request(cli.trusted),
        })
    }
}

fn merge_settings(cli: &Cli) -> Result<ExecutableSettings, CliError> {
    let mut settings = match &cli.settings {
        Some(path) => ExecutableSettings::load(path)?,
        None => ExecutableSettings::default(),
    };

    if let Some(strategy) = &cli.strategy {
        settings.executable_strategy = StrategySetting::from(strategy.as_str());
    }
    if let Some(path) = &cli.executable_path {
        settings.executable_path = Some(path.clone());
    }

    Ok(settings)
}

fn absolute(path: PathBuf) -> Result<PathBuf, CliError> {
    if path.is_absolute() {
        return Ok(path);
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|e| CliError::Config(format!("Cannot determine current directory: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use jarl_locate_core::ExecutableStrategy;

    fn cli_without_root() -> Cli {
        Cli {
            extension_root: None,
            trusted: false,
            strategy: None,
            executable_path: None,
            settings: None,
            verbose: false,
            command: None,
        }
    }

    #[test]
    fn requires_extension_root() {
        let err = CliConfig::from_cli(&cli_without_root()).unwrap_err();

        assert!(matches!(err, CliError::Config(ref msg) if msg.contains("--extension-root")));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn flags_override_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = dir.path().join("settings.json");
        std::fs::write(
            &settings,
            r#"{"jarl.executableStrategy": "environment", "jarl.executablePath": "/from/file"}"#,
        )
        .unwrap();

        let cli = Cli::parse_from([
            "jarl-locate",
            "--extension-root",
            "/ext",
            "--settings",
            settings.to_str().unwrap(),
            "--strategy",
            "path",
        ]);
        let config = CliConfig::from_cli(&cli).unwrap();

        assert_eq!(config.request.strategy.known(), Some(ExecutableStrategy::Path));
        assert_eq!(config.request.explicit_path.as_deref(), Some("/from/file"));
    }

    #[test]
    fn settings_file_errors_are_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let cli = Cli::parse_from([
            "jarl-locate",
            "--extension-root",
            "/ext",
            "--settings",
            missing.to_str().unwrap(),
        ]);
        let err = CliConfig::from_cli(&cli).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn relative_extension_root_is_made_absolute() {
        let cli = Cli::parse_from(["jarl-locate", "--extension-root", "ext"]);
        let config = CliConfig::from_cli(&cli).unwrap();

        assert!(config.resolver.extension_root.is_absolute());
        assert!(config.resolver.extension_root.ends_with("ext"));
    }
}
