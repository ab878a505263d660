//! Main CLI parser and top-level argument handling.
//!
//! Every input the resolver needs can come from a flag or an environment
//! variable, so editor hosts can drive the binary without building argv.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use crate::commands::Commands;

/// Locate the jarl language-server executable.
#[derive(Debug, Parser)]
#[command(name = "jarl-locate")]
#[command(about = "Locate the jarl language-server executable")]
#[command(version)]
pub struct Cli {
    /// Install root of the editor extension (contains `bundled/bin`)
    #[arg(long = "extension-root", env = "JARL_EXTENSION_ROOT", global = true)]
    pub extension_root: Option<PathBuf>,

    /// Treat the workspace as trusted (enables environment and path lookups).
    ///
    /// Accepts `1`/`0`, `yes`/`no`, `on`/`off` and `true`/`false`.
    #[arg(
        long,
        env = "JARL_WORKSPACE_TRUSTED",
        global = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub trusted: bool,

    /// Executable strategy: bundled, environment or path
    #[arg(long, env = "JARL_EXECUTABLE_STRATEGY", global = true)]
    pub strategy: Option<String>,

    /// Executable used by the `path` strategy
    #[arg(long = "executable-path", env = "JARL_EXECUTABLE_PATH", global = true)]
    pub executable_path: Option<String>,

    /// Editor settings file holding `jarl.executableStrategy` and `jarl.executablePath`
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "jarl-locate",
            "--extension-root",
            "/ext",
            "--trusted",
            "--strategy",
            "path",
            "--executable-path",
            "/opt/x/jarl",
            "resolve",
        ]);
        assert_eq!(cli.extension_root, Some(PathBuf::from("/ext")));
        assert!(cli.trusted);
        assert_eq!(cli.strategy.as_deref(), Some("path"));
        assert_eq!(cli.executable_path.as_deref(), Some("/opt/x/jarl"));
        assert!(matches!(cli.command, Some(Commands::Resolve)));
    }

    #[test]
    fn test_trusted_accepts_boolish_values() {
        for (raw, expected) in [("1", true), ("0", false), ("yes", true), ("off", false)] {
            let cli = Cli::try_parse_from(["jarl-locate", &format!("--trusted={raw}")]).unwrap();
            assert_eq!(cli.trusted, expected, "--trusted={raw}");
        }
    }

    #[test]
    fn test_bare_trusted_flag_does_not_swallow_subcommand() {
        let cli = Cli::parse_from(["jarl-locate", "--trusted", "candidates"]);
        assert!(cli.trusted);
        assert!(matches!(cli.command, Some(Commands::Candidates)));
    }

    #[test]
    fn test_trusted_rejects_garbage() {
        assert!(Cli::try_parse_from(["jarl-locate", "--trusted=maybe"]).is_err());
    }

    #[test]
    fn test_strategy_is_not_validated_by_parser() {
        let cli = Cli::parse_from(["jarl-locate", "--strategy", "nightly"]);
        assert_eq!(cli.strategy.as_deref(), Some("nightly"));
        assert!(cli.command.is_none());
    }
}
