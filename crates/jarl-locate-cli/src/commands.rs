//! Subcommand definitions.

use clap::Subcommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Resolve the executable and print its path (default)
    Resolve,
    /// Show the inputs and the bundled candidate without searching `PATH`
    Candidates,
}
