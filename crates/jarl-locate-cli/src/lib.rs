//! Command-line host for `jarl-locate-core`.
//!
//! Plays the part of the editor host: it owns configuration and the trust
//! flag, wires the default adapters, and reports the resolved executable.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used only by main.rs
use anyhow as _;
use dotenvy as _;
use tokio as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::CliConfig;
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
