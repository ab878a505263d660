//! CLI entry point - the composition root.

use std::process::ExitCode;

use clap::Parser;

use jarl_locate_cli::{Cli, CliConfig, CliError, Commands, handlers, logging};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads its `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli)?;

    match cli.command.unwrap_or(Commands::Resolve) {
        Commands::Resolve => handlers::resolve::execute(&config).await?,
        Commands::Candidates => handlers::candidates::execute(&config),
    }

    Ok(())
}
