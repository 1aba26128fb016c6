pub mod commands;
pub mod logging;
pub mod types;

use std::process::ExitCode;

use clap::Parser;
use log::error;

use crate::config;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    let config = match config::load_config(".", cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let ok = match &cli.command {
        Some(types::Commands::Watch) => commands::handle_watch_command(&config),
        Some(types::Commands::Serve { host, port }) => {
            commands::handle_serve_command(host, *port)
        }
        // Default to build command if none provided
        Some(types::Commands::Build) | None => commands::handle_build_command(&config),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
