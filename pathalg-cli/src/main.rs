//! Main entry point for the pathalg CLI.
//!
//! This is the command-line interface for the pathalg library:
//! - `resolve`: Resolve a path against a base
//! - `relative`: Compute the relative path between two absolute paths
//! - `is-absolute`: Check whether a path is absolute
//! - `clean`: Normalize a path
//! - `show-platform`: Show the selected path grammar

use clap::Parser;
use pathalg_cli::cli::{Cli, Command};
use pathalg_cli::error::CliError;
use pathalg_cli::utils::{load_configuration, select_logger, Session};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();
    let global = cli.global_options();

    // Completions need neither configuration nor logging
    if let Command::Completions(cmd) = &cli.command {
        exit_with(cmd.execute());
    }

    // Load configuration, then initialize logging from flags and config
    let config = load_configuration(&global);
    let logger = select_logger(&global, config.as_ref().ok());
    if let Err(e) = logger.install() {
        eprintln!("WARN: {e}");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => exit_with(Err(e)),
    };
    log::debug!("using {} path grammar", config.platform_or_host());

    let session = Session::new(config, global.format);

    // Execute the command
    let result = match cli.command {
        Command::Resolve(cmd) => cmd.execute(&session),
        Command::Relative(cmd) => cmd.execute(&session),
        Command::IsAbsolute(cmd) => cmd.execute(&session),
        Command::Clean(cmd) => cmd.execute(&session),
        Command::ShowPlatform(cmd) => cmd.execute(&session),
        Command::Completions(cmd) => cmd.execute(),
    };

    exit_with(result);
}

// Handle errors and set exit code
fn exit_with(result: Result<(), CliError>) -> ! {
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
