// Entrypoint for the CLI application.
// - Parses arguments, sets up logging and resolves the config.
// - Loads the stored API key once (unless registering) for the API client.
// - Is the only place that turns an error into a message and an exit code.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use claw_cli::{cli::Cli, commands, config::Config, token::TokenStore};
use log::{debug, LevelFilter};
use std::io;
use std::process::ExitCode;

fn setup_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else if verbose {
        builder.filter_level(LevelFilter::Debug);
    } else {
        builder.filter_level(LevelFilter::Warn);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help().context("Failed to print help")?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = Config::load();
    debug!("base url {}, token file {}", config.base_url, config.token_path.display());

    let store = TokenStore::new(&config.token_path);
    let result = commands::client_for(&command, &config.base_url, &store)
        .and_then(|api| commands::run(command, &api, &store, &mut io::stdout().lock()));

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
