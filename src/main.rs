//! Shipyard CLI
//!
//! Usage: shipyard [COMMAND]
//!
//! Commands:
//!   generate  Create the project directory and render every artifact
//!   deploy    Generate, then run skaffold and apply the monitoring configs
//!
//! Without a command, `deploy` runs with configured defaults.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

mod cli;
mod commands;
mod logging;
mod terminal;

use cli::{Cli, Commands};
use shipyard::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let cwd = std::env::current_dir().context("reading current directory")?;
    let loaded = Config::resolve(cli.config.as_deref(), &cwd)?;
    let mut config = loaded.config;
    if let Some(path) = cli.log_file {
        config.logging.file = path;
    }

    logging::init(&config.logging.file, cli.verbose)?;
    info!("Starting shipyard");
    if loaded.sources.is_empty() {
        info!("using built-in configuration");
    }
    for path in &loaded.sources {
        info!(config = %path.display(), "configuration loaded");
    }
    for warning in &loaded.warnings {
        warn!("{}", warning);
        eprintln!("Warning: {}", warning);
    }

    let events = commands::event_sink(cli.json);
    match cli.command.unwrap_or_default() {
        Commands::Generate { spec } => {
            commands::generate::cmd_generate(&spec, &config, events.as_ref())?;
            Ok(true)
        }
        Commands::Deploy { spec, dry_run } => {
            commands::deploy::cmd_deploy(&spec, dry_run, cli.json, &config, events.as_ref())
        }
    }
}
