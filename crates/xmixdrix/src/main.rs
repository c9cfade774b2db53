//! X Mix Drix - tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use xmixdrix::cli::{Cli, Command};
use xmixdrix::{Config, replay, tui};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;

    match cli.command() {
        Command::Play => {
            initialize_file_tracing(config.log_file())?;
            tui::run(config)
        }
        Command::Replay { moves, json } => {
            initialize_stderr_tracing()?;
            run_replay(&moves, json, &config)
        }
    }
}

#[instrument(skip(config))]
fn run_replay(moves: &[usize], json: bool, config: &Config) -> Result<()> {
    info!(count = moves.len(), "Replaying moves");
    let stdout = std::io::stdout();
    replay::run(moves, json, config, &mut stdout.lock())
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs to a file so output never lands on the screen the TUI draws.
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    tracing_subscriber::registry()
        .with(default_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()?;
    Ok(())
}

fn initialize_stderr_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
