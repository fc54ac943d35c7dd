//! Crosswise - unified CLI
//!
//! Tic-tac-toe against tiered AI players in the console or a terminal UI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crosswise::GameConfig;
use crosswise::cli::{Cli, Command, PlayArgs};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Log file for TUI mode, which owns the terminal.
const TUI_LOG_FILE: &str = "crosswise_tui.log";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Console(args) => run_console(args),
        Command::Tui(args) => run_tui(args),
    }
}

/// Run the console game
#[instrument(skip_all)]
fn run_console(args: PlayArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::resolve(&args)?;
    info!(?config, "Starting console game");

    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();
    crosswise::console::run(&config, &mut input, &mut output)?;
    Ok(())
}

/// Run the terminal UI
#[instrument(skip_all)]
fn run_tui(args: PlayArgs) -> Result<()> {
    // Log to a file so output does not corrupt the screen
    let log_file = std::fs::File::create(TUI_LOG_FILE)
        .with_context(|| format!("Failed to create {}", TUI_LOG_FILE))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let config = GameConfig::resolve(&args)?;
    info!(?config, "Starting TUI");

    crosswise::tui::run(&config)
}
