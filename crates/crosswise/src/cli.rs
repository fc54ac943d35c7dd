//! Command-line interface for crosswise.

use clap::{Args, Parser, Subcommand};
use crosswise_core::{Difficulty, Mark};
use std::path::PathBuf;

/// Crosswise - tic-tac-toe against tiered AI players
#[derive(Parser, Debug)]
#[command(name = "crosswise")]
#[command(about = "Play tic-tac-toe against an easy, medium or hard AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the console, typing moves as "x, y"
    Console(PlayArgs),

    /// Play on a full-screen terminal grid with keyboard or mouse
    Tui(PlayArgs),
}

/// Options shared by both front ends. Flags override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Path to a TOML config file (defaults to ./crosswise.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name of player 1
    #[arg(long)]
    pub name: Option<String>,

    /// Mark for player 1 (X or O)
    #[arg(long)]
    pub mark: Option<Mark>,

    /// Name of the AI opponent
    #[arg(long)]
    pub opponent: Option<String>,

    /// AI tier: easy, medium or hard
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Let an AI play seat 1 as well (console only)
    #[arg(long)]
    pub ai_vs_ai: bool,
}
