//! Command-line interface for strictly_games.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Games - tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Play tic-tac-toe against the computer in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match in the terminal
    Play(PlayArgs),

    /// Print the default configuration as TOML
    DefaultConfig,
}

/// Options for `play`.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Rounds needed to win the match (1-10)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub winning_score: Option<u8>,

    /// Seed for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause between rounds in milliseconds
    #[arg(long)]
    pub round_delay_ms: Option<u64>,

    /// Don't clear the screen before drawing the board
    #[arg(long)]
    pub no_clear: bool,

    /// Where tracing output goes
    #[arg(long, default_value = "strictly_tictactoe.log")]
    pub log_file: PathBuf,
}
