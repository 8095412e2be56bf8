//! Strictly Games - terminal tic-tac-toe

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use strictly_games::cli::{Cli, Command, PlayArgs};
use strictly_games::{ConsoleInput, ConsolePresenter, GameConfig, run_session};
use strictly_tictactoe::WinningScore;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => play(args),
        Command::DefaultConfig => {
            print!("{}", GameConfig::default().to_toml()?);
            Ok(())
        }
    }
}

/// Logs to a file so tracing output never lands between prompts.
fn initialize_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[instrument(skip_all)]
fn play(args: PlayArgs) -> Result<()> {
    initialize_tracing(&args.log_file)?;
    info!("Starting Strictly Games tic-tac-toe");

    let mut config = GameConfig::load(args.config.as_deref())?;
    if let Some(score) = args.winning_score {
        config.set_winning_score(WinningScore::new(score)?);
    }
    if let Some(seed) = args.seed {
        config.set_seed(seed);
    }
    if let Some(millis) = args.round_delay_ms {
        config.set_round_delay_ms(millis);
    }
    if args.no_clear {
        config.set_clear_screen(false);
    }

    let stdin = std::io::stdin();
    let input = ConsoleInput::new(stdin.lock(), std::io::stdout());
    let presenter = ConsolePresenter::new(
        std::io::stdout(),
        *config.clear_screen(),
        config.round_delay(),
    );

    run_session(&config, input, presenter)
}
