//! Strictly Games - terminal tic-tac-toe
//!
//! Console front end for [`strictly_tictactoe`]: TOML configuration,
//! line-based prompts and a presenter that narrates the match.
//!
//! # Example
//!
//! ```no_run
//! use strictly_games::{ConsoleInput, ConsolePresenter, GameConfig, run_session};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::load(None)?;
//! let stdin = std::io::stdin();
//! let input = ConsoleInput::new(stdin.lock(), std::io::stdout());
//! let presenter = ConsolePresenter::new(
//!     std::io::stdout(),
//!     *config.clear_screen(),
//!     config.round_delay(),
//! );
//! run_session(&config, input, presenter)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod console;
mod session;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use console::{ConsoleInput, ConsolePresenter, joinor, render_board};
pub use session::run_session;
