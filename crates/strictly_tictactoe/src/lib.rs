//! Tic-tac-toe against a heuristic computer player, played as a match of
//! rounds up to a winning score.
//!
//! # Architecture
//!
//! - **Board**: nine squares keyed 1-9, with win and draw detection
//! - **Strategy**: offense, defense, center, then any open square
//! - **MatchController**: turn, round and match state machine
//! - **InputSource / Presenter**: the terminal (or a test script) plugs in here
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Marker, Position, strategy};
//! use rand::SeedableRng;
//!
//! let mut board = Board::new();
//! board.occupy(Position::TopLeft, Marker::X);
//! board.occupy(Position::TopCenter, Marker::X);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let reply = strategy::choose_move(&board, Marker::O, Marker::X, &mut rng);
//! assert_eq!(reply, Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod io;
mod player;
mod position;
mod score;
mod types;

pub mod rules;
pub mod strategy;

pub use controller::{MatchController, MatchError, MatchPhase, RoundOutcome};
pub use io::{FirstMoverChoice, InputSource, MatchEvent, Presenter};
pub use player::{DEFAULT_COMPUTER_NAMES, MarkerPool, NamePrompt, Player, Roster, assign_player};
pub use position::Position;
pub use score::{Score, ScoreError, Side, WinningScore};
pub use strategy::{Heuristic, MoveSelector, Tier};
pub use types::{Board, Marker, Square};
