//! Seams between the match controller and whatever drives the terminal.
//!
//! The controller asks an [`InputSource`] for decisions and tells a
//! [`Presenter`] what happened. Input sources hand back values that are
//! already valid: an open square, a marker from the offered set, a target
//! within range.

use crate::{Board, Marker, Player, Position, Score, Side, WinningScore};
use anyhow::Result;

/// Who opens a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FirstMoverChoice {
    /// The human moves first.
    #[display("human")]
    Human,
    /// The computer moves first.
    #[display("computer")]
    Computer,
    /// The computer tosses a coin.
    #[display("random")]
    Random,
}

/// Source of the human's decisions.
pub trait InputSource {
    /// Marker the human wants, drawn from `options`.
    fn choose_marker(&mut self, options: &[Marker]) -> Result<Marker>;

    /// The human's display name.
    fn player_name(&mut self) -> Result<String>;

    /// Who opens the next round.
    fn first_mover(&mut self) -> Result<FirstMoverChoice>;

    /// An unmarked square on `board`.
    fn choose_square(&mut self, board: &Board) -> Result<Position>;

    /// Whether to start another match after a grand winner.
    fn play_again(&mut self) -> Result<bool>;

    /// Rounds needed to win the match.
    fn winning_score(&mut self) -> Result<WinningScore>;
}

/// Something the presenter should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    /// A new session begins.
    Welcome {
        /// The human player.
        human: Player,
        /// The computer player.
        computer: Player,
        /// Rounds needed to win.
        target: WinningScore,
    },
    /// A fresh board is about to be played.
    RoundStarted {
        /// 1-based round number within the match.
        round: u32,
    },
    /// The opener for this round has been settled.
    FirstMoverDecided {
        /// Side that moves first.
        side: Side,
        /// How it was decided.
        choice: FirstMoverChoice,
    },
    /// The human is about to make one of the first two moves of a round.
    OpeningMove {
        /// Side that opened the round.
        opener: Side,
        /// How the opener was decided.
        choice: FirstMoverChoice,
    },
    /// Board or score changed.
    BoardChanged {
        /// Current board.
        board: Board,
        /// Current score.
        score: Score,
    },
    /// The computer marked a square.
    ComputerMoved {
        /// Square taken.
        position: Position,
        /// Computer's marker.
        marker: Marker,
    },
    /// A round finished.
    RoundOver {
        /// Winner, or `None` for a tie.
        winner: Option<Side>,
        /// Score after the round.
        score: Score,
        /// Whether the match continues with another round.
        match_continues: bool,
    },
    /// Pause before the next round starts.
    NextRound,
    /// Someone reached the target.
    GrandWinner {
        /// The grand winner.
        side: Side,
        /// Final score.
        score: Score,
    },
    /// The session is over.
    Goodbye,
}

/// Display sink for match events. Never feeds back into game state.
pub trait Presenter {
    /// Shows one event.
    fn present(&mut self, event: &MatchEvent);
}
