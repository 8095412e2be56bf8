//! Heuristic computer player.
//!
//! One move of look-ahead in each direction: finish our own line, block
//! the opponent's, take the center, otherwise any open square. An optimal
//! opponent can still force a draw or win against it.

use crate::rules::{WINNING_LINES, line_markers};
use crate::{Board, Marker, Position, Square};
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use tracing::{debug, instrument};

/// Which rule produced the computer's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Tier {
    /// Completes a line of our own.
    #[display("offense")]
    Offense,
    /// Blocks the opponent's two-in-a-line.
    #[display("defense")]
    Defense,
    /// Takes the center square.
    #[display("center")]
    Center,
    /// Any open square.
    #[display("fallback")]
    Fallback,
}

/// The open square that would complete a line for `marker`.
///
/// Lines are scanned rows, then columns, then diagonals; the first line
/// with two `marker` squares and one empty square wins.
#[instrument(skip(board))]
pub fn completing_square(board: &Board, marker: Marker) -> Option<Position> {
    WINNING_LINES.iter().find_map(|line| {
        let squares = line_markers(board, line);
        let own = squares
            .iter()
            .filter(|sq| **sq == Square::Marked(marker))
            .count();
        let open: Vec<Position> = line
            .iter()
            .zip(squares)
            .filter(|(_, sq)| sq.is_empty())
            .map(|(pos, _)| *pos)
            .collect();
        match (own, open.as_slice()) {
            (2, [pos]) => Some(*pos),
            _ => None,
        }
    })
}

/// The deterministic tiers: offense, defense, center.
///
/// Offense is always checked before defense, so a winning move is taken
/// even when the opponent also threatens.
#[instrument(skip(board))]
pub fn preferred_move(board: &Board, own: Marker, opponent: Marker) -> Option<(Position, Tier)> {
    completing_square(board, own)
        .map(|pos| (pos, Tier::Offense))
        .or_else(|| completing_square(board, opponent).map(|pos| (pos, Tier::Defense)))
        .or_else(|| {
            board
                .is_empty(Position::Center)
                .then_some((Position::Center, Tier::Center))
        })
}

/// Picks the computer's next square.
///
/// Returns `None` only for a full board. Never mutates `board`.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    own: Marker,
    opponent: Marker,
    rng: &mut R,
) -> Option<Position> {
    let (pos, tier) = match preferred_move(board, own, opponent) {
        Some(choice) => choice,
        None => (*board.unmarked_keys().choose(rng)?, Tier::Fallback),
    };
    debug!(position = pos.key(), %tier, "Computer chose square");
    Some(pos)
}

/// Picks squares for the computer side.
pub trait MoveSelector {
    /// An open square for `own` to take, or `None` on a full board.
    fn choose_move(
        &self,
        board: &Board,
        own: Marker,
        opponent: Marker,
        rng: &mut dyn RngCore,
    ) -> Option<Position>;
}

/// The offense, defense, center, fallback policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Heuristic;

impl MoveSelector for Heuristic {
    fn choose_move(
        &self,
        board: &Board,
        own: Marker,
        opponent: Marker,
        rng: &mut dyn RngCore,
    ) -> Option<Position> {
        choose_move(board, own, opponent, rng)
    }
}
