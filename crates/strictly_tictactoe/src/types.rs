//! Core domain types for tic-tac-toe.

use crate::position::Position;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Symbol a player puts on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Marker {
    /// The `X` marker.
    #[display("X")]
    X,
    /// The `O` marker.
    #[display("O")]
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Parses a typed marker, ignoring case and surrounding whitespace.
    #[instrument]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Some(Marker::X),
            "O" => Some(Marker::O),
            _ => None,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Unmarked square.
    #[default]
    Empty,
    /// Square carrying a player's marker.
    Marked(Marker),
}

impl Square {
    /// The marker on this square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Marked(marker) => Some(marker),
        }
    }

    /// True if no marker has been placed here.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// Winner and fullness are recomputed from the squares on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (keys 1-9 at indices 0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Places `marker` on an empty square.
    ///
    /// Callers pick `pos` from [`Board::unmarked_keys`]; overwriting a
    /// marked square is a logic error.
    #[instrument(skip(self))]
    pub fn occupy(&mut self, pos: Position, marker: Marker) {
        debug_assert!(self.is_empty(pos), "square {pos} is already marked");
        self.squares[pos.to_index()] = Square::Marked(marker);
    }

    /// Empty squares in ascending key order.
    pub fn unmarked_keys(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of empty squares.
    pub fn empty_square_count(&self) -> usize {
        self.squares.iter().filter(|sq| sq.is_empty()).count()
    }

    /// True once every square is marked.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Marker owning a completed line, if any.
    pub fn winner(&self) -> Option<Marker> {
        rules::check_winner(self)
    }

    /// True if some line is fully and uniformly marked.
    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Squares grouped by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(3)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row_idx, row) in self.rows().enumerate() {
            for (col, square) in row.iter().enumerate() {
                match square {
                    Square::Empty => write!(f, "{}", row_idx * 3 + col + 1)?,
                    Square::Marked(marker) => write!(f, "{marker}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row_idx < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
