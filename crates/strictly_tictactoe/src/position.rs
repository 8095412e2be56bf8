//! Square keys for the 3x3 board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A square on the board, keyed 1-9 in row-major order.
///
/// Players type the key; the enum guarantees every key is present
/// and nothing outside 1-9 can be addressed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (key 1)
    TopLeft,
    /// Top-center (key 2)
    TopCenter,
    /// Top-right (key 3)
    TopRight,
    /// Middle-left (key 4)
    MiddleLeft,
    /// Center (key 5)
    Center,
    /// Middle-right (key 6)
    MiddleRight,
    /// Bottom-left (key 7)
    BottomLeft,
    /// Bottom-center (key 8)
    BottomCenter,
    /// Bottom-right (key 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in key order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The key a player types for this square (1-9).
    pub fn key(self) -> u8 {
        self.to_index() as u8 + 1
    }

    /// Looks up the square for a typed key. Anything outside 1-9 is `None`.
    #[instrument]
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            1..=9 => Self::from_index(usize::from(key - 1)),
            _ => None,
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses a typed key such as `" 7 "`.
    #[instrument]
    pub fn parse_key(s: &str) -> Option<Self> {
        s.trim().parse::<u8>().ok().and_then(Self::from_key)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_keys_are_row_major() {
        assert_eq!(Position::TopLeft.key(), 1);
        assert_eq!(Position::Center.key(), 5);
        assert_eq!(Position::BottomRight.key(), 9);
    }

    #[test]
    fn test_from_key_rejects_out_of_range() {
        assert_eq!(Position::from_key(0), None);
        assert_eq!(Position::from_key(10), None);
        assert_eq!(Position::from_key(3), Some(Position::TopRight));
    }

    #[test]
    fn test_iter_matches_all() {
        let iterated: Vec<_> = Position::iter().collect();
        assert_eq!(iterated, Position::ALL.to_vec());
    }

    #[test]
    fn test_parse_key_trims_input() {
        assert_eq!(Position::parse_key(" 7\n"), Some(Position::BottomLeft));
        assert_eq!(Position::parse_key("seven"), None);
        assert_eq!(Position::parse_key("-1"), None);
    }
}
