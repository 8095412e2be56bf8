//! Win detection logic for tic-tac-toe.

use crate::{Board, Marker, Position, Square};
use tracing::instrument;

/// The eight lines that win when uniformly marked.
///
/// Order is rows, columns, diagonals. The computer player scans in this
/// order, so it decides which of two open lines gets completed.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Squares of one line, in line order.
pub fn line_markers(board: &Board, line: &[Position; 3]) -> [Square; 3] {
    line.map(|pos| board.get(pos))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(marker)` if a line holds three identical markers,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Marker> {
    WINNING_LINES
        .iter()
        .find_map(|line| uniform_marker(line_markers(board, line)))
}

/// The shared marker of a fully marked line.
fn uniform_marker(squares: [Square; 3]) -> Option<Marker> {
    let marked: Vec<Marker> = squares.iter().filter_map(|sq| sq.marker()).collect();
    match marked.as_slice() {
        [a, b, c] if a == b && b == c => Some(*a),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Marker)]) -> Board {
        let mut board = Board::new();
        for &(pos, marker) in marks {
            board.occupy(pos, marker);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_both_markers() {
        for marker in [Marker::X, Marker::O] {
            for line in WINNING_LINES {
                let board = board_with(&line.map(|pos| (pos, marker)));
                assert_eq!(check_winner(&board), Some(marker), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[
            (Position::TopLeft, Marker::O),
            (Position::Center, Marker::O),
            (Position::BottomRight, Marker::O),
            (Position::TopRight, Marker::X),
            (Position::BottomLeft, Marker::X),
        ]);
        assert_eq!(check_winner(&board), Some(Marker::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[
            (Position::TopLeft, Marker::X),
            (Position::TopCenter, Marker::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Marker::X),
            (Position::TopCenter, Marker::O),
            (Position::TopRight, Marker::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_later_line_found_when_earlier_lines_mixed() {
        // Only the anti-diagonal, the last line scanned, is complete.
        let board = board_with(&[
            (Position::TopRight, Marker::O),
            (Position::Center, Marker::O),
            (Position::BottomLeft, Marker::O),
            (Position::TopLeft, Marker::X),
            (Position::TopCenter, Marker::X),
            (Position::BottomRight, Marker::X),
        ]);
        assert_eq!(check_winner(&board), Some(Marker::O));
    }
}
