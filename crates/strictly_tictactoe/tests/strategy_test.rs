//! Tests for the computer's move priorities.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_tictactoe::strategy::{choose_move, preferred_move};
use strictly_tictactoe::{Board, Marker, Position, Tier};

fn board_with(xs: &[u8], os: &[u8]) -> Board {
    let mut board = Board::new();
    for &key in xs {
        board.occupy(Position::from_key(key).unwrap(), Marker::X);
    }
    for &key in os {
        board.occupy(Position::from_key(key).unwrap(), Marker::O);
    }
    board
}

#[test]
fn test_offense_completes_row() {
    let board = board_with(&[1, 2], &[9, 8]);
    assert_eq!(
        preferred_move(&board, Marker::X, Marker::O),
        Some((Position::TopRight, Tier::Offense))
    );
}

#[test]
fn test_offense_row_scanned_before_column() {
    // Row [1,2,3] is open at 3 and column [1,4,7] is open at 7.
    let board = board_with(&[1, 2, 4], &[5, 9]);
    assert_eq!(
        preferred_move(&board, Marker::X, Marker::O),
        Some((Position::TopRight, Tier::Offense))
    );
}

#[test]
fn test_offense_wins_over_blocking() {
    // O threatens the middle row, X can finish the top row.
    let board = board_with(&[1, 2], &[4, 5]);
    assert_eq!(
        preferred_move(&board, Marker::X, Marker::O),
        Some((Position::TopRight, Tier::Offense))
    );
}

#[test]
fn test_defense_blocks_opponent_row() {
    let board = board_with(&[], &[1, 2]);
    assert_eq!(
        preferred_move(&board, Marker::X, Marker::O),
        Some((Position::TopRight, Tier::Defense))
    );
}

#[test]
fn test_defense_blocks_diagonal() {
    let board = board_with(&[2], &[3, 5]);
    assert_eq!(
        preferred_move(&board, Marker::X, Marker::O),
        Some((Position::BottomLeft, Tier::Defense))
    );
}

#[test]
fn test_defense_row_scanned_before_column() {
    // X threatens row [4,5,6] at 4 and column [3,6,9] at 3.
    let board = board_with(&[5, 6, 9], &[1, 8]);
    assert_eq!(
        preferred_move(&board, Marker::O, Marker::X),
        Some((Position::MiddleLeft, Tier::Defense))
    );
}

#[test]
fn test_center_on_empty_board() {
    let board = Board::new();
    let mut rng = StdRng::seed_from_u64(42);
    assert_eq!(
        choose_move(&board, Marker::O, Marker::X, &mut rng),
        Some(Position::Center)
    );
}

#[test]
fn test_center_after_corner_opening() {
    let board = board_with(&[1], &[]);
    assert_eq!(
        preferred_move(&board, Marker::O, Marker::X),
        Some((Position::Center, Tier::Center))
    );
}

#[test]
fn test_fallback_is_deterministic_for_a_seed() {
    let board = board_with(&[5], &[1]);
    let first = choose_move(&board, Marker::O, Marker::X, &mut StdRng::seed_from_u64(11));
    let again = choose_move(&board, Marker::O, Marker::X, &mut StdRng::seed_from_u64(11));
    assert_eq!(first, again);
    assert!(board.unmarked_keys().contains(&first.unwrap()));
}
