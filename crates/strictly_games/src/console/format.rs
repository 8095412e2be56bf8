//! Text layout for the console.

use std::fmt::Display;
use strictly_tictactoe::{Board, Square};

/// Joins items for a prompt: `1`, `1 or 2`, `1, 2, or 3`.
pub fn joinor<T: Display>(items: &[T], separator: &str, word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} {word} {second}"),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{}{separator}{word} {last}", head.join(separator))
        }
    }
}

/// Large 3x3 grid with padded cells.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for (idx, row) in board.rows().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|sq| match sq {
                Square::Empty => " ".to_string(),
                Square::Marked(marker) => marker.to_string(),
            })
            .collect();
        out.push_str("       |     |\n");
        out.push_str(&format!(
            "    {}  |  {}  |  {}\n",
            cells[0], cells[1], cells[2]
        ));
        out.push_str("       |     |\n");
        if idx < 2 {
            out.push_str("  -----+-----+-----\n");
        }
    }
    out
}
