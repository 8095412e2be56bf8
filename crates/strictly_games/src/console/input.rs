//! Line-based input that re-prompts until the answer is valid.

use super::format::joinor;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_tictactoe::{Board, FirstMoverChoice, InputSource, Marker, Position, WinningScore};
use tracing::{debug, instrument};

/// Reads answers from `reader`, writing prompts and complaints to `writer`.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Creates console input over the given streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Hands the streams back.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{text}").context("Failed to write prompt")?;
        self.writer.flush().context("Failed to flush prompt")
    }

    /// Next trimmed line. End of input is an error so callers never spin.
    /// Undecodable bytes become replacement characters and fail validation
    /// like any other bad answer.
    fn read_answer(&mut self) -> Result<String> {
        let mut line = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut line)
            .context("Failed to read input")?;
        if read == 0 {
            anyhow::bail!("Input closed");
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Prompts until `parse` accepts an answer.
    fn ask<T>(
        &mut self,
        prompt: &str,
        complaint: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        self.say(prompt)?;
        loop {
            let answer = self.read_answer()?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            debug!(answer = %answer, "Rejected input");
            self.say(complaint)?;
        }
    }
}

fn parse_letter<T: Copy>(answer: &str, options: &[(&str, T)]) -> Option<T> {
    let answer = answer.to_ascii_uppercase();
    options
        .iter()
        .find(|(letter, _)| *letter == answer)
        .map(|(_, value)| *value)
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    #[instrument(skip(self))]
    fn choose_marker(&mut self, options: &[Marker]) -> Result<Marker> {
        let listed: Vec<String> = options.iter().map(|m| format!("'{m}'")).collect();
        let prompt = format!(
            "Which marker would you like to be?\nChoose {}",
            joinor(&listed, ", ", "or")
        );
        self.ask(&prompt, "Invalid Entry!", |answer| {
            Marker::parse(answer).filter(|m| options.contains(m))
        })
    }

    #[instrument(skip(self))]
    fn player_name(&mut self) -> Result<String> {
        self.ask(
            "Please enter your name:",
            "Sorry, your name can't be blank.",
            |answer| (!answer.is_empty()).then(|| answer.to_string()),
        )
    }

    #[instrument(skip(self))]
    fn first_mover(&mut self) -> Result<FirstMoverChoice> {
        let human_decides = self.ask(
            "Who chooses who moves first? (H)uman or (C)omputer?",
            "Invalid Entry!",
            |answer| parse_letter(answer, &[("H", true), ("C", false)]),
        )?;
        if !human_decides {
            return Ok(FirstMoverChoice::Random);
        }
        self.ask(
            "Who moves first? Enter 'H' for Human and 'C' for Computer:",
            "Invalid Entry!",
            |answer| {
                parse_letter(
                    answer,
                    &[
                        ("H", FirstMoverChoice::Human),
                        ("C", FirstMoverChoice::Computer),
                    ],
                )
            },
        )
    }

    #[instrument(skip(self, board))]
    fn choose_square(&mut self, board: &Board) -> Result<Position> {
        let open = board.unmarked_keys();
        let prompt = format!("Choose a square: {}", joinor(&open, ", ", "or"));
        self.ask(&prompt, "Sorry, that's not a valid choice.", |answer| {
            Position::parse_key(answer).filter(|pos| open.contains(pos))
        })
    }

    #[instrument(skip(self))]
    fn play_again(&mut self) -> Result<bool> {
        self.ask(
            "Would you like to play again? (y/n)",
            "Sorry, must be 'y' or 'n'",
            |answer| parse_letter(answer, &[("Y", true), ("N", false)]),
        )
    }

    #[instrument(skip(self))]
    fn winning_score(&mut self) -> Result<WinningScore> {
        let default = WinningScore::default();
        let prompt = format!(
            "How many rounds to win the match? ({}-{}, Enter for {})",
            WinningScore::MIN,
            WinningScore::MAX,
            default
        );
        let complaint = format!(
            "Sorry, must be a number from {} to {}.",
            WinningScore::MIN,
            WinningScore::MAX
        );
        self.ask(&prompt, &complaint, |answer| {
            if answer.is_empty() {
                return Some(default);
            }
            answer
                .parse::<u8>()
                .ok()
                .and_then(|n| WinningScore::new(n).ok())
        })
    }
}
