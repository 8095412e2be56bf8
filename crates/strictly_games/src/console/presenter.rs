//! Console rendering of match events.

use super::format::render_board;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use std::time::Duration;
use strictly_tictactoe::{FirstMoverChoice, MatchEvent, Player, Presenter, Score, Side};
use tracing::{debug, instrument, warn};

/// Writes events as text, redrawing the board on every change.
pub struct ConsolePresenter<W> {
    writer: W,
    clear_screen: bool,
    round_delay: Duration,
    players: Option<(Player, Player)>,
    round: u32,
}

impl<W: Write> ConsolePresenter<W> {
    /// Creates a presenter writing to `writer`.
    pub fn new(writer: W, clear_screen: bool, round_delay: Duration) -> Self {
        Self {
            writer,
            clear_screen,
            round_delay,
            players: None,
            round: 0,
        }
    }

    /// Hands the writer back.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn name(&self, side: Side) -> String {
        match (&self.players, side) {
            (Some((human, _)), Side::Human) => human.name().clone(),
            (Some((_, computer)), Side::Computer) => computer.name().clone(),
            (None, Side::Human) => "Player".to_string(),
            (None, Side::Computer) => "Computer".to_string(),
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn score_banner(&self, score: &Score) -> String {
        format!(
            "     ***SCORE***\n\n{}: {}   {}: {}\n",
            self.name(Side::Human),
            score.get(Side::Human),
            self.name(Side::Computer),
            score.get(Side::Computer)
        )
    }

    fn render(&mut self, event: &MatchEvent) -> io::Result<()> {
        match event {
            MatchEvent::Welcome {
                human,
                computer,
                target,
            } => {
                self.players = Some((human.clone(), computer.clone()));
                self.clear()?;
                writeln!(self.writer)?;
                writeln!(self.writer, "{}, Welcome to Tic Tac Toe!", human.name())?;
                writeln!(self.writer)?;
                writeln!(self.writer, "You will be playing against {}", computer.name())?;
                writeln!(self.writer)?;
                writeln!(
                    self.writer,
                    "The first to win {target} rounds is the Grand Winner!"
                )?;
                writeln!(self.writer)?;
            }
            MatchEvent::RoundStarted { round } => self.round = *round,
            MatchEvent::FirstMoverDecided { side, choice } => {
                debug!(opener = %side, %choice, "Opener shown with the first move");
            }
            MatchEvent::BoardChanged { board, score } => {
                self.clear()?;
                if let Some((human, computer)) = &self.players {
                    writeln!(
                        self.writer,
                        "You're a {}. {} is a {}.",
                        human.marker(),
                        computer.name(),
                        computer.marker()
                    )?;
                }
                writeln!(self.writer, "Round {}", self.round)?;
                writeln!(self.writer)?;
                let banner = self.score_banner(score);
                writeln!(self.writer, "{banner}")?;
                write!(self.writer, "{}", render_board(board))?;
                writeln!(self.writer)?;
            }
            MatchEvent::OpeningMove { opener, choice } => {
                if *choice == FirstMoverChoice::Random {
                    let computer = self.name(Side::Computer);
                    match opener {
                        Side::Human => {
                            writeln!(self.writer, "{computer} chose for you to move first")?
                        }
                        Side::Computer => writeln!(self.writer, "{computer} chose to go first.")?,
                    }
                    writeln!(self.writer)?;
                }
            }
            MatchEvent::ComputerMoved { position, marker } => {
                debug!(position = position.key(), %marker, "Computer move shown");
            }
            MatchEvent::RoundOver {
                winner,
                match_continues,
                ..
            } => {
                match winner {
                    Some(Side::Human) => writeln!(self.writer, "You won!")?,
                    Some(Side::Computer) => {
                        writeln!(self.writer, "{} won!", self.name(Side::Computer))?
                    }
                    None => writeln!(self.writer, "It's a tie!")?,
                }
                writeln!(self.writer)?;
                if *match_continues {
                    writeln!(self.writer, "Let's play another round.")?;
                    writeln!(self.writer)?;
                }
            }
            MatchEvent::NextRound => {
                self.writer.flush()?;
                if !self.round_delay.is_zero() {
                    std::thread::sleep(self.round_delay);
                }
            }
            MatchEvent::GrandWinner { side, score } => {
                writeln!(self.writer)?;
                writeln!(self.writer, "{} is the grand winner!!", self.name(*side))?;
                writeln!(self.writer)?;
                let banner = self.score_banner(score);
                writeln!(self.writer, "{banner}")?;
            }
            MatchEvent::Goodbye => {
                writeln!(self.writer, "Thanks for playing Tic Tac Toe! Goodbye!")?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    #[instrument(skip(self))]
    fn present(&mut self, event: &MatchEvent) {
        if let Err(e) = self.render(event) {
            warn!(error = %e, "Failed to write to console");
        }
    }
}
