//! Round and match state machine.
//!
//! ```text
//! AwaitingFirstMover -> TurnLoop(current) -> RoundEnded -> AwaitingFirstMover
//!                                                       \-> MatchEnded
//! ```
//!
//! Each call to [`MatchController::step`] performs exactly one transition.

use crate::io::{FirstMoverChoice, InputSource, MatchEvent, Presenter};
use crate::rules;
use crate::strategy::{Heuristic, MoveSelector};
use crate::{Board, Marker, Roster, Score, Side, WinningScore};
use derive_more::{Display, Error};
use rand::Rng;
use tracing::{debug, info, instrument};

/// How a round finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum RoundOutcome {
    /// One side completed a line.
    #[display("{} won", _0)]
    Won(Side),
    /// The board filled with no line.
    #[display("Draw")]
    Draw,
}

impl RoundOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            RoundOutcome::Won(side) => Some(*side),
            RoundOutcome::Draw => None,
        }
    }
}

/// Where the controller is in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Waiting to learn who opens the round.
    AwaitingFirstMover,
    /// Moves are being played; `current` moves next.
    TurnLoop {
        /// Marker of the player to move.
        current: Marker,
    },
    /// The board has a winner or is full; score already updated.
    RoundEnded(RoundOutcome),
    /// One side reached the target.
    MatchEnded {
        /// Side that reached the target.
        grand_winner: Side,
    },
}

/// Broken controller invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MatchError {
    /// The computer was asked to move on a full board.
    #[display("No open square for the computer to take")]
    NoMoveAvailable,
}

/// Drives rounds between the human and the computer until one side
/// reaches the winning score, then offers a rematch.
///
/// The computer's squares come from `S`, the [`Heuristic`] unless
/// replaced with [`with_selector`](Self::with_selector).
pub struct MatchController<I, P, R, S = Heuristic> {
    board: Board,
    roster: Roster,
    score: Score,
    target: WinningScore,
    phase: MatchPhase,
    opener: Option<FirstMoverChoice>,
    rounds_played: u32,
    input: I,
    presenter: P,
    rng: R,
    selector: S,
}

impl<I, P, R> MatchController<I, P, R>
where
    I: InputSource,
    P: Presenter,
    R: Rng,
{
    /// Creates a controller for a fresh match. `target` was validated
    /// when it was built.
    #[instrument(skip_all, fields(target = %target))]
    pub fn new(roster: Roster, target: WinningScore, input: I, presenter: P, rng: R) -> Self {
        info!(
            human = %roster.human().name(),
            computer = %roster.computer().name(),
            "Creating match controller"
        );
        Self {
            board: Board::new(),
            roster,
            score: Score::new(),
            target,
            phase: MatchPhase::AwaitingFirstMover,
            opener: None,
            rounds_played: 0,
            input,
            presenter,
            rng,
            selector: Heuristic,
        }
    }
}

impl<I, P, R, S> MatchController<I, P, R, S>
where
    I: InputSource,
    P: Presenter,
    R: Rng,
    S: MoveSelector,
{
    /// Replaces the computer's move policy.
    pub fn with_selector<T: MoveSelector>(self, selector: T) -> MatchController<I, P, R, T> {
        MatchController {
            board: self.board,
            roster: self.roster,
            score: self.score,
            target: self.target,
            phase: self.phase,
            opener: self.opener,
            rounds_played: self.rounds_played,
            input: self.input,
            presenter: self.presenter,
            rng: self.rng,
            selector,
        }
    }

    /// The board of the round in progress.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Score of the current match.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Current phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// The two players.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Rounds needed to win.
    pub fn target(&self) -> WinningScore {
        self.target
    }

    /// Rounds finished in the current match, draws included.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// The presenter, for inspecting what was shown.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Hands the collaborators back.
    pub fn into_parts(self) -> (I, P, R) {
        (self.input, self.presenter, self.rng)
    }

    /// Performs one transition and returns the new phase.
    ///
    /// In `MatchEnded` this is a no-op; call [`restart`](Self::restart)
    /// to begin another match.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn step(&mut self) -> anyhow::Result<MatchPhase> {
        self.phase = match self.phase {
            MatchPhase::AwaitingFirstMover => self.start_round()?,
            MatchPhase::TurnLoop { current } => self.take_turn(current)?,
            MatchPhase::RoundEnded(_) => self.after_round(),
            ended @ MatchPhase::MatchEnded { .. } => ended,
        };
        Ok(self.phase)
    }

    /// Plays from the current phase until the round ends.
    #[instrument(skip(self))]
    pub fn play_round(&mut self) -> anyhow::Result<RoundOutcome> {
        loop {
            if let MatchPhase::RoundEnded(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
    }

    /// Plays rounds until one side reaches the target.
    #[instrument(skip(self))]
    pub fn run_match(&mut self) -> anyhow::Result<Side> {
        loop {
            if let MatchPhase::MatchEnded { grand_winner } = self.step()? {
                return Ok(grand_winner);
            }
        }
    }

    /// Whole session: welcome, matches until the player declines a
    /// rematch, goodbye.
    #[instrument(skip(self))]
    pub fn play(&mut self) -> anyhow::Result<()> {
        self.presenter.present(&MatchEvent::Welcome {
            human: self.roster.human().clone(),
            computer: self.roster.computer().clone(),
            target: self.target,
        });

        loop {
            let grand_winner = self.run_match()?;
            self.presenter.present(&MatchEvent::GrandWinner {
                side: grand_winner,
                score: self.score,
            });
            if !self.input.play_again()? {
                break;
            }
            self.restart();
        }

        info!("Session finished");
        self.presenter.present(&MatchEvent::Goodbye);
        Ok(())
    }

    /// Clears board and score and waits for a new opener.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Starting a new match");
        self.board.reset();
        self.score.reset();
        self.rounds_played = 0;
        self.opener = None;
        self.phase = MatchPhase::AwaitingFirstMover;
    }

    fn start_round(&mut self) -> anyhow::Result<MatchPhase> {
        let choice = self.input.first_mover()?;
        let side = match choice {
            FirstMoverChoice::Human => Side::Human,
            FirstMoverChoice::Computer => Side::Computer,
            FirstMoverChoice::Random => {
                if self.rng.random_bool(0.5) {
                    Side::Human
                } else {
                    Side::Computer
                }
            }
        };
        info!(round = self.rounds_played + 1, opener = %side, %choice, "Round starting");

        self.opener = Some(choice);
        self.presenter.present(&MatchEvent::RoundStarted {
            round: self.rounds_played + 1,
        });
        self.presenter
            .present(&MatchEvent::FirstMoverDecided { side, choice });
        self.present_board();

        Ok(MatchPhase::TurnLoop {
            current: *self.roster.player(side).marker(),
        })
    }

    fn take_turn(&mut self, current: Marker) -> anyhow::Result<MatchPhase> {
        let mover = self.roster.side_of(current);
        let position = match mover {
            Side::Human => {
                self.announce_opening();
                self.input.choose_square(&self.board)?
            }
            Side::Computer => {
                let position = self
                    .selector
                    .choose_move(&self.board, current, current.opponent(), &mut self.rng)
                    .ok_or(MatchError::NoMoveAvailable)?;
                self.presenter.present(&MatchEvent::ComputerMoved {
                    position,
                    marker: current,
                });
                position
            }
        };

        debug!(%mover, position = position.key(), "Move played");
        self.board.occupy(position, current);
        self.present_board();

        if let Some(marker) = self.board.winner() {
            Ok(self.end_round(RoundOutcome::Won(self.roster.side_of(marker))))
        } else if rules::is_draw(&self.board) {
            Ok(self.end_round(RoundOutcome::Draw))
        } else {
            Ok(MatchPhase::TurnLoop {
                current: current.opponent(),
            })
        }
    }

    fn announce_opening(&mut self) {
        let opener = match self.board.empty_square_count() {
            9 => Side::Human,
            8 => Side::Computer,
            _ => return,
        };
        if let Some(choice) = self.opener {
            self.presenter
                .present(&MatchEvent::OpeningMove { opener, choice });
        }
    }

    fn end_round(&mut self, outcome: RoundOutcome) -> MatchPhase {
        if let Some(side) = outcome.winner() {
            self.score.record_win(side);
        }
        self.rounds_played += 1;
        info!(
            %outcome,
            human = self.score.get(Side::Human),
            computer = self.score.get(Side::Computer),
            "Round over"
        );

        self.presenter.present(&MatchEvent::RoundOver {
            winner: outcome.winner(),
            score: self.score,
            match_continues: self.score.leader_at(self.target).is_none(),
        });
        MatchPhase::RoundEnded(outcome)
    }

    fn after_round(&mut self) -> MatchPhase {
        if let Some(grand_winner) = self.score.leader_at(self.target) {
            info!(%grand_winner, "Match over");
            return MatchPhase::MatchEnded { grand_winner };
        }
        self.presenter.present(&MatchEvent::NextRound);
        self.board.reset();
        self.opener = None;
        MatchPhase::AwaitingFirstMover
    }

    fn present_board(&mut self) {
        self.presenter.present(&MatchEvent::BoardChanged {
            board: self.board,
            score: self.score,
        });
    }
}
