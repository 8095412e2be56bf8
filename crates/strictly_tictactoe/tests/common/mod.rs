//! Scripted collaborators shared by the integration tests.

#![allow(dead_code)]

use anyhow::{Result, anyhow};
use rand::RngCore;
use std::collections::VecDeque;
use strictly_tictactoe::{
    Board, FirstMoverChoice, InputSource, Marker, MatchEvent, MoveSelector, Player, Position,
    Presenter, Roster, Side, WinningScore,
};

/// Replays canned answers in order; running out is an error.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    pub markers: VecDeque<Marker>,
    pub names: VecDeque<String>,
    pub first_movers: VecDeque<FirstMoverChoice>,
    pub squares: VecDeque<u8>,
    pub play_again: VecDeque<bool>,
    pub targets: VecDeque<u8>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_movers(mut self, choices: &[FirstMoverChoice]) -> Self {
        self.first_movers.extend(choices.iter().copied());
        self
    }

    pub fn squares(mut self, keys: &[u8]) -> Self {
        self.squares.extend(keys.iter().copied());
        self
    }

    pub fn play_again(mut self, answers: &[bool]) -> Self {
        self.play_again.extend(answers.iter().copied());
        self
    }
}

impl InputSource for ScriptedInput {
    fn choose_marker(&mut self, options: &[Marker]) -> Result<Marker> {
        let marker = self
            .markers
            .pop_front()
            .ok_or_else(|| anyhow!("script has no marker"))?;
        assert!(options.contains(&marker), "{marker} not offered");
        Ok(marker)
    }

    fn player_name(&mut self) -> Result<String> {
        self.names
            .pop_front()
            .ok_or_else(|| anyhow!("script has no name"))
    }

    fn first_mover(&mut self) -> Result<FirstMoverChoice> {
        self.first_movers
            .pop_front()
            .ok_or_else(|| anyhow!("script has no first mover"))
    }

    fn choose_square(&mut self, board: &Board) -> Result<Position> {
        let key = self
            .squares
            .pop_front()
            .ok_or_else(|| anyhow!("script has no square"))?;
        let pos = Position::from_key(key).ok_or_else(|| anyhow!("bad key {key}"))?;
        assert!(board.is_empty(pos), "script played marked square {key}");
        Ok(pos)
    }

    fn play_again(&mut self) -> Result<bool> {
        self.play_again
            .pop_front()
            .ok_or_else(|| anyhow!("script has no rematch answer"))
    }

    fn winning_score(&mut self) -> Result<WinningScore> {
        let rounds = self
            .targets
            .pop_front()
            .ok_or_else(|| anyhow!("script has no target"))?;
        Ok(WinningScore::new(rounds)?)
    }
}

/// Keeps every event for later assertions.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub events: Vec<MatchEvent>,
}

impl RecordingPresenter {
    pub fn round_results(&self) -> Vec<Option<Side>> {
        self.events
            .iter()
            .filter_map(|event| match event {
                MatchEvent::RoundOver { winner, .. } => Some(*winner),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&MatchEvent) -> bool) -> usize {
        self.events.iter().filter(|event| pred(event)).count()
    }
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, event: &MatchEvent) {
        self.events.push(event.clone());
    }
}

/// Computer that takes the first open square from a fixed preference list.
#[derive(Debug, Clone)]
pub struct PreferenceSelector(pub Vec<u8>);

impl MoveSelector for PreferenceSelector {
    fn choose_move(
        &self,
        board: &Board,
        _own: Marker,
        _opponent: Marker,
        _rng: &mut dyn RngCore,
    ) -> Option<Position> {
        self.0
            .iter()
            .filter_map(|key| Position::from_key(*key))
            .find(|pos| board.is_empty(*pos))
            .or_else(|| board.unmarked_keys().first().copied())
    }
}

/// Human plays X, computer plays O.
pub fn roster() -> Roster {
    Roster::new(
        Player::new("Ada".to_string(), Marker::X, Side::Human),
        Player::new("R2D2".to_string(), Marker::O, Side::Computer),
    )
}

pub fn target(rounds: u8) -> WinningScore {
    WinningScore::new(rounds).expect("valid target")
}
