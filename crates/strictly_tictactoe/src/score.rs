//! Match scoring.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which seat a player occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The person at the keyboard.
    #[display("human")]
    Human,
    /// The heuristic computer player.
    #[display("computer")]
    Computer,
}

/// Rounds won by each side in the current match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    human: u32,
    computer: u32,
}

impl Score {
    /// Zero for both sides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by `side`.
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human,
            Side::Computer => self.computer,
        }
    }

    /// Credits one round win to `side`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, side: Side) {
        match side {
            Side::Human => self.human += 1,
            Side::Computer => self.computer += 1,
        }
    }

    /// Back to zero for a new match.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The side whose score equals `target`, if any.
    pub fn leader_at(&self, target: WinningScore) -> Option<Side> {
        let target = u32::from(target.get());
        [Side::Human, Side::Computer]
            .into_iter()
            .find(|side| self.get(*side) == target)
    }
}

/// Rounds needed to win a match, always within 1-10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "u8", into = "u8")]
pub struct WinningScore(u8);

impl WinningScore {
    /// Smallest allowed target: sudden death.
    pub const MIN: u8 = 1;
    /// Largest allowed target.
    pub const MAX: u8 = 10;

    /// Validates `rounds` against the allowed range.
    #[instrument]
    pub fn new(rounds: u8) -> Result<Self, ScoreError> {
        if (Self::MIN..=Self::MAX).contains(&rounds) {
            Ok(Self(rounds))
        } else {
            Err(ScoreError::OutOfRange(rounds))
        }
    }

    /// The target as a plain number.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for WinningScore {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for WinningScore {
    type Error = ScoreError;

    fn try_from(rounds: u8) -> Result<Self, Self::Error> {
        Self::new(rounds)
    }
}

impl From<WinningScore> for u8 {
    fn from(score: WinningScore) -> Self {
        score.0
    }
}

/// Rejected winning-score target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ScoreError {
    /// Target outside 1-10.
    #[display(
        "winning score must be between {} and {}, got {}",
        WinningScore::MIN,
        WinningScore::MAX,
        _0
    )]
    OutOfRange(#[error(not(source))] u8),
}
