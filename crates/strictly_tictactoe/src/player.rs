//! Players and how they get their markers and names.
//!
//! Assignment state lives in values the caller owns: a [`MarkerPool`]
//! that shrinks as markers are handed out and a [`NamePrompt`] recording
//! whether the human has been asked for a name yet. Two rosters built in
//! the same process share nothing.

use crate::io::InputSource;
use crate::{Marker, Side};
use anyhow::Result;
use derive_getters::Getters;
use derive_new::new;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Names the computer picks from when none are configured.
pub const DEFAULT_COMPUTER_NAMES: [&str; 3] = ["R2D2", "C3PO", "BB-8"];

/// A seated player. Marker and name never change once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker placed on the board.
    marker: Marker,
    /// Human or computer.
    side: Side,
}

/// Markers not yet handed to a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPool {
    remaining: Vec<Marker>,
}

impl MarkerPool {
    /// Both markers available.
    pub fn new() -> Self {
        Self {
            remaining: vec![Marker::X, Marker::O],
        }
    }

    /// Markers still available, in pool order.
    pub fn remaining(&self) -> &[Marker] {
        &self.remaining
    }

    /// Removes `marker` from the pool, returning it if it was available.
    #[instrument(skip(self))]
    pub fn take(&mut self, marker: Marker) -> Option<Marker> {
        let idx = self.remaining.iter().position(|m| *m == marker)?;
        Some(self.remaining.remove(idx))
    }
}

impl Default for MarkerPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the one-time name prompt has been used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NamePrompt {
    used: bool,
}

impl NamePrompt {
    /// Prompt not yet used.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the prompt. Returns `true` only the first time.
    pub fn claim(&mut self) -> bool {
        !std::mem::replace(&mut self.used, true)
    }
}

/// Seats one player.
///
/// With more than one marker left the input source chooses; otherwise the
/// last marker is taken. The first call to claim `name_prompt` asks for a
/// name, later calls pick one of `computer_names`.
#[instrument(skip(pool, name_prompt, input, computer_names, rng))]
pub fn assign_player<I, R>(
    side: Side,
    pool: &mut MarkerPool,
    name_prompt: &mut NamePrompt,
    input: &mut I,
    computer_names: &[String],
    rng: &mut R,
) -> Result<Player>
where
    I: InputSource + ?Sized,
    R: Rng + ?Sized,
{
    let wanted = match pool.remaining() {
        [] => anyhow::bail!("No markers left to assign"),
        [only] => *only,
        options => input.choose_marker(options)?,
    };
    let marker = pool
        .take(wanted)
        .ok_or_else(|| anyhow::anyhow!("Marker {wanted} is not available"))?;

    let name = if name_prompt.claim() {
        input.player_name()?
    } else {
        computer_name(computer_names, rng)
    };

    info!(%side, %marker, name = %name, "Player seated");
    Ok(Player::new(name, marker, side))
}

fn computer_name<R: Rng + ?Sized>(names: &[String], rng: &mut R) -> String {
    match names.choose(rng) {
        Some(name) => name.clone(),
        None => DEFAULT_COMPUTER_NAMES
            .choose(rng)
            .map_or_else(|| "Computer".to_string(), |name| name.to_string()),
    }
}

/// The two players of a match.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Roster {
    /// The person at the keyboard.
    human: Player,
    /// The computer opponent.
    computer: Player,
}

impl Roster {
    /// Builds a roster from already-seated players.
    pub fn new(human: Player, computer: Player) -> Self {
        debug_assert_ne!(human.marker, computer.marker);
        Self { human, computer }
    }

    /// Seats the human, then the computer, from a fresh pool and prompt.
    #[instrument(skip(input, computer_names, rng))]
    pub fn assign<I, R>(input: &mut I, computer_names: &[String], rng: &mut R) -> Result<Self>
    where
        I: InputSource + ?Sized,
        R: Rng + ?Sized,
    {
        let mut pool = MarkerPool::new();
        let mut name_prompt = NamePrompt::new();
        let human = assign_player(
            Side::Human,
            &mut pool,
            &mut name_prompt,
            input,
            computer_names,
            rng,
        )?;
        let computer = assign_player(
            Side::Computer,
            &mut pool,
            &mut name_prompt,
            input,
            computer_names,
            rng,
        )?;
        debug!(human = %human.marker, computer = %computer.marker, "Roster complete");
        Ok(Self::new(human, computer))
    }

    /// The player on `side`.
    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    /// The side holding `marker`.
    pub fn side_of(&self, marker: Marker) -> Side {
        if self.human.marker == marker {
            Side::Human
        } else {
            Side::Computer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::FirstMoverChoice;
    use crate::{Board, Position, WinningScore};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Answers only the two seating questions.
    struct Seating {
        marker: Marker,
        name: &'static str,
        marker_prompts: usize,
        name_prompts: usize,
    }

    impl Seating {
        fn new(marker: Marker, name: &'static str) -> Self {
            Self {
                marker,
                name,
                marker_prompts: 0,
                name_prompts: 0,
            }
        }
    }

    impl InputSource for Seating {
        fn choose_marker(&mut self, options: &[Marker]) -> Result<Marker> {
            assert_eq!(options, &[Marker::X, Marker::O]);
            self.marker_prompts += 1;
            Ok(self.marker)
        }
        fn player_name(&mut self) -> Result<String> {
            self.name_prompts += 1;
            Ok(self.name.to_string())
        }
        fn first_mover(&mut self) -> Result<FirstMoverChoice> {
            unreachable!("not asked during seating")
        }
        fn choose_square(&mut self, _board: &Board) -> Result<Position> {
            unreachable!("not asked during seating")
        }
        fn play_again(&mut self) -> Result<bool> {
            unreachable!("not asked during seating")
        }
        fn winning_score(&mut self) -> Result<WinningScore> {
            unreachable!("not asked during seating")
        }
    }

    #[test]
    fn test_pool_take_removes_marker() {
        let mut pool = MarkerPool::new();
        assert_eq!(pool.take(Marker::O), Some(Marker::O));
        assert_eq!(pool.remaining(), &[Marker::X]);
        assert_eq!(pool.take(Marker::O), None);
    }

    #[test]
    fn test_name_prompt_claimed_once() {
        let mut prompt = NamePrompt::new();
        assert!(prompt.claim());
        assert!(!prompt.claim());
        assert!(!prompt.claim());
    }

    #[test]
    fn test_roster_asks_human_once_and_gives_computer_the_rest() {
        let mut input = Seating::new(Marker::O, "Ada");
        let mut rng = StdRng::seed_from_u64(3);
        let roster = Roster::assign(&mut input, &[], &mut rng).unwrap();

        assert_eq!(roster.human().name(), "Ada");
        assert_eq!(*roster.human().marker(), Marker::O);
        assert_eq!(*roster.computer().marker(), Marker::X);
        assert!(DEFAULT_COMPUTER_NAMES.contains(&roster.computer().name().as_str()));
        assert_eq!(input.marker_prompts, 1);
        assert_eq!(input.name_prompts, 1);
        assert_eq!(roster.side_of(Marker::X), Side::Computer);
    }

    #[test]
    fn test_configured_computer_names_are_used() {
        let mut input = Seating::new(Marker::X, "Ada");
        let mut rng = StdRng::seed_from_u64(9);
        let names = vec!["HAL".to_string()];
        let roster = Roster::assign(&mut input, &names, &mut rng).unwrap();
        assert_eq!(roster.computer().name(), "HAL");
    }

    #[test]
    fn test_independent_rosters_do_not_share_state() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut first = Seating::new(Marker::X, "Ada");
        let mut second = Seating::new(Marker::X, "Grace");
        let a = Roster::assign(&mut first, &[], &mut rng).unwrap();
        let b = Roster::assign(&mut second, &[], &mut rng).unwrap();

        assert_eq!(*a.human().marker(), Marker::X);
        assert_eq!(*b.human().marker(), Marker::X);
        assert_eq!(b.human().name(), "Grace");
        assert_eq!(second.name_prompts, 1);
    }
}
