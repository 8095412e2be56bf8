//! Wires configuration, players and the match controller together.

use crate::config::GameConfig;
use anyhow::Result;
use strictly_tictactoe::{InputSource, MatchController, Presenter, Roster};
use tracing::{debug, info, instrument};

/// Seats both players, settles the winning score and plays matches until
/// the human declines a rematch.
#[instrument(skip_all)]
pub fn run_session<I, P>(config: &GameConfig, mut input: I, presenter: P) -> Result<()>
where
    I: InputSource,
    P: Presenter,
{
    let mut rng = config.rng();
    let roster = Roster::assign(&mut input, config.computer_names(), &mut rng)?;

    let target = match config.winning_score() {
        Some(target) => *target,
        None => input.winning_score()?,
    };

    info!(
        human = %roster.human().name(),
        computer = %roster.computer().name(),
        target = target.get(),
        "Starting session"
    );

    let mut controller = MatchController::new(roster, target, input, presenter, rng);
    controller.play()?;

    debug!(rounds = controller.rounds_played(), "Rounds in final match");
    Ok(())
}
