//! A ground ball into a drawn-in infield with a runner on third.
//!
//! The batter reaches first on the fielder's choice either way and forced
//! runners move up. A sent runner races the throw home. A holding runner
//! stays on third, unless the bases were loaded, in which case the infield
//! takes the force at the plate.

use sd_core::{Base, Runner};

use super::Throw;
use crate::defense::Defense;
use crate::dice::RollSource;
use crate::error::{EngineError, EngineResult};
use crate::play::Play;

pub(crate) fn resolve(
    play: &mut Play,
    runner: &Runner,
    batter: Runner,
    send: bool,
    defense: &Defense,
    rolls: &mut dyn RollSource,
) -> EngineResult<()> {
    if play.state.bases.get(Base::Third).map(|r| r.player) != Some(runner.player) {
        return Err(EngineError::InvalidChoice(format!(
            "{} is no longer on third",
            runner.name
        )));
    }

    let forced_home =
        play.state.bases.is_occupied(Base::First) && play.state.bases.is_occupied(Base::Second);
    let Some(runner) = play.state.bases.take(Base::Third) else {
        return Ok(());
    };
    if play.state.bases.is_occupied(Base::First) {
        if play.state.bases.is_occupied(Base::Second) {
            play.advance(Base::Second);
        }
        play.advance(Base::First);
    }
    play.state.bases.set(Base::First, batter.clone());

    if !send {
        if forced_home {
            play.out(format!(
                "{} reaches on a fielder's choice; {} is forced out at the plate.",
                batter.name, runner.name
            ));
        } else {
            play.note(format!(
                "{} reaches on a fielder's choice; {} holds at third.",
                batter.name, runner.name
            ));
            play.state.bases.set(Base::Third, runner);
        }
        return Ok(());
    }

    play.note(format!(
        "{} reaches on a fielder's choice as {} breaks for home.",
        batter.name, runner.name
    ));
    let throw = Throw::roll(rolls, defense.infield, runner.speed, 0);
    if throw.safe() {
        play.note(format!("{} slides in ahead of the throw ({throw}).", runner.name));
        play.score(&runner);
    } else {
        play.out(format!("{} is out at the plate ({throw}).", runner.name));
    }
    Ok(())
}
