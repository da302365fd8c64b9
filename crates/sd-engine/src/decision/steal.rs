//! Stolen bases. The catcher's arm against the runner's speed, with no
//! destination modifier.

use sd_core::Base;

use super::{Throw, destination};
use crate::defense::Defense;
use crate::dice::RollSource;
use crate::error::{EngineError, EngineResult};
use crate::play::Play;

pub(crate) fn resolve(
    play: &mut Play,
    from: Base,
    send: bool,
    defense: &Defense,
    rolls: &mut dyn RollSource,
) -> EngineResult<()> {
    let Some(runner) = play.state.bases.take(from) else {
        return Err(EngineError::InvalidChoice(format!("nobody is on {from}")));
    };
    let to = destination(from);

    if !send {
        play.note(format!("{} stays at {from}.", runner.name));
        play.state.bases.set(from, runner);
        return Ok(());
    }

    let throw = Throw::roll(rolls, defense.catcher_arm, runner.speed, 0);
    if !throw.safe() {
        play.out(format!("{} is caught stealing {to} ({throw}).", runner.name));
        return Ok(());
    }
    play.note(format!("{} steals {to} ({throw}).", runner.name));
    match from.next() {
        Some(next) => {
            play.state.bases.set(next, runner);
        }
        None => play.score(&runner),
    }
    Ok(())
}
