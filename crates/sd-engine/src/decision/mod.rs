//! Decision resolvers.
//!
//! A paused play resumes when the offense (and, for extra bases, the
//! defense) submits its choice. Choices are validated against the pending
//! decision before anything moves, so a rejected choice changes nothing.

pub mod extra_base;
pub mod infield_in;
pub mod steal;
pub mod tag_up;

use std::fmt;

use sd_core::{Base, Bases};

use crate::dice::RollSource;
use crate::error::{EngineError, EngineResult};
use crate::play::Play;

/// Speed bonus for the base being run to, keyed by the base the runner
/// leaves: +5 going home, 0 going to third, -5 going to second.
pub fn destination_modifier(from: Base) -> i32 {
    match from {
        Base::Third => 5,
        Base::Second => 0,
        Base::First => -5,
    }
}

/// A throw at a runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throw {
    /// The raw d20.
    pub roll: u32,
    /// Fielding rating added to the roll.
    pub arm: i32,
    /// The runner's speed.
    pub speed: i32,
    /// Destination modifier added to the speed.
    pub modifier: i32,
}

impl Throw {
    /// Roll a throw.
    pub fn roll(rolls: &mut dyn RollSource, arm: i32, speed: i32, modifier: i32) -> Self {
        let throw = Self {
            roll: rolls.roll_d20(),
            arm,
            speed,
            modifier,
        };
        tracing::debug!(roll = throw.roll, arm, speed, modifier, safe = throw.safe(), "throw");
        throw
    }

    /// The runner is safe only when strictly faster than the throw.
    pub fn safe(&self) -> bool {
        self.speed + self.modifier > self.roll as i32 + self.arm
    }
}

impl fmt::Display for Throw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {} = {} vs {} SPD",
            self.roll,
            self.arm,
            self.roll as i32 + self.arm,
            self.speed
        )?;
        if self.modifier != 0 {
            write!(f, " {:+}", self.modifier)?;
        }
        Ok(())
    }
}

fn destination(from: Base) -> String {
    from.next().map_or_else(|| "home".to_string(), |b| b.to_string())
}

/// Check that every sent runner may go and has somewhere to go.
///
/// Rejects runners not in `allowed`, empty bases, duplicates, and a
/// destination held by a runner who is staying put.
fn check_sent(bases: &Bases, sent: &[Base], allowed: &[Base]) -> EngineResult<()> {
    for (i, base) in sent.iter().enumerate() {
        if !allowed.contains(base) {
            return Err(EngineError::InvalidChoice(format!(
                "the runner on {base} was not offered an advance"
            )));
        }
        if sent[..i].contains(base) {
            return Err(EngineError::InvalidChoice(format!(
                "the runner on {base} is sent twice"
            )));
        }
        if !bases.is_occupied(*base) {
            return Err(EngineError::InvalidChoice(format!("nobody is on {base}")));
        }
        let blocked = base
            .next()
            .is_some_and(|next| bases.is_occupied(next) && !sent.contains(&next));
        if blocked {
            let next = destination(*base);
            return Err(EngineError::InvalidChoice(format!(
                "the runner on {base} cannot pass the runner holding {next}"
            )));
        }
    }
    Ok(())
}

/// Move sent runners one base each, lead runner first. Runners for which
/// `challenged` holds draw a throw rated `arm`. Stops at the third out.
fn run_bases(
    play: &mut Play,
    sent: &[Base],
    challenged: impl Fn(Base) -> bool,
    arm: i32,
    rolls: &mut dyn RollSource,
) {
    for base in Base::LEAD_FIRST.into_iter().filter(|b| sent.contains(b)) {
        if play.inning_over() {
            break;
        }
        let Some(runner) = play.state.bases.take(base) else {
            continue;
        };
        let to = destination(base);
        if challenged(base) {
            let throw = Throw::roll(rolls, arm, runner.speed, destination_modifier(base));
            if !throw.safe() {
                play.out(format!("{} is thrown out at {to} ({throw}).", runner.name));
                continue;
            }
            play.note(format!("{} beats the throw to {to} ({throw}).", runner.name));
        }
        match base.next() {
            Some(next) => {
                play.note(format!("{} advances to {to}.", runner.name));
                play.state.bases.set(next, runner);
            }
            None => play.score(&runner),
        }
    }
}
