//! Taking an extra base on a hit.
//!
//! The offense sends any of the offered runners; the defense may throw at
//! one of them. Everyone else sent advances untouched.

use sd_core::Base;

use super::{check_sent, run_bases};
use crate::defense::Defense;
use crate::dice::RollSource;
use crate::error::{EngineError, EngineResult};
use crate::play::Play;

pub(crate) fn resolve(
    play: &mut Play,
    offers: &[Base],
    send: &[Base],
    throw_to: Option<Base>,
    defense: &Defense,
    rolls: &mut dyn RollSource,
) -> EngineResult<()> {
    check_sent(&play.state.bases, send, offers)?;
    if let Some(target) = throw_to.filter(|t| !send.contains(t)) {
        return Err(EngineError::InvalidChoice(format!(
            "the defense cannot throw at the runner on {target}, who was not sent"
        )));
    }

    if send.is_empty() {
        play.note("The runners hold.");
        return Ok(());
    }
    run_bases(
        play,
        send,
        |base| throw_to == Some(base),
        defense.outfield,
        rolls,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRolls;
    use sd_core::{MatchState, PlayerId, Runner};

    fn state(on: &[(Base, i32)], outs: u32) -> MatchState {
        let mut state = MatchState::new();
        state.outs = outs;
        for (base, speed) in on {
            state.bases.set(
                *base,
                Runner {
                    player: PlayerId::new(),
                    name: format!("R-{base}"),
                    pitcher_of_record: PlayerId::new(),
                    speed: *speed,
                },
            );
        }
        state
    }

    const OFFERS: [Base; 2] = [Base::Third, Base::Second];

    #[test]
    fn unchallenged_runners_advance() {
        let mut play = Play::new(&state(&[(Base::Second, 10), (Base::Third, 10)], 0));
        let mut rolls = ScriptedRolls::always(20);
        resolve(
            &mut play,
            &OFFERS,
            &[Base::Second, Base::Third],
            None,
            &Defense::default(),
            &mut rolls,
        )
        .unwrap();
        assert_eq!(play.state.score.away, 1);
        assert_eq!(play.state.bases.occupied(), vec![Base::Third]);
        assert_eq!(rolls.rolled(), 0);
    }

    #[test]
    fn challenged_runner_is_thrown_out() {
        // 15 + 3 = 18 vs 12 + 5
        let mut play = Play::new(&state(&[(Base::Third, 12)], 1));
        let mut rolls = ScriptedRolls::always(15);
        let defense = Defense {
            outfield: 3,
            ..Defense::default()
        };
        resolve(
            &mut play,
            &OFFERS,
            &[Base::Third],
            Some(Base::Third),
            &defense,
            &mut rolls,
        )
        .unwrap();
        assert_eq!(play.state.outs, 2);
        assert_eq!(play.state.score.away, 0);
        assert!(play.state.bases.is_empty());
    }

    #[test]
    fn challenged_runner_beats_the_throw() {
        // 8 + 3 = 11 vs 12 + 0
        let mut play = Play::new(&state(&[(Base::Second, 12)], 0));
        let mut rolls = ScriptedRolls::always(8);
        let defense = Defense {
            outfield: 3,
            ..Defense::default()
        };
        resolve(
            &mut play,
            &OFFERS,
            &[Base::Second],
            Some(Base::Second),
            &defense,
            &mut rolls,
        )
        .unwrap();
        assert_eq!(play.state.bases.occupied(), vec![Base::Third]);
    }

    #[test]
    fn throw_at_unsent_runner_is_rejected() {
        let mut play = Play::new(&state(&[(Base::Second, 12), (Base::Third, 12)], 0));
        let err = resolve(
            &mut play,
            &OFFERS,
            &[Base::Third],
            Some(Base::Second),
            &Defense::default(),
            &mut ScriptedRolls::always(1),
        );
        assert!(matches!(err, Err(EngineError::InvalidChoice(_))));
    }

    #[test]
    fn holding_everyone_is_fine() {
        let start = state(&[(Base::Second, 12)], 0);
        let mut play = Play::new(&start);
        resolve(
            &mut play,
            &OFFERS,
            &[],
            None,
            &Defense::default(),
            &mut ScriptedRolls::always(1),
        )
        .unwrap();
        assert_eq!(play.state.bases, start.bases);
    }
}
