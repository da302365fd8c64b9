//! Tagging up after a caught fly ball. Every runner who goes draws a throw
//! from the outfield, lead runner first.

use sd_core::Base;

use super::{check_sent, run_bases};
use crate::defense::Defense;
use crate::dice::RollSource;
use crate::error::EngineResult;
use crate::play::Play;

pub(crate) fn resolve(
    play: &mut Play,
    eligible: &[Base],
    send: &[Base],
    defense: &Defense,
    rolls: &mut dyn RollSource,
) -> EngineResult<()> {
    check_sent(&play.state.bases, send, eligible)?;
    if send.is_empty() {
        play.note("The runners hold.");
        return Ok(());
    }
    run_bases(play, send, |_| true, defense.outfield, rolls);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRolls;
    use crate::error::EngineError;
    use sd_core::{MatchState, PlayerId, Runner};

    fn state(on: &[Base], outs: u32) -> MatchState {
        let mut state = MatchState::new();
        state.outs = outs;
        for base in on {
            state.bases.set(
                *base,
                Runner {
                    player: PlayerId::new(),
                    name: format!("R-{base}"),
                    pitcher_of_record: PlayerId::new(),
                    speed: 12,
                },
            );
        }
        state
    }

    #[test]
    fn runner_scores_from_third() {
        // 5 + 2 = 7 vs 12 + 5
        let mut play = Play::new(&state(&[Base::Third], 1));
        let defense = Defense {
            outfield: 2,
            ..Defense::default()
        };
        resolve(
            &mut play,
            &[Base::Third],
            &[Base::Third],
            &defense,
            &mut ScriptedRolls::always(5),
        )
        .unwrap();
        assert_eq!(play.state.score.away, 1);
        assert!(play.state.bases.is_empty());
    }

    #[test]
    fn each_runner_draws_a_throw_lead_first() {
        // third: 4 vs 17 safe; second: 18 vs 12 out
        let mut play = Play::new(&state(&[Base::Second, Base::Third], 0));
        let mut rolls = ScriptedRolls::new([4, 18]);
        let both = [Base::Second, Base::Third];
        resolve(&mut play, &both, &both, &Defense::default(), &mut rolls).unwrap();
        assert_eq!(play.state.score.away, 1);
        assert_eq!(play.state.outs, 1);
        assert!(play.state.bases.is_empty());
        assert_eq!(rolls.rolled(), 2);
    }

    #[test]
    fn stops_at_the_third_out() {
        let mut play = Play::new(&state(&[Base::Second, Base::Third], 2));
        let mut rolls = ScriptedRolls::always(20);
        let both = [Base::Second, Base::Third];
        resolve(&mut play, &both, &both, &Defense::default(), &mut rolls).unwrap();
        assert_eq!(play.state.outs, 3);
        assert_eq!(rolls.rolled(), 1);
        assert_eq!(play.state.score.away, 0);
    }

    #[test]
    fn runner_not_on_base_when_caught_cannot_tag() {
        let mut play = Play::new(&state(&[Base::First], 0));
        let err = resolve(
            &mut play,
            &[Base::First],
            &[Base::Second],
            &Defense::default(),
            &mut ScriptedRolls::always(1),
        );
        assert!(matches!(err, Err(EngineError::InvalidChoice(_))));
    }
}
