//! The four entry points a match service calls.
//!
//! Each takes a state snapshot by reference and returns the next snapshot
//! with the events produced. On error nothing is returned and the caller's
//! snapshot is still the current state.

use serde::{Deserialize, Serialize};

use sd_core::{
    Advantage, AtBat, AtBatStatus, Base, DecisionKind, MatchState, OutcomeCode, PendingDecision,
    PlayEvent, PlayerCard,
};

use crate::decision::{extra_base, infield_in, steal, tag_up};
use crate::defense::Defense;
use crate::dice::RollSource;
use crate::error::{EngineError, EngineResult};
use crate::fatigue;
use crate::matchup;
use crate::outcome::resolve_outcome;
use crate::play::Play;
use crate::transition::{PlayKind, close_play};

/// What the defense does with the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PitchAction {
    /// Throw the pitch, optionally with the infield drawn in.
    Pitch {
        /// Draw the infield in for this pitch.
        #[serde(default)]
        infield_in: bool,
    },
    /// Put the batter on first without a pitch.
    IntentionalWalk,
}

/// What the batter does with the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwingAction {
    /// Swing away and read the advantaged chart.
    Swing,
    /// Sacrifice bunt.
    Bunt,
}

/// Choices answering a pending decision. The variant must match the kind
/// of decision the match is waiting on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecisionChoices {
    /// Runners sent for an extra base, and the one the defense throws at.
    ExtraBase {
        /// Bases (where the runners stand now) whose runners go.
        #[serde(default)]
        send: Vec<Base>,
        /// The sent runner the defense throws at.
        #[serde(default)]
        throw_to: Option<Base>,
    },
    /// Runners sent after the catch.
    TagUp {
        /// Bases whose runners go.
        #[serde(default)]
        send: Vec<Base>,
    },
    /// Whether the runner on third breaks for home.
    InfieldIn {
        /// Send the runner.
        send: bool,
    },
    /// Whether the runner goes or the steal is called off.
    Steal {
        /// Send the runner.
        send: bool,
    },
}

impl DecisionChoices {
    /// The kind of decision these choices answer.
    pub fn kind(&self) -> DecisionKind {
        match self {
            Self::ExtraBase { .. } => DecisionKind::ExtraBase,
            Self::TagUp { .. } => DecisionKind::TagUp,
            Self::InfieldIn { .. } => DecisionKind::InfieldIn,
            Self::Steal { .. } => DecisionKind::Steal,
        }
    }
}

fn ensure_live(state: &MatchState) -> EngineResult<()> {
    if state.game_over {
        return Err(EngineError::GameOver);
    }
    Ok(())
}

fn illegal(expected: impl Into<String>, state: &MatchState) -> EngineError {
    EngineError::IllegalTransition {
        expected: expected.into(),
        actual: state.status,
    }
}

/// Throw a pitch (or issue an intentional walk).
///
/// The pitcher is charged for the half-inning on their first pitch in it,
/// before fatigue is applied to their control. A pitch leaves the match
/// `swinging`; an intentional walk closes the plate appearance.
pub fn resolve_pitch(
    state: &MatchState,
    pitcher: &PlayerCard,
    batter: &PlayerCard,
    action: PitchAction,
    rolls: &mut dyn RollSource,
) -> EngineResult<(MatchState, Vec<PlayEvent>)> {
    ensure_live(state)?;
    if !matches!(state.status, AtBatStatus::Pitching | AtBatStatus::Resolved) {
        return Err(illegal("pitching or resolved", state));
    }
    let (control, ip) = pitcher.require_pitcher()?;
    let on_base = batter.require_batter()?;

    let mut next = state.clone();
    fatigue::charge_half_inning(&mut next, pitcher.id);
    let control = fatigue::effective_control(control, ip, &next.pitcher_line(pitcher.id));

    match action {
        PitchAction::IntentionalWalk => {
            let walked = resolve_outcome(
                &next,
                OutcomeCode::Walk,
                batter,
                pitcher,
                &Defense::default(),
                rolls,
            );
            let mut events = vec![PlayEvent::note(format!(
                "{} intentionally walks {}.",
                pitcher.name, batter.name
            ))];
            events.extend(walked.events);
            let mut next = walked.state;
            close_play(&mut next, &mut events, PlayKind::PlateAppearance);
            Ok((next, events))
        }
        PitchAction::Pitch { infield_in } => {
            let mut events = Vec::new();
            if infield_in {
                events.push(PlayEvent::note("The infield is drawn in."));
            }
            let pitch = matchup::pitch(rolls, control, on_base);
            events.push(PlayEvent::note(pitch.to_string()));
            next.at_bat = Some(AtBat {
                batter: batter.id,
                pitcher: pitcher.id,
                advantage: pitch.advantage,
                pitch_roll: pitch.roll,
                infield_in,
            });
            next.status = AtBatStatus::Swinging;
            Ok((next, events))
        }
    }
}

/// Swing at the pitch in progress.
///
/// Returns the decision the play paused on, if any; otherwise the plate
/// appearance is closed and the next pitch may be thrown.
pub fn resolve_swing(
    state: &MatchState,
    pitcher: &PlayerCard,
    batter: &PlayerCard,
    action: SwingAction,
    defense: &Defense,
    rolls: &mut dyn RollSource,
) -> EngineResult<(MatchState, Vec<PlayEvent>, Option<DecisionKind>)> {
    ensure_live(state)?;
    let at_bat = match (&state.status, &state.at_bat) {
        (AtBatStatus::Swinging, Some(at_bat)) => at_bat.clone(),
        _ => return Err(illegal("swinging", state)),
    };
    if batter.id != at_bat.batter {
        return Err(EngineError::PlayerMismatch {
            role: "batter",
            name: batter.name.clone(),
        });
    }
    if pitcher.id != at_bat.pitcher {
        return Err(EngineError::PlayerMismatch {
            role: "pitcher",
            name: pitcher.name.clone(),
        });
    }

    let mut events = Vec::new();
    let outcome = match action {
        SwingAction::Bunt => {
            events.push(PlayEvent::note(format!("{} squares to bunt.", batter.name)));
            OutcomeCode::SacrificeBunt
        }
        SwingAction::Swing => {
            let holder = match at_bat.advantage {
                Advantage::Pitcher => pitcher,
                Advantage::Batter => batter,
            };
            let (roll, outcome) = matchup::swing(rolls, &holder.chart);
            events.push(PlayEvent::note(format!(
                "Swing roll: {roll}. Result on {}'s chart: {}!",
                holder.name,
                outcome.code()
            )));
            outcome
        }
    };

    let mut next = state.clone();
    next.at_bat = None;
    let defense = defense.with_infield_in(at_bat.infield_in);
    let resolved = resolve_outcome(&next, outcome, batter, pitcher, &defense, rolls);
    events.extend(resolved.events);
    let mut next = resolved.state;
    if resolved.pause.is_none() {
        close_play(&mut next, &mut events, PlayKind::PlateAppearance);
    }
    Ok((next, events, resolved.pause))
}

/// Answer the pending decision and close the play.
///
/// Choices for a different kind of decision than the one pending are an
/// illegal transition. A steal attempted during an at-bat hands the match
/// back to that at-bat unless it ended the half-inning or the game.
pub fn resolve_decision(
    state: &MatchState,
    choices: &DecisionChoices,
    defense: &Defense,
    rolls: &mut dyn RollSource,
) -> EngineResult<(MatchState, Vec<PlayEvent>)> {
    ensure_live(state)?;
    let expected = || format!("awaiting-decision({})", choices.kind());
    let pending = match (&state.status, &state.pending) {
        (AtBatStatus::AwaitingDecision(kind), Some(pending))
            if *kind == choices.kind() && pending.kind() == *kind =>
        {
            pending.clone()
        }
        _ => return Err(illegal(expected(), state)),
    };

    let mut play = Play::new(state);
    let kind = match (pending, choices) {
        (PendingDecision::ExtraBase { offers }, DecisionChoices::ExtraBase { send, throw_to }) => {
            extra_base::resolve(&mut play, &offers, send, *throw_to, defense, rolls)?;
            PlayKind::PlateAppearance
        }
        (PendingDecision::TagUp { bases }, DecisionChoices::TagUp { send }) => {
            tag_up::resolve(&mut play, &bases, send, defense, rolls)?;
            PlayKind::PlateAppearance
        }
        (PendingDecision::InfieldIn { runner, batter }, DecisionChoices::InfieldIn { send }) => {
            infield_in::resolve(&mut play, &runner, batter, *send, defense, rolls)?;
            PlayKind::PlateAppearance
        }
        (PendingDecision::Steal { from }, DecisionChoices::Steal { send }) => {
            steal::resolve(&mut play, from, *send, defense, rolls)?;
            PlayKind::Steal
        }
        _ => return Err(illegal(expected(), state)),
    };

    let half = play.state.half_inning();
    let interrupted = play
        .state
        .at_bat
        .clone()
        .filter(|_| kind == PlayKind::Steal);
    let (mut next, mut events) = play.into_parts();
    close_play(&mut next, &mut events, kind);
    if let Some(at_bat) = interrupted.filter(|_| !next.game_over && next.half_inning() == half) {
        next.at_bat = Some(at_bat);
        next.status = AtBatStatus::Swinging;
    }
    tracing::debug!(decision = %choices.kind(), status = %next.status, "decision resolved");
    Ok((next, events))
}

/// Start a steal from `from`. The runner must be there and the next base
/// must be open. Allowed before a pitch or between pitch and swing.
pub fn open_steal(state: &MatchState, from: Base) -> EngineResult<(MatchState, Vec<PlayEvent>)> {
    ensure_live(state)?;
    if !matches!(
        state.status,
        AtBatStatus::Pitching | AtBatStatus::Resolved | AtBatStatus::Swinging
    ) {
        return Err(illegal("pitching, swinging, or resolved", state));
    }
    let Some(runner) = state.bases.get(from) else {
        return Err(EngineError::InvalidChoice(format!("nobody is on {from}")));
    };
    if let Some(next) = from.next().filter(|b| state.bases.is_occupied(*b)) {
        return Err(EngineError::InvalidChoice(format!(
            "{} cannot steal {next}, it is occupied",
            runner.name
        )));
    }

    let mut play = Play::new(state);
    play.note(format!("{} takes a lead off {from}.", runner.name));
    play.pause(PendingDecision::Steal { from });
    Ok(play.into_parts())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRolls;
    use sd_core::{Chart, Runner, Side};

    fn chart(outcome: OutcomeCode) -> Chart {
        Chart::from_counts(&[(outcome, 20)])
    }

    fn batter(outcome: OutcomeCode, on_base: i32, speed: i32) -> PlayerCard {
        PlayerCard::batter("Batter", on_base, speed, chart(outcome))
    }

    fn pitcher(outcome: OutcomeCode) -> PlayerCard {
        PlayerCard::pitcher("Pitcher", 0, 7, chart(outcome))
    }

    fn runner(name: &str, speed: i32) -> Runner {
        Runner {
            player: sd_core::PlayerId::new(),
            name: name.to_string(),
            pitcher_of_record: sd_core::PlayerId::new(),
            speed,
        }
    }

    /// Pitch and swing in one go. On-base 20 always gives the batter the
    /// advantage when control is 0.
    fn at_bat(
        state: &MatchState,
        batter: &PlayerCard,
        pitcher: &PlayerCard,
        defense: Defense,
        rolls: &[u32],
    ) -> (MatchState, Vec<PlayEvent>, Option<DecisionKind>) {
        let mut rolls = ScriptedRolls::new(rolls.to_vec());
        let (pitched, mut events) = resolve_pitch(
            state,
            pitcher,
            batter,
            PitchAction::Pitch { infield_in: false },
            &mut rolls,
        )
        .unwrap();
        let (next, more, pause) = resolve_swing(
            &pitched,
            pitcher,
            batter,
            SwingAction::Swing,
            &defense,
            &mut rolls,
        )
        .unwrap();
        events.extend(more);
        (next, events, pause)
    }

    #[test]
    fn pitch_then_swing_closes_the_plate_appearance() {
        let b = batter(OutcomeCode::Single, 20, 10);
        let p = pitcher(OutcomeCode::Strikeout);
        let (next, events, pause) = at_bat(&MatchState::new(), &b, &p, Defense::default(), &[7, 3]);
        assert_eq!(pause, None);
        assert_eq!(next.status, AtBatStatus::Resolved);
        assert_eq!(next.bases.first.as_ref().map(|r| r.player), Some(b.id));
        assert_eq!(next.batting_order.away, 1);
        assert!(next.at_bat.is_none());
        assert_eq!(
            events[0].text,
            "Pitch roll: 7 + 0 (CTL) = 7 vs 20 (OB). Batter has the advantage."
        );
        assert_eq!(events[1].text, "Swing roll: 3. Result on Batter's chart: 1B!");
    }

    #[test]
    fn pitcher_advantage_reads_pitcher_chart() {
        let b = batter(OutcomeCode::HomeRun, 2, 10);
        let p = pitcher(OutcomeCode::Strikeout);
        let (next, _, _) = at_bat(&MatchState::new(), &b, &p, Defense::default(), &[10, 10]);
        assert_eq!(next.outs, 1);
        assert_eq!(next.score.away, 0);
    }

    #[test]
    fn pitch_records_the_at_bat() {
        let b = batter(OutcomeCode::Single, 20, 10);
        let p = pitcher(OutcomeCode::Strikeout);
        let (next, events) = resolve_pitch(
            &MatchState::new(),
            &p,
            &b,
            PitchAction::Pitch { infield_in: true },
            &mut ScriptedRolls::always(4),
        )
        .unwrap();
        assert_eq!(next.status, AtBatStatus::Swinging);
        let at_bat = next.at_bat.clone().unwrap();
        assert_eq!(at_bat.pitch_roll, 4);
        assert!(at_bat.infield_in);
        assert_eq!(at_bat.advantage, Advantage::Batter);
        assert_eq!(events.len(), 2);
        assert_eq!(next.pitcher_line(p.id).innings_pitched, 1);
    }

    #[test]
    fn tired_pitcher_loses_control() {
        let b = batter(OutcomeCode::Single, 20, 10);
        let p = PlayerCard::pitcher("Tired", 5, 1, chart(OutcomeCode::Strikeout));
        let mut state = MatchState::new();
        state.pitcher_fatigue.insert(
            p.id,
            sd_core::PitcherLine {
                innings_pitched: 2,
                earned_runs: 0,
                last_half: None,
            },
        );
        let (_, events) = resolve_pitch(
            &state,
            &p,
            &b,
            PitchAction::Pitch { infield_in: false },
            &mut ScriptedRolls::always(10),
        )
        .unwrap();
        // third half-inning charged: 3 - 1 = 2 points lost
        assert!(events[0].text.starts_with("Pitch roll: 10 + 3 (CTL)"));
    }

    #[test]
    fn intentional_walk_rolls_nothing() {
        let mut state = MatchState::new();
        state.bases.set(Base::First, runner("R1", 10));
        let b = batter(OutcomeCode::Single, 9, 10);
        let p = pitcher(OutcomeCode::Strikeout);
        let mut rolls = ScriptedRolls::always(1);
        let (next, events) =
            resolve_pitch(&state, &p, &b, PitchAction::IntentionalWalk, &mut rolls).unwrap();
        assert_eq!(rolls.rolled(), 0);
        assert_eq!(next.bases.occupied(), vec![Base::First, Base::Second]);
        assert_eq!(next.batting_order.away, 1);
        assert_eq!(events[0].text, "Pitcher intentionally walks Batter.");
    }

    #[test]
    fn bunt_skips_the_swing_roll() {
        let b = batter(OutcomeCode::HomeRun, 20, 10);
        let p = pitcher(OutcomeCode::HomeRun);
        let mut state = MatchState::new();
        state.bases.set(Base::First, runner("R1", 10));
        let mut rolls = ScriptedRolls::always(5);
        let (pitched, _) = resolve_pitch(
            &state,
            &p,
            &b,
            PitchAction::Pitch { infield_in: false },
            &mut rolls,
        )
        .unwrap();
        let (next, _, _) = resolve_swing(
            &pitched,
            &p,
            &b,
            SwingAction::Bunt,
            &Defense::default(),
            &mut rolls,
        )
        .unwrap();
        assert_eq!(rolls.rolled(), 1);
        assert_eq!(next.outs, 1);
        assert_eq!(next.bases.occupied(), vec![Base::Second]);
    }

    #[test]
    fn double_play_with_one_out_ends_the_half() {
        let mut state = MatchState::new();
        state.outs = 1;
        state.bases.set(Base::First, runner("R1", 10));
        let b = batter(OutcomeCode::Groundball, 20, 12);
        let p = pitcher(OutcomeCode::Strikeout);
        let defense = Defense {
            infield: 10,
            ..Defense::default()
        };
        // pitch 5, swing 7, double-play roll 2 (2 + 10 >= 12)
        let (next, events, _) = at_bat(&state, &b, &p, defense, &[5, 7, 2]);
        assert!(!next.is_top_half);
        assert_eq!(next.inning, 1);
        assert_eq!(next.outs, 0);
        assert!(next.bases.is_empty());
        assert!(events.last().unwrap().is_half_inning_change);
    }

    #[test]
    fn walk_off_single() {
        let mut state = MatchState::new();
        state.inning = 9;
        state.is_top_half = false;
        state.score.away = 3;
        state.score.home = 3;
        state.outs = 2;
        state.bases.set(Base::Third, runner("R3", 10));
        let b = batter(OutcomeCode::Single, 20, 10);
        let p = pitcher(OutcomeCode::Strikeout);
        let (next, _, pause) = at_bat(&state, &b, &p, Defense::default(), &[1, 1]);
        assert_eq!(pause, None);
        assert!(next.game_over);
        assert_eq!(next.winner, Some(Side::Home));
        assert_eq!(next.score.home, 4);
        assert!(!next.is_top_half);
        assert_eq!(next.inning, 9);

        let err = resolve_pitch(
            &next,
            &p,
            &b,
            PitchAction::Pitch { infield_in: false },
            &mut ScriptedRolls::always(1),
        );
        assert!(matches!(err, Err(EngineError::GameOver)));
    }

    #[test]
    fn walk_off_stands_when_the_trailing_runner_makes_the_third_out() {
        let mut state = MatchState::new();
        state.inning = 9;
        state.is_top_half = false;
        state.score.away = 3;
        state.score.home = 3;
        state.outs = 2;
        state.bases.set(Base::Second, runner("R2", 10));
        state.bases.set(Base::Third, runner("R3", 10));
        let b = batter(OutcomeCode::Single, 20, 10);
        let p = pitcher(OutcomeCode::Strikeout);
        let (paused, _, pause) = at_bat(&state, &b, &p, Defense::default(), &[1, 1]);
        assert_eq!(pause, Some(DecisionKind::ExtraBase));
        assert_eq!(paused.score.home, 4);
        assert!(!paused.game_over);

        // 20 + 0 = 20 vs 10 + 5: R2 is thrown out at the plate
        let (next, events) = resolve_decision(
            &paused,
            &DecisionChoices::ExtraBase {
                send: vec![Base::Third],
                throw_to: Some(Base::Third),
            },
            &Defense::default(),
            &mut ScriptedRolls::always(20),
        )
        .unwrap();
        assert!(next.game_over);
        assert_eq!(next.winner, Some(Side::Home));
        assert_eq!(next.score.home, 4);
        assert!(!next.is_top_half);
        assert_eq!(next.inning, 9);
        assert_eq!(next.outs, 0);
        assert!(!events.iter().any(|e| e.is_half_inning_change));
    }

    #[test]
    fn wrong_decision_kind_is_rejected() {
        let mut state = MatchState::new();
        state.outs = 1;
        state.bases.set(Base::Third, runner("R3", 10));
        state.status = AtBatStatus::AwaitingDecision(DecisionKind::TagUp);
        state.pending = Some(PendingDecision::TagUp {
            bases: vec![Base::Third],
        });
        let before = state.clone();
        let choices = DecisionChoices::ExtraBase {
            send: vec![Base::Third],
            throw_to: None,
        };
        let err = resolve_decision(
            &state,
            &choices,
            &Defense::default(),
            &mut ScriptedRolls::always(1),
        );
        assert!(matches!(err, Err(EngineError::IllegalTransition { .. })));
        assert_eq!(state, before);

        // The right kind still goes through.
        let (next, _) = resolve_decision(
            &state,
            &DecisionChoices::TagUp {
                send: vec![Base::Third],
            },
            &Defense::default(),
            &mut ScriptedRolls::always(1),
        )
        .unwrap();
        assert_eq!(next.score.away, 1);
        assert_eq!(next.status, AtBatStatus::Resolved);
        assert!(next.pending.is_none());
        assert_eq!(next.batting_order.away, 1);
    }

    #[test]
    fn swing_before_pitch_is_illegal() {
        let b = batter(OutcomeCode::Single, 20, 10);
        let p = pitcher(OutcomeCode::Strikeout);
        let err = resolve_swing(
            &MatchState::new(),
            &p,
            &b,
            SwingAction::Swing,
            &Defense::default(),
            &mut ScriptedRolls::always(1),
        );
        assert!(matches!(
            err,
            Err(EngineError::IllegalTransition {
                actual: AtBatStatus::Pitching,
                ..
            })
        ));
    }

    #[test]
    fn swing_by_another_batter_is_rejected() {
        let b = batter(OutcomeCode::Single, 20, 10);
        let other = batter(OutcomeCode::Single, 20, 10);
        let p = pitcher(OutcomeCode::Strikeout);
        let (pitched, _) = resolve_pitch(
            &MatchState::new(),
            &p,
            &b,
            PitchAction::Pitch { infield_in: false },
            &mut ScriptedRolls::always(1),
        )
        .unwrap();
        let err = resolve_swing(
            &pitched,
            &p,
            &other,
            SwingAction::Swing,
            &Defense::default(),
            &mut ScriptedRolls::always(1),
        );
        assert!(matches!(
            err,
            Err(EngineError::PlayerMismatch { role: "batter", .. })
        ));
    }

    #[test]
    fn batter_card_cannot_pitch() {
        let b = batter(OutcomeCode::Single, 20, 10);
        let err = resolve_pitch(
            &MatchState::new(),
            &b,
            &b,
            PitchAction::Pitch { infield_in: false },
            &mut ScriptedRolls::always(1),
        );
        assert!(matches!(err, Err(EngineError::Card(_))));
    }

    #[test]
    fn infield_in_pitch_carries_into_the_swing() {
        let mut state = MatchState::new();
        state.bases.set(Base::Third, runner("R3", 15));
        let b = batter(OutcomeCode::Groundball, 20, 10);
        let p = pitcher(OutcomeCode::Strikeout);
        let mut rolls = ScriptedRolls::always(5);
        let (pitched, _) = resolve_pitch(
            &state,
            &p,
            &b,
            PitchAction::Pitch { infield_in: true },
            &mut rolls,
        )
        .unwrap();
        let (paused, _, pause) = resolve_swing(
            &pitched,
            &p,
            &b,
            SwingAction::Swing,
            &Defense::default(),
            &mut rolls,
        )
        .unwrap();
        assert_eq!(pause, Some(DecisionKind::InfieldIn));
        assert_eq!(paused.batting_order.away, 0);

        // 5 + 0 = 5 vs 15: the runner scores
        let (next, _) = resolve_decision(
            &paused,
            &DecisionChoices::InfieldIn { send: true },
            &Defense::default(),
            &mut rolls,
        )
        .unwrap();
        assert_eq!(next.score.away, 1);
        assert_eq!(next.bases.occupied(), vec![Base::First]);
        assert_eq!(next.batting_order.away, 1);
    }

    #[test]
    fn steal_mid_at_bat_returns_to_the_swing() {
        let mut state = MatchState::new();
        state.bases.set(Base::First, runner("R1", 18));
        let b = batter(OutcomeCode::Single, 20, 10);
        let p = pitcher(OutcomeCode::Strikeout);
        let (pitched, _) = resolve_pitch(
            &state,
            &p,
            &b,
            PitchAction::Pitch { infield_in: false },
            &mut ScriptedRolls::always(3),
        )
        .unwrap();
        let (opened, _) = open_steal(&pitched, Base::First).unwrap();
        assert_eq!(
            opened.status,
            AtBatStatus::AwaitingDecision(DecisionKind::Steal)
        );

        let (next, _) = resolve_decision(
            &opened,
            &DecisionChoices::Steal { send: true },
            &Defense::default(),
            &mut ScriptedRolls::always(3),
        )
        .unwrap();
        assert_eq!(next.status, AtBatStatus::Swinging);
        assert_eq!(next.at_bat, pitched.at_bat);
        assert_eq!(next.bases.occupied(), vec![Base::Second]);
        assert_eq!(next.batting_order.away, 0);
    }

    #[test]
    fn caught_stealing_for_the_third_out_abandons_the_at_bat() {
        let mut state = MatchState::new();
        state.outs = 2;
        state.bases.set(Base::Second, runner("R2", 5));
        let (opened, _) = open_steal(&state, Base::Second).unwrap();
        let defense = Defense {
            catcher_arm: 4,
            ..Defense::default()
        };
        let (next, events) = resolve_decision(
            &opened,
            &DecisionChoices::Steal { send: true },
            &defense,
            &mut ScriptedRolls::always(10),
        )
        .unwrap();
        assert!(!next.is_top_half);
        assert_eq!(next.status, AtBatStatus::Resolved);
        assert_eq!(next.batting_order.away, 0);
        assert!(events.last().unwrap().is_half_inning_change);
    }

    #[test]
    fn steal_needs_a_free_base_ahead() {
        let mut state = MatchState::new();
        state.bases.set(Base::First, runner("R1", 10));
        state.bases.set(Base::Second, runner("R2", 10));
        assert!(matches!(
            open_steal(&state, Base::First),
            Err(EngineError::InvalidChoice(_))
        ));
        assert!(matches!(
            open_steal(&state, Base::Third),
            Err(EngineError::InvalidChoice(_))
        ));
        assert!(open_steal(&state, Base::Second).is_ok());
    }

    #[test]
    fn choices_json_names_the_kind() {
        let json = r#"{"kind":"extra_base","send":["third"],"throw_to":"third"}"#;
        let choices: DecisionChoices = serde_json::from_str(json).unwrap();
        assert_eq!(choices.kind(), DecisionKind::ExtraBase);
        let action: PitchAction = serde_json::from_str(r#"{"action":"pitch"}"#).unwrap();
        assert_eq!(action, PitchAction::Pitch { infield_in: false });
    }
}
