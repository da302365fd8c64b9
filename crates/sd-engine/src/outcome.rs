//! Base, out, and run bookkeeping for each outcome code.
//!
//! Everything here is computed from the bases as they stood before the
//! play. The resolver never advances the batting order or ends a
//! half-inning; that happens in [`transition`](crate::transition) once the
//! play closes, which may be after a decision.

use sd_core::{
    Base, Bases, DecisionKind, MatchState, OutcomeCode, PendingDecision, PlayEvent, PlayerCard,
    Runner,
};

use crate::defense::Defense;
use crate::dice::RollSource;
use crate::play::Play;

/// The state right after an outcome is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeResolution {
    /// The next state. When `pause` is set it is awaiting that decision.
    pub state: MatchState,
    /// Events in the order they happened.
    pub events: Vec<PlayEvent>,
    /// The decision the play is waiting on, if any.
    pub pause: Option<DecisionKind>,
}

/// Apply `outcome` for `batter` against `pitcher`.
///
/// Only a ground ball with a runner on first and fewer than two outs
/// rolls (for the double play); every other outcome is fixed bookkeeping.
pub fn resolve_outcome(
    state: &MatchState,
    outcome: OutcomeCode,
    batter: &PlayerCard,
    pitcher: &PlayerCard,
    defense: &Defense,
    rolls: &mut dyn RollSource,
) -> OutcomeResolution {
    let mut play = Play::new(state);
    let hitter = Runner::from_card(batter, pitcher.id);
    let pre = state.bases.clone();

    match outcome {
        OutcomeCode::Strikeout => play.out(format!("{} strikes out.", hitter.name)),
        OutcomeCode::Popup => play.out(format!("{} pops up.", hitter.name)),
        OutcomeCode::Out => play.out(format!("{} is out.", hitter.name)),
        OutcomeCode::Groundball => groundball(&mut play, hitter, &pre, defense, rolls),
        OutcomeCode::Flyball => flyball(&mut play, &hitter),
        OutcomeCode::SacrificeBunt => sacrifice(&mut play, &hitter),
        OutcomeCode::Walk => walk(&mut play, hitter, &pre),
        OutcomeCode::Single => single(&mut play, hitter, &pre, false),
        OutcomeCode::SinglePlus => single(&mut play, hitter, &pre, true),
        OutcomeCode::Double => double(&mut play, hitter, &pre),
        OutcomeCode::Triple => {
            play.note(format!("{} triples.", hitter.name));
            play.clear_bases();
            play.state.bases.set(Base::Third, hitter);
        }
        OutcomeCode::HomeRun => {
            play.note(format!("{} homers!", hitter.name));
            play.clear_bases();
            play.score(&hitter);
        }
    }

    let pause = play.state.pending.as_ref().map(PendingDecision::kind);
    tracing::debug!(
        outcome = outcome.code(),
        outs = play.state.outs,
        pause = ?pause,
        "outcome resolved"
    );
    let (state, events) = play.into_parts();
    OutcomeResolution {
        state,
        events,
        pause,
    }
}

fn groundball(
    play: &mut Play,
    hitter: Runner,
    pre: &Bases,
    defense: &Defense,
    rolls: &mut dyn RollSource,
) {
    let outs = play.state.outs;

    if let Some(runner) = pre.third.as_ref().filter(|_| defense.infield_in && outs < 2) {
        play.note(format!(
            "{} grounds to the drawn-in infield with {} on third.",
            hitter.name, runner.name
        ));
        play.pause(PendingDecision::InfieldIn {
            runner: runner.clone(),
            batter: hitter,
        });
        return;
    }

    if outs <= 1 && pre.first.is_some() {
        let roll = rolls.roll_d20();
        let turn = roll as i32 + defense.infield;
        tracing::debug!(roll, infield = defense.infield, speed = hitter.speed, "double play roll");
        let forced = play.state.bases.take(Base::First);
        if turn >= hitter.speed {
            play.outs(
                2,
                format!(
                    "{} grounds into a double play ({roll} + {} IF = {turn} vs {} SPD).",
                    hitter.name, defense.infield, hitter.speed
                ),
            );
        } else {
            let forced = forced.map(|r| r.name).unwrap_or_default();
            play.out(format!(
                "{} reaches on a fielder's choice; {forced} is out at second.",
                hitter.name
            ));
            play.state.bases.set(Base::First, hitter);
        }
        return;
    }

    play.out(format!("{} grounds out.", hitter.name));
    if !defense.infield_in && !play.inning_over() {
        play.advance(Base::Third);
        play.advance(Base::Second);
    }
}

fn flyball(play: &mut Play, hitter: &Runner) {
    play.out(format!("{} flies out.", hitter.name));
    if !play.inning_over() && !play.state.bases.is_empty() {
        let bases = play.state.bases.occupied();
        play.pause(PendingDecision::TagUp { bases });
    }
}

fn sacrifice(play: &mut Play, hitter: &Runner) {
    play.out(format!("{} lays down a sacrifice bunt.", hitter.name));
    if !play.inning_over() {
        for base in Base::LEAD_FIRST {
            play.advance(base);
        }
    }
}

/// Only forced runners move on a walk.
fn walk(play: &mut Play, hitter: Runner, pre: &Bases) {
    play.note(format!("{} walks.", hitter.name));
    if pre.first.is_some() {
        if pre.second.is_some() {
            play.advance(Base::Third);
            play.advance(Base::Second);
        }
        play.advance(Base::First);
    }
    play.state.bases.set(Base::First, hitter);
}

fn single(play: &mut Play, hitter: Runner, pre: &Bases, plus: bool) {
    play.note(format!("{} singles.", hitter.name));
    for base in Base::LEAD_FIRST {
        play.advance(base);
    }

    if plus && !play.state.bases.is_occupied(Base::Second) {
        play.note(format!("{} takes second.", hitter.name));
        play.state.bases.set(Base::Second, hitter);
        return;
    }
    play.state.bases.set(Base::First, hitter);

    let mut offers = Vec::new();
    if pre.second.is_some() {
        offers.push(Base::Third);
    }
    if pre.first.is_some() {
        offers.push(Base::Second);
    }
    if !offers.is_empty() {
        play.pause(PendingDecision::ExtraBase { offers });
    }
}

fn double(play: &mut Play, hitter: Runner, pre: &Bases) {
    play.note(format!("{} doubles.", hitter.name));
    for base in [Base::Third, Base::Second] {
        if let Some(runner) = play.state.bases.take(base) {
            play.score(&runner);
        }
    }
    if let Some(runner) = play.state.bases.take(Base::First) {
        play.state.bases.set(Base::Third, runner);
    }
    play.state.bases.set(Base::Second, hitter);

    if pre.first.is_some() {
        play.pause(PendingDecision::ExtraBase {
            offers: vec![Base::Third],
        });
    }
}
