//! A simple manager for both dugouts, so whole matches can run unattended.

use sd_core::{AtBatStatus, Base, MatchState, PendingDecision};
use sd_engine::decision::destination_modifier;
use sd_engine::{DecisionChoices, PitchAction, SwingAction};
use sd_service::Command;

/// Autoplay settings.
#[derive(Debug, Clone)]
pub struct AutoplayConfig {
    /// Seed for the dice.
    pub seed: u64,
    /// Give up after this many commands.
    pub max_plays: usize,
    /// Send a runner when speed plus the destination modifier reaches this.
    pub send_threshold: i32,
    /// Steal second with runners at least this fast.
    pub steal_threshold: i32,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_plays: 5000,
            send_threshold: 14,
            steal_threshold: 17,
        }
    }
}

impl AutoplayConfig {
    /// Set the dice seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the command limit.
    pub fn with_max_plays(mut self, max_plays: usize) -> Self {
        self.max_plays = max_plays;
        self
    }

    fn sends(&self, speed: i32, from: Base) -> bool {
        speed + destination_modifier(from) >= self.send_threshold
    }
}

/// The next command for a live match.
pub fn next_command(state: &MatchState, config: &AutoplayConfig) -> Command {
    match state.status {
        AtBatStatus::Pitching | AtBatStatus::Resolved => before_pitch(state, config),
        AtBatStatus::Swinging => Command::Swing {
            action: if wants_bunt(state) {
                SwingAction::Bunt
            } else {
                SwingAction::Swing
            },
        },
        AtBatStatus::AwaitingDecision(_) => Command::Decide {
            choices: decide(state, config),
        },
    }
}

fn before_pitch(state: &MatchState, config: &AutoplayConfig) -> Command {
    let bases = &state.bases;
    let late = state.inning >= state.config.regulation_innings;

    let fast_on_first = bases
        .get(Base::First)
        .is_some_and(|r| r.speed >= config.steal_threshold);
    if fast_on_first && !bases.is_occupied(Base::Second) && state.outs < 2 {
        return Command::Steal { from: Base::First };
    }

    let in_scoring_position = bases.is_occupied(Base::Second) || bases.is_occupied(Base::Third);
    if late && !bases.is_occupied(Base::First) && in_scoring_position && state.outs < 2 {
        return Command::Pitch {
            action: PitchAction::IntentionalWalk,
        };
    }

    Command::Pitch {
        action: PitchAction::Pitch {
            infield_in: bases.is_occupied(Base::Third) && state.outs < 2,
        },
    }
}

/// Bunt a lone runner on first over in a close late game with nobody out.
fn wants_bunt(state: &MatchState) -> bool {
    let margin = state.score.away.abs_diff(state.score.home);
    state.inning + 1 >= state.config.regulation_innings
        && margin <= 1
        && state.outs == 0
        && state.bases.occupied() == [Base::First]
}

fn decide(state: &MatchState, config: &AutoplayConfig) -> DecisionChoices {
    match &state.pending {
        Some(PendingDecision::ExtraBase { offers }) => {
            let send = send_runners(state, offers, config);
            let throw_to = send.first().copied();
            DecisionChoices::ExtraBase { send, throw_to }
        }
        Some(PendingDecision::TagUp { bases }) => DecisionChoices::TagUp {
            send: send_runners(state, bases, config),
        },
        Some(PendingDecision::InfieldIn { runner, .. }) => DecisionChoices::InfieldIn {
            send: config.sends(runner.speed, Base::Third),
        },
        Some(PendingDecision::Steal { .. }) | None => DecisionChoices::Steal { send: true },
    }
}

/// Lead runner first; a runner only goes if the base ahead is open or its
/// runner is going too.
fn send_runners(state: &MatchState, offered: &[Base], config: &AutoplayConfig) -> Vec<Base> {
    let mut send: Vec<Base> = Vec::new();
    for base in [Base::Third, Base::Second, Base::First] {
        if !offered.contains(&base) {
            continue;
        }
        let Some(runner) = state.bases.get(base) else {
            continue;
        };
        let clear = base
            .next()
            .is_none_or(|ahead| !state.bases.is_occupied(ahead) || send.contains(&ahead));
        if clear && config.sends(runner.speed, base) {
            send.push(base);
        }
    }
    send
}
