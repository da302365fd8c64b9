//! Closing a play: batting order, three outs, and the end of the game.

use serde::{Deserialize, Serialize};

use sd_core::{AtBatStatus, MatchState, PlayEvent, Side};

/// What kind of play is closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayKind {
    /// The batter's plate appearance ended.
    PlateAppearance,
    /// A steal attempt ended; the batter is still up.
    Steal,
}

/// Close the play in `state`.
///
/// Advances the batting order (not for steals), ends the game on a walk-off
/// or a decided final half-inning, and otherwise flips the half-inning on
/// three outs. Leaves the state `resolved` with no pending decision.
pub fn close_play(state: &mut MatchState, events: &mut Vec<PlayEvent>, kind: PlayKind) {
    if kind == PlayKind::PlateAppearance {
        let side = state.batting_side();
        state.batting_order.advance(side, state.config.lineup_size);
    }
    state.status = AtBatStatus::Resolved;
    state.pending = None;
    state.at_bat = None;

    if is_walk_off(state) {
        end_game(state, events, Side::Home);
        return;
    }
    if state.outs < 3 {
        return;
    }

    let ended = state.half_inning();
    if ended.inning >= state.config.regulation_innings {
        let winner = match (ended.top, state.score.leader()) {
            (true, Some(Side::Home)) => Some(Side::Home),
            (false, leader) => leader,
            _ => None,
        };
        if let Some(winner) = winner {
            end_game(state, events, winner);
            return;
        }
    }

    if state.is_top_half {
        state.is_top_half = false;
    } else {
        state.inning += 1;
        state.is_top_half = true;
    }
    state.outs = 0;
    state.bases.clear();

    let half = state.half_inning();
    tracing::info!(score.away = state.score.away, score.home = state.score.home, "{half}");
    events.push(PlayEvent::half_inning(format!("--- {half} ---")));
}

/// Home has gone ahead in the bottom half of a regulation or extra inning.
fn is_walk_off(state: &MatchState) -> bool {
    !state.is_top_half
        && state.inning >= state.config.regulation_innings
        && state.score.leader() == Some(Side::Home)
}

fn end_game(state: &mut MatchState, events: &mut Vec<PlayEvent>, winner: Side) {
    state.game_over = true;
    state.winner = Some(winner);
    if state.outs >= 3 {
        state.outs = 0;
        state.bases.clear();
    }
    let (away, home) = (state.score.away, state.score.home);
    tracing::info!(%winner, away, home, inning = state.inning, "game over");
    events.push(PlayEvent::note(format!(
        "Final: away {away}, home {home}. {} wins.",
        match winner {
            Side::Away => "Away",
            Side::Home => "Home",
        }
    )));
}
