//! Pitcher fatigue.
//!
//! A pitcher tires once the half-innings they have pitched exceed their
//! endurance (`ip`), and every three runs charged to them shorten that
//! endurance by one. Each half-inning past the threshold costs one point of
//! control.

use sd_core::{MatchState, PitcherLine, PlayerId};

/// Endurance left after runs allowed: `ip - floor(earned_runs / 3)`.
pub fn threshold(ip: i32, line: &PitcherLine) -> i32 {
    ip - (line.earned_runs / 3) as i32
}

/// Control lost to fatigue, never negative.
pub fn penalty(ip: i32, line: &PitcherLine) -> i32 {
    (line.innings_pitched as i32 - threshold(ip, line)).max(0)
}

/// Control after fatigue.
pub fn effective_control(control: i32, ip: i32, line: &PitcherLine) -> i32 {
    control - penalty(ip, line)
}

/// Charge `pitcher` for the current half-inning if this is the first pitch
/// they throw in it. Returns true when a new half-inning was charged.
///
/// A new half-inning is recognized by comparing against
/// [`PitcherLine::last_half`], not by the older "batting order at 0 and no
/// outs" test. That test charges again every time the order turns over
/// with nobody out, and misses half-innings that start mid-order.
pub fn charge_half_inning(state: &mut MatchState, pitcher: PlayerId) -> bool {
    let half = state.half_inning();
    let line = state.pitcher_fatigue.entry(pitcher).or_default();
    if line.last_half == Some(half) {
        return false;
    }
    line.innings_pitched += 1;
    line.last_half = Some(half);
    tracing::debug!(
        %pitcher,
        innings_pitched = line.innings_pitched,
        "pitcher charged for {half}"
    );
    true
}
