//! The pitch and the swing.
//!
//! The pitch roll plus the pitcher's effective control is checked against
//! the batter's on-base rating; whoever wins reads their own chart with a
//! second roll.

use std::fmt;

use serde::{Deserialize, Serialize};

use sd_core::{Advantage, Chart, OutcomeCode};

use crate::dice::RollSource;

/// The result of the pitch roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchResult {
    /// The raw d20.
    pub roll: u32,
    /// Effective control added to the roll.
    pub control: i32,
    /// Batter on-base rating the check was made against.
    pub on_base: i32,
    /// Whose chart the swing uses.
    pub advantage: Advantage,
}

impl PitchResult {
    /// `roll + control`.
    pub fn check(&self) -> i32 {
        self.roll as i32 + self.control
    }
}

impl fmt::Display for PitchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pitch roll: {} + {} (CTL) = {} vs {} (OB). {} has the advantage.",
            self.roll,
            self.control,
            self.check(),
            self.on_base,
            self.advantage
        )
    }
}

/// Roll the pitch. The pitcher wins only when the check is strictly
/// greater than the batter's on-base rating.
pub fn pitch(rolls: &mut dyn RollSource, control: i32, on_base: i32) -> PitchResult {
    let roll = rolls.roll_d20();
    let check = roll as i32 + control;
    let advantage = if check > on_base {
        Advantage::Pitcher
    } else {
        Advantage::Batter
    };
    tracing::debug!(roll, control, on_base, %advantage, "pitch");
    PitchResult {
        roll,
        control,
        on_base,
        advantage,
    }
}

/// Roll the swing on `chart`. A roll the chart does not cover is a generic out.
pub fn swing(rolls: &mut dyn RollSource, chart: &Chart) -> (u32, OutcomeCode) {
    let roll = rolls.roll_d20();
    let outcome = chart.lookup(roll).unwrap_or_else(|| {
        tracing::warn!(roll, "chart does not cover roll, treating as out");
        OutcomeCode::Out
    });
    tracing::debug!(roll, outcome = outcome.code(), "swing");
    (roll, outcome)
}
