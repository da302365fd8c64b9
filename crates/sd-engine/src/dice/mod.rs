//! Dice for the engine.
//!
//! Every random number the engine uses is a d20 drawn from an injected
//! [`RollSource`], so a match replays exactly given the same source.

pub mod source;

pub use source::{ScriptedRolls, SeededRolls};

/// Faces on the chart die.
pub const D20: u32 = 20;

/// Supplies uniformly distributed d20 rolls.
pub trait RollSource {
    /// Roll one d20, returning a value in `1..=20`.
    fn roll_d20(&mut self) -> u32;
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    fn roll_d20(&mut self) -> u32 {
        (**self).roll_d20()
    }
}
