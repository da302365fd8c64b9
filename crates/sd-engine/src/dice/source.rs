//! Roll source implementations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{D20, RollSource};

/// Rolls from a seeded RNG. Same seed, same rolls.
#[derive(Debug, Clone)]
pub struct SeededRolls {
    rng: StdRng,
}

impl SeededRolls {
    /// Create a roll source from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Wrap an existing RNG.
    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl RollSource for SeededRolls {
    fn roll_d20(&mut self) -> u32 {
        self.rng.random_range(1..=D20)
    }
}

/// Replays a fixed script of rolls, cycling when it runs out.
///
/// Values are clamped into `1..=20`. An empty script always rolls 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    script: Vec<u32>,
    rolled: usize,
}

impl ScriptedRolls {
    /// Create a source that yields `script` in order.
    pub fn new(script: impl Into<Vec<u32>>) -> Self {
        Self {
            script: script.into(),
            rolled: 0,
        }
    }

    /// A source that always rolls `value`.
    pub fn always(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// How many rolls have been taken so far.
    pub fn rolled(&self) -> usize {
        self.rolled
    }
}

impl RollSource for ScriptedRolls {
    fn roll_d20(&mut self) -> u32 {
        let value = if self.script.is_empty() {
            1
        } else {
            self.script[self.rolled % self.script.len()]
        };
        self.rolled += 1;
        value.clamp(1, D20)
    }
}
