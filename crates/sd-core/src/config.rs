use serde::{Deserialize, Serialize};

/// Rule parameters for a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Innings in a regulation game. Walk-offs and final outs count from here.
    pub regulation_innings: u32,
    /// Batters in each lineup; the batting order wraps at this size.
    pub lineup_size: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            regulation_innings: 9,
            lineup_size: 9,
        }
    }
}

impl MatchConfig {
    /// Set the number of regulation innings (at least 1).
    pub fn with_regulation_innings(mut self, innings: u32) -> Self {
        self.regulation_innings = innings.max(1);
        self
    }

    /// Set the lineup size (at least 1).
    pub fn with_lineup_size(mut self, size: usize) -> Self {
        self.lineup_size = size.max(1);
        self
    }
}
