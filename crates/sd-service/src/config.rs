//! Configuration for the match service.

use sd_core::MatchConfig;

/// Configuration for a [`MatchService`](crate::MatchService).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// How many times a submit is recomputed after losing an append race.
    pub max_conflict_retries: u32,
    /// Rules for newly created matches.
    pub match_config: MatchConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_conflict_retries: 3,
            match_config: MatchConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Set the conflict retry limit.
    pub fn with_max_conflict_retries(mut self, retries: u32) -> Self {
        self.max_conflict_retries = retries;
        self
    }

    /// Set the rules for new matches.
    pub fn with_match_config(mut self, config: MatchConfig) -> Self {
        self.match_config = config;
        self
    }
}
