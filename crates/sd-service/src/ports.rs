//! Ports to the world outside the engine.
//!
//! The service owns no storage, transport, or roster data. It reaches them
//! through these traits so a server can plug in a database and a websocket
//! hub, and tests can plug in the in-memory versions from
//! [`memory`](crate::memory).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use sd_core::{MatchId, MatchState, PlayEvent, PlayerCard, PlayerId};

use crate::lineup::MatchSetup;

/// One stored turn of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredState {
    /// Turn number, 0 for the opening state, +1 per accepted command.
    pub turn: u64,
    /// The state after this turn.
    pub state: MatchState,
    /// Events the turn produced.
    pub events: Vec<PlayEvent>,
    /// When the turn was stored.
    pub recorded_at: DateTime<Utc>,
}

/// Errors from a [`MatchStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// No match with this id.
    #[error("match {0} not found")]
    NotFound(MatchId),

    /// A match with this id already exists.
    #[error("match {0} already exists")]
    AlreadyExists(MatchId),

    /// Another turn was appended since the caller read the state.
    #[error("match {match_id} is at turn {actual}, expected {expected}")]
    Conflict {
        /// The contended match.
        match_id: MatchId,
        /// The turn the caller computed from.
        expected: u64,
        /// The turn actually stored.
        actual: u64,
    },

    /// Anything else the backend reports.
    #[error("{0}")]
    Backend(String),
}

/// Durable match history.
pub trait MatchStore: Send + Sync {
    /// Store a new match with its lineups and opening state as turn 0.
    fn create(
        &self,
        id: MatchId,
        setup: MatchSetup,
        state: MatchState,
    ) -> Result<StoredState, StoreError>;

    /// The lineups a match was created with.
    fn setup(&self, id: MatchId) -> Result<MatchSetup, StoreError>;

    /// The newest stored turn.
    fn latest(&self, id: MatchId) -> Result<StoredState, StoreError>;

    /// Store the next turn, but only if the newest turn is still
    /// `expected_turn`.
    fn append(
        &self,
        id: MatchId,
        expected_turn: u64,
        state: MatchState,
        events: Vec<PlayEvent>,
    ) -> Result<StoredState, StoreError>;

    /// Every stored turn, oldest first.
    fn history(&self, id: MatchId) -> Result<Vec<StoredState>, StoreError>;
}

/// Realtime fan-out of play events to match participants.
pub trait Notifier: Send + Sync {
    /// Deliver one event. Delivery failures are the notifier's problem.
    fn broadcast(&self, id: MatchId, event: &PlayEvent);
}

/// Read-only player cards.
pub trait CardSource: Send + Sync {
    /// Look up a card.
    fn card(&self, id: PlayerId) -> Option<PlayerCard>;
}
