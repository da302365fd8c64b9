//! Error types for the match service.

use thiserror::Error;

use sd_core::{CoreError, MatchId, Side};
use sd_engine::EngineError;

use crate::ports::StoreError;

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors returned by [`MatchService`](crate::MatchService).
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No match with this id.
    #[error("match {0} not found")]
    MatchNotFound(MatchId),

    /// A match with this id already exists.
    #[error("match {0} already exists")]
    MatchExists(MatchId),

    /// Other submissions kept landing first.
    #[error("match {match_id} changed under us {attempts} times, giving up")]
    Conflict {
        /// The contended match.
        match_id: MatchId,
        /// Appends attempted.
        attempts: u32,
    },

    /// A lineup has nobody in its batting order.
    #[error("the {0} lineup has no batters")]
    EmptyLineup(Side),

    /// A batting order is not the length the batting order wraps at.
    #[error("the {side} lineup has {actual} batters, expected {expected}")]
    LineupSize {
        /// The side with the short or long order.
        side: Side,
        /// Batters the match config calls for.
        expected: usize,
        /// Batters listed.
        actual: usize,
    },

    /// The store failed.
    #[error("store error: {0}")]
    Store(String),

    /// The engine rejected the command.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A card is missing or has the wrong role.
    #[error(transparent)]
    Card(#[from] CoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::MatchNotFound(id),
            StoreError::AlreadyExists(id) => Self::MatchExists(id),
            StoreError::Conflict { match_id, .. } => Self::Conflict {
                match_id,
                attempts: 1,
            },
            StoreError::Backend(msg) => Self::Store(msg),
        }
    }
}
