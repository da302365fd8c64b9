//! Error types for the resolution engine.

use sd_core::{AtBatStatus, CoreError};

/// Errors that reject an engine call. The input state is never modified.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The game has ended; no further transitions are accepted.
    #[error("the game is over")]
    GameOver,

    /// The call does not fit the current phase of the at-bat.
    #[error("illegal transition: expected {expected}, match is {actual}")]
    IllegalTransition {
        /// The phase the call requires.
        expected: String,
        /// The phase the match is in.
        actual: AtBatStatus,
    },

    /// A decision names runners or bases that cannot take part in it.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// The wrong player was supplied for the at-bat in progress.
    #[error("{role} mismatch: the at-bat in progress is not {name}'s")]
    PlayerMismatch {
        /// `"batter"` or `"pitcher"`.
        role: &'static str,
        /// The supplied player's name.
        name: String,
    },

    /// A card lacks the ratings its role needs.
    #[error(transparent)]
    Card(#[from] CoreError),
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
