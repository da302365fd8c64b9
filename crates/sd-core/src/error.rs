use crate::id::PlayerId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or validating core data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A chart range key could not be parsed (e.g. `"7-x"`).
    #[error("invalid chart range: \"{0}\"")]
    InvalidRange(String),

    /// A chart does not exactly cover the d20 faces.
    #[error("invalid chart: {0}")]
    InvalidChart(String),

    /// A referenced player card is not available.
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),

    /// A batter card was used where a pitcher card is required.
    #[error("{0} is not a pitcher")]
    NotAPitcher(String),

    /// A pitcher card was used where a batter card is required.
    #[error("{0} is not a batter")]
    NotABatter(String),
}
