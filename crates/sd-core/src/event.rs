//! Structured play-by-play records.
//!
//! The engine emits these in order for every call. Rendering them is the
//! caller's business; the flags let a log viewer highlight scoring plays,
//! outs, and half-inning breaks without parsing text.

use serde::{Deserialize, Serialize};

/// One entry in the play-by-play log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayEvent {
    /// What happened.
    pub text: String,
    /// The score changed with this event.
    pub score_changed: bool,
    /// The out count changed with this event.
    pub outs_changed: bool,
    /// This event marks the start of a new half-inning.
    pub is_half_inning_change: bool,
}

impl PlayEvent {
    /// A plain narrative event.
    pub fn note(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            score_changed: false,
            outs_changed: false,
            is_half_inning_change: false,
        }
    }

    /// A run scored.
    pub fn run(text: impl Into<String>) -> Self {
        Self {
            score_changed: true,
            ..Self::note(text)
        }
    }

    /// One or more outs were recorded.
    pub fn out(text: impl Into<String>) -> Self {
        Self {
            outs_changed: true,
            ..Self::note(text)
        }
    }

    /// A new half-inning began.
    pub fn half_inning(text: impl Into<String>) -> Self {
        Self {
            is_half_inning_change: true,
            outs_changed: true,
            ..Self::note(text)
        }
    }
}
