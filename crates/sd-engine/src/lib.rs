//! At-bat resolution engine for Showdown.
//!
//! Every entry point in [`api`] is a pure transition: it takes a
//! [`MatchState`](sd_core::MatchState) snapshot, the cards involved, and a
//! [`RollSource`], and returns a new snapshot plus the ordered play events.
//! A rejected call returns an error and leaves nothing half-applied.
//!
//! The pieces, leaves first:
//! - [`dice`]: d20 roll sources (seeded and scripted).
//! - [`fatigue`]: effective control from innings pitched and earned runs.
//! - [`matchup`]: pitch advantage and chart lookup.
//! - [`outcome`]: base, out, and run bookkeeping for each outcome code.
//! - [`decision`]: extra-base, tag-up, infield-in, and steal resolution.
//! - [`transition`]: batting order, three outs, and game end.

pub mod api;
pub mod decision;
pub mod defense;
pub mod dice;
pub mod error;
pub mod fatigue;
pub mod matchup;
pub mod outcome;
mod play;
pub mod transition;

pub use api::{
    DecisionChoices, PitchAction, SwingAction, open_steal, resolve_decision, resolve_pitch,
    resolve_swing,
};
pub use defense::Defense;
pub use dice::{RollSource, ScriptedRolls, SeededRolls};
pub use error::{EngineError, EngineResult};
pub use outcome::{OutcomeResolution, resolve_outcome};
pub use transition::PlayKind;
