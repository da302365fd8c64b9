//! Core types for Showdown: player cards, outcome charts, and the match state.
//!
//! This crate is the data model shared by the rules engine and the match
//! service. It has no notion of dice or turn order; it only describes what a
//! match looks like between two plays.

/// Player cards, fielding positions, and d20 outcome charts.
pub mod card;
/// Rule parameters for a match.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Structured play-by-play records.
pub mod event;
/// Player and match identifiers.
pub mod id;
/// The closed set of chart outcome codes.
pub mod outcome;
/// Match state: score, bases, outs, pending decisions, pitcher lines.
pub mod state;

/// Re-export card types.
pub use card::{CardRole, Chart, ChartEntry, ChartRange, PlayerCard, Position};
/// Re-export match configuration.
pub use config::MatchConfig;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the play event record.
pub use event::PlayEvent;
/// Re-export identifiers.
pub use id::{MatchId, PlayerId};
/// Re-export outcome codes.
pub use outcome::OutcomeCode;
/// Re-export match state types.
pub use state::{
    Advantage, AtBat, AtBatStatus, Base, Bases, BattingOrder, DecisionKind, HalfInning,
    MatchState, PendingDecision, PitcherLine, Runner, Score, Side,
};
