//! Match service for Showdown.
//!
//! Wraps the pure resolution engine with the plumbing a server needs:
//! looking up cards, reading the latest stored state, appending the next
//! one under an optimistic turn check, and broadcasting play events.

pub mod config;
pub mod error;
pub mod lineup;
pub mod memory;
pub mod ports;
pub mod service;

pub use config::ServiceConfig;
pub use error::{ServiceError, ServiceResult};
pub use lineup::{Lineup, MatchSetup};
pub use memory::{InMemoryCards, InMemoryMatchStore, NoopNotifier, RecordingNotifier};
pub use ports::{CardSource, MatchStore, Notifier, StoreError, StoredState};
pub use service::{Command, MatchService, Submitted};
