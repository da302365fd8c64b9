//! In-memory adapters for the service ports.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use chrono::Utc;

use sd_core::{MatchId, MatchState, PlayEvent, PlayerCard, PlayerId};

use crate::lineup::MatchSetup;
use crate::ports::{CardSource, MatchStore, Notifier, StoreError, StoredState};

#[derive(Debug)]
struct MatchRecord {
    setup: MatchSetup,
    turns: Vec<StoredState>,
}

impl MatchRecord {
    fn latest(&self, id: MatchId) -> Result<&StoredState, StoreError> {
        self.turns.last().ok_or(StoreError::NotFound(id))
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Backend("lock poisoned".to_string())
}

/// A [`MatchStore`] kept in process memory.
///
/// Each match has its own lock; the map lock is held only long enough to
/// find or insert a match, so different matches never wait on each other.
#[derive(Debug, Default)]
pub struct InMemoryMatchStore {
    matches: RwLock<HashMap<MatchId, Arc<Mutex<MatchRecord>>>>,
}

impl InMemoryMatchStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, id: MatchId) -> Result<Arc<Mutex<MatchRecord>>, StoreError> {
        let matches = self.matches.read().map_err(poisoned)?;
        matches.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }
}

impl MatchStore for InMemoryMatchStore {
    fn create(
        &self,
        id: MatchId,
        setup: MatchSetup,
        state: MatchState,
    ) -> Result<StoredState, StoreError> {
        let mut matches = self.matches.write().map_err(poisoned)?;
        if matches.contains_key(&id) {
            return Err(StoreError::AlreadyExists(id));
        }
        let opening = StoredState {
            turn: 0,
            state,
            events: Vec::new(),
            recorded_at: Utc::now(),
        };
        let record = MatchRecord {
            setup,
            turns: vec![opening.clone()],
        };
        matches.insert(id, Arc::new(Mutex::new(record)));
        Ok(opening)
    }

    fn setup(&self, id: MatchId) -> Result<MatchSetup, StoreError> {
        let record = self.record(id)?;
        let record = record.lock().map_err(poisoned)?;
        Ok(record.setup.clone())
    }

    fn latest(&self, id: MatchId) -> Result<StoredState, StoreError> {
        let record = self.record(id)?;
        let record = record.lock().map_err(poisoned)?;
        record.latest(id).cloned()
    }

    fn append(
        &self,
        id: MatchId,
        expected_turn: u64,
        state: MatchState,
        events: Vec<PlayEvent>,
    ) -> Result<StoredState, StoreError> {
        let record = self.record(id)?;
        let mut record = record.lock().map_err(poisoned)?;
        let actual = record.latest(id)?.turn;
        if actual != expected_turn {
            return Err(StoreError::Conflict {
                match_id: id,
                expected: expected_turn,
                actual,
            });
        }
        let stored = StoredState {
            turn: actual + 1,
            state,
            events,
            recorded_at: Utc::now(),
        };
        record.turns.push(stored.clone());
        Ok(stored)
    }

    fn history(&self, id: MatchId) -> Result<Vec<StoredState>, StoreError> {
        let record = self.record(id)?;
        let record = record.lock().map_err(poisoned)?;
        Ok(record.turns.clone())
    }
}

/// A [`CardSource`] over a fixed set of cards.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCards {
    cards: HashMap<PlayerId, PlayerCard>,
}

impl InMemoryCards {
    /// An empty card set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a card.
    pub fn insert(&mut self, card: PlayerCard) {
        self.cards.insert(card.id, card);
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether there are no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<PlayerCard> for InMemoryCards {
    fn from_iter<I: IntoIterator<Item = PlayerCard>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().map(|c| (c.id, c)).collect(),
        }
    }
}

impl CardSource for InMemoryCards {
    fn card(&self, id: PlayerId) -> Option<PlayerCard> {
        self.cards.get(&id).cloned()
    }
}

/// A [`Notifier`] that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn broadcast(&self, _id: MatchId, _event: &PlayEvent) {}
}

/// A [`Notifier`] that keeps every broadcast, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(MatchId, PlayEvent)>>,
}

impl RecordingNotifier {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything broadcast so far.
    pub fn sent(&self) -> Vec<(MatchId, PlayEvent)> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn broadcast(&self, id: MatchId, event: &PlayEvent) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push((id, event.clone()));
        }
    }
}
