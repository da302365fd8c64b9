//! The match service.
//!
//! Every command runs read-latest, compute, append. The append only lands
//! if nobody else appended in between; otherwise the command is recomputed
//! against the newer state, up to the configured retry limit. Events are
//! broadcast only after their turn is stored.

use serde::{Deserialize, Serialize};

use sd_core::{
    Base, CoreError, DecisionKind, MatchId, MatchState, PendingDecision, PlayEvent, PlayerCard,
    PlayerId, Side,
};
use sd_engine::{
    DecisionChoices, Defense, PitchAction, RollSource, SwingAction, open_steal, resolve_decision,
    resolve_pitch, resolve_swing,
};

use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::lineup::MatchSetup;
use crate::ports::{CardSource, MatchStore, Notifier, StoreError, StoredState};

/// A participant's command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// The defense pitches.
    Pitch {
        /// Pitch or intentional walk.
        action: PitchAction,
    },
    /// The batter swings or bunts.
    Swing {
        /// Swing or bunt.
        action: SwingAction,
    },
    /// Answer the pending decision.
    Decide {
        /// The choices, tagged with the decision kind.
        choices: DecisionChoices,
    },
    /// Start a steal from a base.
    Steal {
        /// The base the runner leaves.
        from: Base,
    },
}

/// The result of an accepted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    /// The turn the command was stored as.
    pub turn: u64,
    /// The new state.
    pub state: MatchState,
    /// Events produced, in order.
    pub events: Vec<PlayEvent>,
    /// The decision the match now waits on, if any.
    pub pause: Option<DecisionKind>,
}

/// Runs commands against stored matches.
pub struct MatchService<S, N, C> {
    store: S,
    notifier: N,
    cards: C,
    config: ServiceConfig,
}

impl<S: MatchStore, N: Notifier, C: CardSource> MatchService<S, N, C> {
    /// Create a service over the given ports.
    pub fn new(store: S, notifier: N, cards: C, config: ServiceConfig) -> Self {
        Self {
            store,
            notifier,
            cards,
            config,
        }
    }

    /// The store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// The card source.
    pub fn cards(&self) -> &C {
        &self.cards
    }

    /// Start a match. Every listed player needs a card, and both batting
    /// orders must be exactly `lineup_size` long, since that is where the
    /// stored batting order wraps.
    pub fn create(&self, setup: MatchSetup) -> ServiceResult<MatchId> {
        for side in [Side::Away, Side::Home] {
            let lineup = setup.lineup(side);
            if lineup.batters.is_empty() {
                return Err(ServiceError::EmptyLineup(side));
            }
            for id in &lineup.batters {
                self.card(*id)?.require_batter()?;
            }
            self.card(lineup.pitcher)?.require_pitcher()?;
            for id in lineup.fielders.values() {
                self.card(*id)?;
            }
            let expected = self.config.match_config.lineup_size;
            if lineup.batters.len() != expected {
                return Err(ServiceError::LineupSize {
                    side,
                    expected,
                    actual: lineup.batters.len(),
                });
            }
        }

        let id = MatchId::new();
        let state = MatchState::with_config(self.config.match_config);
        self.store.create(id, setup, state)?;
        tracing::info!(match_id = %id, "match created");
        Ok(id)
    }

    /// The newest stored turn.
    pub fn latest(&self, id: MatchId) -> ServiceResult<StoredState> {
        Ok(self.store.latest(id)?)
    }

    /// Every stored turn, oldest first.
    pub fn history(&self, id: MatchId) -> ServiceResult<Vec<StoredState>> {
        Ok(self.store.history(id)?)
    }

    /// The lineups for a match.
    pub fn setup(&self, id: MatchId) -> ServiceResult<MatchSetup> {
        Ok(self.store.setup(id)?)
    }

    /// The pitcher and batter facing each other in `state`.
    pub fn matchup(
        &self,
        setup: &MatchSetup,
        state: &MatchState,
    ) -> ServiceResult<(PlayerCard, PlayerCard)> {
        let batting = state.batting_side();
        let lineup = setup.lineup(batting);
        let batter = lineup
            .batter_at(state.batting_order.get(batting))
            .ok_or(ServiceError::EmptyLineup(batting))?;
        let pitcher = setup.lineup(state.fielding_side()).pitcher;
        Ok((self.card(pitcher)?, self.card(batter)?))
    }

    /// The fielding side's defense in `state`.
    pub fn defense(&self, setup: &MatchSetup, state: &MatchState) -> ServiceResult<Defense> {
        let lineup = setup.lineup(state.fielding_side());
        let fielders = lineup
            .fielders
            .iter()
            .map(|(position, id)| Ok((*position, self.card(*id)?)))
            .collect::<ServiceResult<Vec<_>>>()?;
        Ok(Defense::from_fielders(
            fielders.iter().map(|(position, card)| (*position, card)),
        ))
    }

    /// Apply a command to the newest state and store the result.
    ///
    /// A rejected command stores nothing and broadcasts nothing.
    pub fn submit(
        &self,
        id: MatchId,
        command: &Command,
        rolls: &mut dyn RollSource,
    ) -> ServiceResult<Submitted> {
        let setup = self.store.setup(id)?;
        let mut attempts = 0;
        loop {
            attempts += 1;
            let latest = self.store.latest(id)?;
            let (state, events) = self.apply(&setup, &latest.state, command, rolls)?;
            match self
                .store
                .append(id, latest.turn, state.clone(), events.clone())
            {
                Ok(stored) => {
                    for event in &events {
                        self.notifier.broadcast(id, event);
                    }
                    let pause = state.pending.as_ref().map(PendingDecision::kind);
                    tracing::debug!(match_id = %id, turn = stored.turn, status = %state.status, "turn stored");
                    return Ok(Submitted {
                        turn: stored.turn,
                        state,
                        events,
                        pause,
                    });
                }
                Err(StoreError::Conflict {
                    expected, actual, ..
                }) if attempts <= self.config.max_conflict_retries => {
                    tracing::warn!(match_id = %id, expected, actual, attempts, "append conflict, recomputing");
                }
                Err(StoreError::Conflict { .. }) => {
                    return Err(ServiceError::Conflict {
                        match_id: id,
                        attempts,
                    });
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn apply(
        &self,
        setup: &MatchSetup,
        state: &MatchState,
        command: &Command,
        rolls: &mut dyn RollSource,
    ) -> ServiceResult<(MatchState, Vec<PlayEvent>)> {
        let next = match command {
            Command::Pitch { action } => {
                let (pitcher, batter) = self.matchup(setup, state)?;
                resolve_pitch(state, &pitcher, &batter, *action, rolls)?
            }
            Command::Swing { action } => {
                let (pitcher, batter) = self.matchup(setup, state)?;
                let defense = self.defense(setup, state)?;
                let (next, events, _) =
                    resolve_swing(state, &pitcher, &batter, *action, &defense, rolls)?;
                (next, events)
            }
            Command::Decide { choices } => {
                let defense = self.defense(setup, state)?;
                resolve_decision(state, choices, &defense, rolls)?
            }
            Command::Steal { from } => open_steal(state, *from)?,
        };
        Ok(next)
    }

    fn card(&self, id: PlayerId) -> ServiceResult<PlayerCard> {
        self.cards
            .card(id)
            .ok_or(ServiceError::Card(CoreError::UnknownPlayer(id)))
    }
}
