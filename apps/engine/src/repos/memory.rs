//! Process-local game store backed by concurrent maps.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::domain::state::{GameId, GameState};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::games::{GameEvent, GameRecord, GameStore};
use crate::utils::join_code::normalize_share_code;

/// Buffered events per game before slow subscribers start lagging.
const FEED_CAPACITY: usize = 64;

#[derive(Default)]
pub struct InMemoryGameStore {
    games: DashMap<GameId, GameRecord>,
    share_codes: DashMap<String, GameId>,
    feeds: DashMap<GameId, broadcast::Sender<GameEvent>>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameStore for InMemoryGameStore {
    fn insert_game(&self, state: GameState, rng_seed: u64) -> Result<GameRecord, DomainError> {
        let id = state.id;
        let code = normalize_share_code(&state.share_code);

        let slot = match self.games.entry(id) {
            Entry::Occupied(_) => {
                return Err(DomainError::conflict(
                    ConflictKind::GameExists,
                    format!("Game {id} already exists"),
                ))
            }
            Entry::Vacant(slot) => slot,
        };
        match self.share_codes.entry(code.clone()) {
            Entry::Occupied(_) => {
                return Err(DomainError::conflict(
                    ConflictKind::JoinCodeConflict,
                    format!("Share code {code} is already in use"),
                ))
            }
            Entry::Vacant(code_slot) => {
                code_slot.insert(id);
            }
        }

        let mut state = state;
        state.share_code = code;
        let record = GameRecord {
            state,
            rng_seed,
            lock_version: 0,
        };
        slot.insert(record.clone());
        debug!(game_id = %id, share_code = %record.state.share_code, "Stored new game");
        Ok(record)
    }

    fn find_by_id(&self, id: GameId) -> Result<Option<GameRecord>, DomainError> {
        Ok(self.games.get(&id).map(|r| r.value().clone()))
    }

    fn find_by_share_code(&self, code: &str) -> Result<Option<GameRecord>, DomainError> {
        let code = normalize_share_code(code);
        let Some(id) = self.share_codes.get(&code).map(|r| *r.value()) else {
            return Ok(None);
        };
        self.find_by_id(id)
    }

    fn update_game(
        &self,
        state: GameState,
        expected_lock_version: i32,
    ) -> Result<GameRecord, DomainError> {
        let id = state.id;
        let mut stored = self.games.get_mut(&id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("Game {id} not found"))
        })?;

        if stored.lock_version != expected_lock_version {
            warn!(
                game_id = %id,
                expected = expected_lock_version,
                actual = stored.lock_version,
                "Rejected stale game update"
            );
            return Err(DomainError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "Game lock version mismatch: expected {}, but game has version {}",
                    expected_lock_version, stored.lock_version
                ),
            ));
        }

        // The share code is assigned at insert and never changes.
        let mut state = state;
        state.share_code = stored.state.share_code.clone();
        stored.state = state;
        stored.lock_version += 1;
        Ok(stored.value().clone())
    }

    fn subscribe(&self, id: GameId) -> Result<broadcast::Receiver<GameEvent>, DomainError> {
        if !self.games.contains_key(&id) {
            return Err(DomainError::not_found(
                NotFoundKind::Game,
                format!("Game {id} not found"),
            ));
        }
        let sender = self
            .feeds
            .entry(id)
            .or_insert_with(|| broadcast::channel(FEED_CAPACITY).0);
        Ok(sender.subscribe())
    }

    fn publish(&self, event: GameEvent) {
        if let Some(sender) = self.feeds.get(&event.game_id) {
            // Err only means nobody is listening right now.
            let _ = sender.send(event);
        }
    }
}
