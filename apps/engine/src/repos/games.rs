//! Stored game records and the store contract.

use tokio::sync::broadcast;

use crate::domain::game_transition::{GameLifecycleView, GameTransition};
use crate::domain::state::{GameId, GameState};
use crate::errors::domain::{DomainError, NotFoundKind};

/// A game as persisted: the full state plus storage bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub state: GameState,
    /// Base seed every action's rng is derived from.
    pub rng_seed: u64,
    /// Bumped on every successful update.
    pub lock_version: i32,
}

impl GameRecord {
    pub fn id(&self) -> GameId {
        self.state.id
    }

    pub fn lifecycle_view(&self) -> GameLifecycleView {
        GameLifecycleView::from_state(&self.state, self.lock_version)
    }
}

/// Change notification sent to a game's subscribers after a committed update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEvent {
    pub game_id: GameId,
    pub lock_version: i32,
    pub transitions: Vec<GameTransition>,
}

/// Storage for game records.
///
/// Writes are guarded by `lock_version`: an update carrying a stale expected
/// version fails with `Conflict(OptimisticLock)` and leaves the record alone.
pub trait GameStore: Send + Sync {
    /// Store a new game at version 0. Share codes are unique across games.
    fn insert_game(&self, state: GameState, rng_seed: u64) -> Result<GameRecord, DomainError>;

    fn find_by_id(&self, id: GameId) -> Result<Option<GameRecord>, DomainError>;

    /// Look up a game by share code; input is matched case-insensitively.
    fn find_by_share_code(&self, code: &str) -> Result<Option<GameRecord>, DomainError>;

    /// Replace the stored state if the stored version still equals
    /// `expected_lock_version`. Returns the record at its new version.
    fn update_game(
        &self,
        state: GameState,
        expected_lock_version: i32,
    ) -> Result<GameRecord, DomainError>;

    /// Receive events for one game. Events published before subscribing are
    /// not replayed.
    fn subscribe(&self, id: GameId) -> Result<broadcast::Receiver<GameEvent>, DomainError>;

    /// Fan an event out to the game's subscribers. No subscribers is fine.
    fn publish(&self, event: GameEvent);

    /// Find a game by id or fail with `NotFound(Game)`.
    fn require_game(&self, id: GameId) -> Result<GameRecord, DomainError> {
        self.find_by_id(id)?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, format!("Game {id} not found")))
    }
}
