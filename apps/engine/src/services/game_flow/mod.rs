//! Game flow orchestration service: bridges the pure domain actions with the
//! game store.
//!
//! Every mutation loads the record, replays the domain action with an rng
//! derived from the game seed and the record version, writes back under the
//! optimistic lock and publishes the derived transitions.

mod mutation;
mod player_actions;

use std::sync::Arc;

use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tokio::sync::broadcast;
use tracing::info;

pub use mutation::GameFlowMutationResult;

use crate::config::EngineConfig;
use crate::domain::seed_derivation::derive_setup_seed;
use crate::domain::setup::initialize_game;
use crate::domain::state::{GameId, GameStatus};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::{GameEvent, GameRecord, GameStore};
use crate::utils::join_code::{is_valid_share_code, normalize_share_code, SHARE_CODE_LEN};

pub struct GameFlowService<S: GameStore> {
    store: Arc<S>,
    config: EngineConfig,
    /// Source of base seeds for new games.
    seeds: Mutex<ChaCha8Rng>,
}

impl<S: GameStore> GameFlowService<S> {
    pub fn new(store: Arc<S>, config: EngineConfig) -> Self {
        let seeds = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            store,
            config,
            seeds: Mutex::new(seeds),
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn next_game_seed(&self) -> u64 {
        self.seeds.lock().random()
    }

    fn check_seat_limit(&self, players: usize) -> Result<(), DomainError> {
        if players > self.config.max_players {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!(
                    "At most {} players per game, got {players}",
                    self.config.max_players
                ),
            ));
        }
        Ok(())
    }

    /// Deal a new active game for `player_names` and store it.
    pub fn create_game<N: AsRef<str>>(&self, player_names: &[N]) -> Result<GameRecord, DomainError> {
        self.check_seat_limit(player_names.len())?;
        let rng_seed = self.next_game_seed();
        let mut rng = ChaCha8Rng::seed_from_u64(derive_setup_seed(rng_seed));
        let state = initialize_game(player_names, &mut rng)?;
        let record = self.store.insert_game(state, rng_seed)?;
        info!(
            game_id = %record.id(),
            players = record.state.players.len(),
            share_code = %record.state.share_code,
            "Game created"
        );
        Ok(record)
    }

    /// Store a waiting game seated with its host only. Others join by share
    /// code until [`Self::start_game`].
    pub fn create_lobby(&self, host_name: &str) -> Result<GameRecord, DomainError> {
        let rng_seed = self.next_game_seed();
        let mut rng = ChaCha8Rng::seed_from_u64(derive_setup_seed(rng_seed));
        let mut state = initialize_game(&[host_name], &mut rng)?;
        state.status = GameStatus::Waiting;
        let record = self.store.insert_game(state, rng_seed)?;
        info!(game_id = %record.id(), share_code = %record.state.share_code, "Lobby opened");
        Ok(record)
    }

    pub fn load_game(&self, game_id: GameId) -> Result<GameRecord, DomainError> {
        self.store.require_game(game_id)
    }

    /// Look up a game by a share code typed by a player. Malformed codes are
    /// rejected before touching the store.
    pub fn find_by_share_code(&self, code: &str) -> Result<GameRecord, DomainError> {
        if !is_valid_share_code(&normalize_share_code(code)) {
            return Err(DomainError::validation(
                ValidationKind::InvalidShareCode,
                format!("Share codes are {SHARE_CODE_LEN} letters or digits"),
            ));
        }
        self.store.find_by_share_code(code)?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("No game with share code {code}"))
        })
    }

    pub fn subscribe(&self, game_id: GameId) -> Result<broadcast::Receiver<GameEvent>, DomainError> {
        self.store.subscribe(game_id)
    }
}
