use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::GameFlowService;
use crate::domain::game_transition::{derive_game_transitions, GameTransition};
use crate::domain::seed_derivation::derive_action_seed;
use crate::domain::state::{GameId, GameState};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::{GameEvent, GameRecord, GameStore};

#[derive(Debug)]
pub struct GameFlowMutationResult {
    pub final_game: GameRecord,
    pub old_version: i32,
    pub transitions: Vec<GameTransition>,
}

impl GameFlowMutationResult {
    pub fn final_version(&self) -> i32 {
        self.final_game.lock_version
    }

    pub fn state(&self) -> &GameState {
        &self.final_game.state
    }
}

impl<S: GameStore> GameFlowService<S> {
    /// Apply `mutation` to the stored game and commit it.
    ///
    /// With `expected_version` set, a record that moved on since the caller
    /// last read it is rejected before the mutation runs.
    pub(super) fn run_mutation<F, T>(
        &self,
        game_id: GameId,
        expected_version: Option<i32>,
        mutation: F,
    ) -> Result<(GameFlowMutationResult, T), DomainError>
    where
        F: FnOnce(&GameState, &mut ChaCha8Rng) -> Result<(GameState, T), DomainError>,
    {
        let before = self.store.require_game(game_id)?;
        let old_version = before.lock_version;

        if let Some(expected) = expected_version {
            if expected != old_version {
                return Err(DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    format!(
                        "Game lock version mismatch: expected {expected}, but game has version {old_version}"
                    ),
                ));
            }
        }

        let mut rng = ChaCha8Rng::seed_from_u64(derive_action_seed(before.rng_seed, old_version));
        let (next, output) = mutation(&before.state, &mut rng)?;

        let final_game = self.store.update_game(next, old_version)?;
        let transitions =
            derive_game_transitions(&before.lifecycle_view(), &final_game.lifecycle_view());
        debug!(
            game_id = %game_id,
            old_version,
            new_version = final_game.lock_version,
            transitions = transitions.len(),
            "Game mutation committed"
        );

        self.store.publish(GameEvent {
            game_id,
            lock_version: final_game.lock_version,
            transitions: transitions.clone(),
        });

        Ok((
            GameFlowMutationResult {
                final_game,
                old_version,
                transitions,
            },
            output,
        ))
    }
}
