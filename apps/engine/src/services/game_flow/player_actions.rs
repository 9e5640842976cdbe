use tracing::{debug, info};

use super::{GameFlowMutationResult, GameFlowService};
use crate::domain::player_actions;
use crate::domain::state::{GameId, GameStatus, PlayerId};
use crate::domain::CardId;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::GameStore;

impl<S: GameStore> GameFlowService<S> {
    /// Seat a new player in the game behind `share_code`.
    pub fn join_game(
        &self,
        share_code: &str,
        name: &str,
    ) -> Result<(GameFlowMutationResult, PlayerId), DomainError> {
        let record = self.find_by_share_code(share_code)?;
        if record.state.players.len() >= self.config.max_players {
            return Err(DomainError::validation(
                ValidationKind::GameFull,
                "Game is full",
            ));
        }

        let (result, player_id) = self.run_mutation(
            record.id(),
            Some(record.lock_version),
            |state, rng| player_actions::join_game(state, name, rng),
        )?;
        info!(game_id = %record.id(), player_id = %player_id, "Player joined game");
        Ok((result, player_id))
    }

    pub fn start_game(
        &self,
        game_id: GameId,
        expected_version: Option<i32>,
    ) -> Result<GameFlowMutationResult, DomainError> {
        let (result, ()) = self.run_mutation(game_id, expected_version, |state, _| {
            Ok((player_actions::start_game(state)?, ()))
        })?;
        info!(game_id = %game_id, players = result.state().players.len(), "Game started");
        Ok(result)
    }

    pub fn draw_from_deck(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        expected_version: Option<i32>,
    ) -> Result<GameFlowMutationResult, DomainError> {
        debug!(game_id = %game_id, player_id = %player_id, "Drawing from deck");
        let (result, ()) = self.run_mutation(game_id, expected_version, |state, rng| {
            Ok((player_actions::draw_from_deck(state, player_id, rng)?, ()))
        })?;
        Ok(result)
    }

    pub fn draw_from_discard(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        expected_version: Option<i32>,
    ) -> Result<GameFlowMutationResult, DomainError> {
        debug!(game_id = %game_id, player_id = %player_id, "Drawing from discard pile");
        let (result, ()) = self.run_mutation(game_id, expected_version, |state, _| {
            Ok((player_actions::draw_from_discard(state, player_id)?, ()))
        })?;
        Ok(result)
    }

    pub fn lay_down_phase(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        groups: &[Vec<CardId>],
        expected_version: Option<i32>,
    ) -> Result<GameFlowMutationResult, DomainError> {
        debug!(game_id = %game_id, player_id = %player_id, groups = groups.len(), "Laying down phase");
        let (result, ()) = self.run_mutation(game_id, expected_version, |state, rng| {
            Ok((player_actions::lay_down_phase(state, player_id, groups, rng)?, ()))
        })?;
        Ok(result)
    }

    pub fn discard(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        card_id: CardId,
        expected_version: Option<i32>,
    ) -> Result<GameFlowMutationResult, DomainError> {
        debug!(game_id = %game_id, player_id = %player_id, card_id = %card_id, "Discarding");
        let (result, ()) = self.run_mutation(game_id, expected_version, |state, rng| {
            Ok((player_actions::discard(state, player_id, card_id, rng)?, ()))
        })?;
        if result.state().status == GameStatus::Completed {
            info!(game_id = %game_id, winner = ?result.state().winner, "Game finished");
        }
        Ok(result)
    }
}
