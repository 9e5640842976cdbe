use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::deck::{Deck, DiscardPile};
use crate::domain::Card;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub Uuid);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub Uuid);

fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.random()).into_uuid()
}

impl PlayerId {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        PlayerId(random_uuid(rng))
    }
}

impl GameId {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        GameId(random_uuid(rng))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Game lifecycle: Waiting -> Active -> Completed, one step at a time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Waiting,
    Active,
    Completed,
}

impl GameStatus {
    /// Staying put or moving exactly one step forward.
    pub fn can_transition_to(self, next: GameStatus) -> bool {
        use GameStatus::*;
        matches!(
            (self, next),
            (Waiting, Waiting | Active) | (Active, Active | Completed) | (Completed, Completed)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vec<Card>,
    /// 1..=10 while playing; one past the last phase once phase 10 is done.
    pub current_phase: u8,
    pub score: u32,
    pub has_completed_phase: bool,
    pub has_laid_down: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, hand: Vec<Card>) -> Self {
        Self {
            id,
            name: name.into(),
            hand,
            current_phase: 1,
            score: 0,
            has_completed_phase: false,
            has_laid_down: false,
        }
    }
}

/// Groups a player laid down to complete their phase this round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaidDownCards {
    pub player_id: PlayerId,
    pub groups: Vec<Vec<Card>>,
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub id: GameId,
    /// Turn order.
    pub players: Vec<Player>,
    pub deck: Deck,
    pub discard_pile: DiscardPile,
    pub current_player_index: usize,
    /// Seat that opened the current round.
    pub round_starter_index: usize,
    /// 1-based round number.
    pub round_no: u32,
    pub status: GameStatus,
    pub winner: Option<PlayerId>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub share_code: String,
    /// The current player has drawn and now owes a discard.
    pub has_drawn: bool,
    pub laid_down: Vec<LaidDownCards>,
}

impl GameState {
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_index(&self, id: PlayerId) -> Result<usize, DomainError> {
        self.players
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Player, format!("Player {id}")))
    }

    /// Every card currently in the game: hands, deck, discard pile and
    /// laid-down groups.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self
            .players
            .iter()
            .flat_map(|p| p.hand.iter().copied())
            .collect();
        cards.extend_from_slice(self.deck.cards());
        cards.extend_from_slice(self.discard_pile.cards());
        for record in &self.laid_down {
            for group in &record.groups {
                cards.extend_from_slice(group);
            }
        }
        cards
    }

    /// Move the status forward, rejecting any backward step.
    pub fn set_status(&mut self, next: GameStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::validation(
                ValidationKind::InvalidStatusTransition,
                format!("Cannot move game from {:?} to {:?}", self.status, next),
            ));
        }
        self.status = next;
        Ok(())
    }
}

/// Seat after `index` in a table of `count` players.
#[inline]
pub fn next_player_index(index: usize, count: usize) -> usize {
    debug_assert!(count > 0, "player list must not be empty");
    (index + 1) % count
}

pub fn require_active(state: &GameState) -> Result<(), DomainError> {
    if state.status != GameStatus::Active {
        return Err(DomainError::validation(
            ValidationKind::GameNotActive,
            format!("Game is {:?}", state.status),
        ));
    }
    Ok(())
}

/// Index of `player_id`, provided it is their turn.
pub fn require_turn(state: &GameState, player_id: PlayerId) -> Result<usize, DomainError> {
    let index = state.player_index(player_id)?;
    if index != state.current_player_index {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Not your turn",
        ));
    }
    Ok(index)
}
