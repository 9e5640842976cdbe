//! Turn actions: joining, drawing, laying down a phase and discarding.
//!
//! Every action takes the prior state by reference and returns the next
//! state. A rejected action returns an error and the caller keeps its state.
//!
//! A turn is: draw (deck or discard pile), optionally lay down the phase,
//! then discard, which passes the turn. Going out (empty hand after laying
//! down) finishes the round.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::domain::draw::{draw_card, take_discard};
use crate::domain::round_lifecycle::finish_round;
use crate::domain::rules::{phase, HAND_SIZE, MAX_PLAYERS};
use crate::domain::setup::validate_player_name;
use crate::domain::state::{
    next_player_index, require_active, require_turn, GameState, GameStatus, Player, PlayerId,
};
use crate::domain::validation::validate_completion;
use crate::domain::{Card, CardId, LaidDownCards};
use crate::errors::domain::{DomainError, ValidationKind};

/// Seat a new player and deal them a hand from the draw pile.
pub fn join_game<R: Rng + ?Sized>(
    state: &GameState,
    name: &str,
    rng: &mut R,
) -> Result<(GameState, PlayerId), DomainError> {
    if state.status == GameStatus::Completed {
        return Err(DomainError::validation(
            ValidationKind::GameNotActive,
            "Game is not available",
        ));
    }
    if state.players.len() >= MAX_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::GameFull,
            "Game is full",
        ));
    }
    validate_player_name(name)?;

    let mut deck = state.deck.clone();
    let mut discard_pile = state.discard_pile.clone();
    let mut hand = Vec::with_capacity(HAND_SIZE);
    while hand.len() < HAND_SIZE {
        let out = draw_card(&deck, &discard_pile, rng);
        let Some(card) = out.card else {
            return Err(DomainError::validation(
                ValidationKind::InsufficientCards,
                format!("Only {} cards available for a new hand", hand.len()),
            ));
        };
        hand.push(card);
        deck = out.deck;
        discard_pile = out.discard_pile;
    }

    let player = Player::new(PlayerId::random(rng), name, hand);
    let player_id = player.id;
    let mut next = state.clone();
    next.players.push(player);
    next.deck = deck;
    next.discard_pile = discard_pile;
    debug!(game_id = %next.id, player_id = %player_id, seat = next.players.len() - 1, "Player joined");
    Ok((next, player_id))
}

/// Open a waiting game for play.
pub fn start_game(state: &GameState) -> Result<GameState, DomainError> {
    if state.status != GameStatus::Waiting {
        return Err(DomainError::validation(
            ValidationKind::InvalidStatusTransition,
            format!("Game is {:?}", state.status),
        ));
    }
    if state.players.len() < 2 {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            "At least two players are needed to start",
        ));
    }
    let mut next = state.clone();
    next.set_status(GameStatus::Active)?;
    Ok(next)
}

fn require_not_drawn(state: &GameState) -> Result<(), DomainError> {
    if state.has_drawn {
        return Err(DomainError::validation(
            ValidationKind::AlreadyDrew,
            "Already drew this turn",
        ));
    }
    Ok(())
}

fn require_drawn(state: &GameState) -> Result<(), DomainError> {
    if !state.has_drawn {
        return Err(DomainError::validation(
            ValidationKind::MustDrawFirst,
            "Must draw first",
        ));
    }
    Ok(())
}

pub fn draw_from_deck<R: Rng + ?Sized>(
    state: &GameState,
    player_id: PlayerId,
    rng: &mut R,
) -> Result<GameState, DomainError> {
    require_active(state)?;
    let seat = require_turn(state, player_id)?;
    require_not_drawn(state)?;

    let out = draw_card(&state.deck, &state.discard_pile, rng);
    let Some(card) = out.card else {
        return Err(DomainError::validation(
            ValidationKind::NoCardsLeft,
            "No more cards",
        ));
    };

    let mut next = state.clone();
    next.players[seat].hand.push(card);
    next.deck = out.deck;
    next.discard_pile = out.discard_pile;
    next.has_drawn = true;
    Ok(next)
}

pub fn draw_from_discard(state: &GameState, player_id: PlayerId) -> Result<GameState, DomainError> {
    require_active(state)?;
    let seat = require_turn(state, player_id)?;
    require_not_drawn(state)?;

    let (card, discard_pile) = take_discard(&state.discard_pile);
    let Some(card) = card else {
        return Err(DomainError::validation(
            ValidationKind::DiscardPileEmpty,
            "Discard pile is empty",
        ));
    };

    let mut next = state.clone();
    next.players[seat].hand.push(card);
    next.discard_pile = discard_pile;
    next.has_drawn = true;
    Ok(next)
}

/// Resolve card ids against a hand, rejecting unknown or repeated ids.
fn resolve_groups(hand: &[Card], groups: &[Vec<CardId>]) -> Result<Vec<Vec<Card>>, DomainError> {
    let mut used = HashSet::new();
    groups
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|id| {
                    if !used.insert(*id) {
                        return Err(DomainError::validation(
                            ValidationKind::DuplicateCard,
                            format!("Card {id} used twice"),
                        ));
                    }
                    hand.iter().find(|c| c.id == *id).copied().ok_or_else(|| {
                        DomainError::validation(
                            ValidationKind::CardNotInHand,
                            format!("Card {id} not in hand"),
                        )
                    })
                })
                .collect()
        })
        .collect()
}

/// Lay down the groups completing the player's current phase.
pub fn lay_down_phase<R: Rng + ?Sized>(
    state: &GameState,
    player_id: PlayerId,
    groups: &[Vec<CardId>],
    rng: &mut R,
) -> Result<GameState, DomainError> {
    require_active(state)?;
    let seat = require_turn(state, player_id)?;
    require_drawn(state)?;

    let player = &state.players[seat];
    if player.has_laid_down {
        return Err(DomainError::validation(
            ValidationKind::AlreadyLaidDown,
            "Phase already laid down this round",
        ));
    }
    let target = phase(player.current_phase).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidPhase,
            format!("No phase {}", player.current_phase),
        )
    })?;

    let cards = resolve_groups(&player.hand, groups)?;
    if !validate_completion(target, &cards) {
        return Err(DomainError::validation(
            ValidationKind::PhaseNotMet,
            format!("Groups do not complete {}", target.name),
        ));
    }

    let used: HashSet<CardId> = groups.iter().flatten().copied().collect();
    let mut next = state.clone();
    let player = &mut next.players[seat];
    player.hand.retain(|c| !used.contains(&c.id));
    player.has_completed_phase = true;
    player.has_laid_down = true;
    let went_out = player.hand.is_empty();
    next.laid_down.push(LaidDownCards {
        player_id,
        groups: cards,
    });
    debug!(game_id = %next.id, player_id = %player_id, phase = target.number, "Phase laid down");

    if went_out {
        return finish_round(&next, rng);
    }
    Ok(next)
}

/// Discard a card from hand and pass the turn.
pub fn discard<R: Rng + ?Sized>(
    state: &GameState,
    player_id: PlayerId,
    card_id: CardId,
    rng: &mut R,
) -> Result<GameState, DomainError> {
    require_active(state)?;
    let seat = require_turn(state, player_id)?;
    require_drawn(state)?;

    let hand = &state.players[seat].hand;
    let pos = hand.iter().position(|c| c.id == card_id).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("Card {card_id} not in hand"),
        )
    })?;

    let mut next = state.clone();
    let card = next.players[seat].hand.remove(pos);
    next.discard_pile = next.discard_pile.with_top(card);
    next.has_drawn = false;

    let player = &next.players[seat];
    if player.hand.is_empty() && player.has_laid_down {
        debug!(game_id = %next.id, player_id = %player_id, "Player went out");
        return finish_round(&next, rng);
    }

    next.current_player_index = next_player_index(seat, next.players.len());
    Ok(next)
}
