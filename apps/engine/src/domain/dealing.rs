//! Dealing starting hands from the front of a deck.

use crate::domain::deck::Deck;
use crate::domain::rules::HAND_SIZE;
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// Hands dealt in player order plus what is left of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealt {
    pub hands: Vec<Vec<Card>>,
    pub remaining: Deck,
}

/// Deal [`HAND_SIZE`] cards to each of `player_count` players.
///
/// Cards come off the front of the deck (the end opposite the draw end),
/// player 0 first. The input deck is not modified.
///
/// Fails instead of dealing short hands when the deck is too small.
pub fn deal(deck: &Deck, player_count: usize) -> Result<Dealt, DomainError> {
    let needed = match player_count.checked_mul(HAND_SIZE) {
        Some(needed) if needed <= deck.len() => needed,
        _ => {
            return Err(DomainError::validation(
                ValidationKind::InsufficientCards,
                format!(
                    "Dealing {player_count} hands of {HAND_SIZE} needs more than the {} cards in the deck",
                    deck.len()
                ),
            ))
        }
    };

    let cards = deck.cards();
    let hands = cards[..needed]
        .chunks(HAND_SIZE)
        .map(<[Card]>::to_vec)
        .collect();
    let remaining = Deck::new(cards[needed..].to_vec());

    Ok(Dealt { hands, remaining })
}
