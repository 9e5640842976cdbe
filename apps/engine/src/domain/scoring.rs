use crate::domain::rules::{HIGH_CARD_PENALTY, LOW_CARD_PENALTY, SKIP_PENALTY, WILD_PENALTY};
use crate::domain::{Card, Face};

/// Penalty for a single card left in hand.
pub fn card_penalty(card: &Card) -> u32 {
    match card.face {
        Face::Wild => WILD_PENALTY,
        Face::Skip => SKIP_PENALTY,
        Face::Number { rank, .. } if rank.value() >= 10 => HIGH_CARD_PENALTY,
        Face::Number { .. } => LOW_CARD_PENALTY,
    }
}

/// Penalty points for the cards left in a hand. Lower is better.
pub fn score_hand(hand: &[Card]) -> u32 {
    hand.iter().map(card_penalty).sum()
}
