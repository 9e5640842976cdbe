//! Deck construction and shuffling.
//!
//! A [`Deck`] is a stack whose top (next card to draw) is the LAST element.
//! Dealing takes from the front. A [`DiscardPile`] exposes its last element.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::rules::{COPIES_PER_NUMBER, DECK_SIZE, SKIP_COUNT, WILD_COUNT};
use crate::domain::{Card, CardId, Color, Face, Rank};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck(Vec<Card>);

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The card the next draw would return.
    pub fn top(&self) -> Option<&Card> {
        self.0.last()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.0
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscardPile(Vec<Card>);

impl DiscardPile {
    pub fn new(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The exposed card, available to draw.
    pub fn top(&self) -> Option<&Card> {
        self.0.last()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.0
    }

    /// New pile with `card` placed on top.
    pub fn with_top(&self, card: Card) -> Self {
        let mut cards = self.0.clone();
        cards.push(card);
        Self(cards)
    }
}

impl From<Vec<Card>> for DiscardPile {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

/// The canonical multiset in build order, each card with a fresh id drawn
/// from `rng`.
pub fn canonical_cards<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for _ in 0..COPIES_PER_NUMBER {
        for color in Color::ALL {
            for rank in Rank::all() {
                cards.push(Card::new(
                    CardId::from_random_bytes(rng.random()),
                    Face::Number { rank, color },
                ));
            }
        }
    }
    for _ in 0..WILD_COUNT {
        cards.push(Card::new(CardId::from_random_bytes(rng.random()), Face::Wild));
    }
    for _ in 0..SKIP_COUNT {
        cards.push(Card::new(CardId::from_random_bytes(rng.random()), Face::Skip));
    }
    cards
}

/// Fisher-Yates shuffle over a copy of `cards`.
pub fn shuffle<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Build the full deck with fresh ids and shuffle it.
pub fn build_deck<R: Rng + ?Sized>(rng: &mut R) -> Deck {
    let cards = canonical_cards(rng);
    Deck(shuffle(&cards, rng))
}
