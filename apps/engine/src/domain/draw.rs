//! Drawing cards, with reshuffle of the discard pile when the deck runs out.

use rand::Rng;
use tracing::debug;

use crate::domain::deck::{shuffle, Deck, DiscardPile};
use crate::domain::Card;

/// Result of a draw attempt. `card` is `None` when nothing could be drawn;
/// the piles are then returned unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    pub card: Option<Card>,
    pub deck: Deck,
    pub discard_pile: DiscardPile,
}

/// Draw the top card of `deck`.
///
/// With an empty deck the discard pile minus its exposed top card is
/// shuffled into a new deck and the pile keeps only that top card. With an
/// empty deck and at most one discarded card no card is drawn.
pub fn draw_card<R: Rng + ?Sized>(
    deck: &Deck,
    discard_pile: &DiscardPile,
    rng: &mut R,
) -> DrawOutcome {
    let mut cards = deck.cards().to_vec();
    let mut discard = discard_pile.cards().to_vec();

    if cards.is_empty() {
        // The exposed card stays put, so a pile of one cannot feed the deck.
        let top = match discard.pop() {
            Some(top) if !discard.is_empty() => top,
            _ => {
                return DrawOutcome {
                    card: None,
                    deck: deck.clone(),
                    discard_pile: discard_pile.clone(),
                }
            }
        };
        debug!(reshuffled = discard.len(), "Reshuffling discard pile into deck");
        cards = shuffle(&discard, rng);
        discard = vec![top];
    }

    let card = cards.pop();
    DrawOutcome {
        card,
        deck: Deck::new(cards),
        discard_pile: DiscardPile::new(discard),
    }
}

/// Take the exposed card off the discard pile.
pub fn take_discard(discard_pile: &DiscardPile) -> (Option<Card>, DiscardPile) {
    let mut cards = discard_pile.cards().to_vec();
    let card = cards.pop();
    (card, DiscardPile::new(cards))
}
