use super::cards_parsing::try_parse_faces;
use super::cards_types::{Card, CardId, Face};
use super::deck::{Deck, DiscardPile};
use super::state::GameState;

/// Centralized helper for building cards from hardcoded face tokens in
/// tests and demo data.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded face tokens (e.g. `["R7", "B7", "W"]`) into cards
    /// with fresh ids.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        #[allow(clippy::expect_used)]
        let faces = try_parse_faces(tokens).expect("hardcoded valid face tokens");
        faces
            .into_iter()
            .map(|face| Card::new(CardId::new_v4(), face))
            .collect()
    }

    /// Give `seat` a hand of exactly `tokens`, taking the cards from that
    /// seat's hand and the draw pile. A face found only in another hand or
    /// the discard pile is swapped out for a draw pile card. Unused cards go
    /// back to the draw pile, so the game keeps every card it had. Returns
    /// the ids in token order.
    pub fn rig_hand(state: &mut GameState, seat: usize, tokens: &[&str]) -> Vec<CardId> {
        let mut pool = std::mem::take(&mut state.players[seat].hand);
        pool.extend_from_slice(state.deck.cards());

        #[allow(clippy::expect_used)]
        let faces = try_parse_faces(tokens).expect("hardcoded valid face tokens");
        let mut hand: Vec<Card> = Vec::with_capacity(faces.len());
        for face in faces {
            let card = take_face(state, seat, &mut pool, face);
            hand.push(card);
        }

        let ids = hand.iter().map(|c| c.id).collect();
        state.players[seat].hand = hand;
        state.deck = Deck::new(pool);
        ids
    }
}

fn take_face(state: &mut GameState, seat: usize, pool: &mut Vec<Card>, face: Face) -> Card {
    if let Some(pos) = pool.iter().position(|c| c.face == face) {
        return pool.remove(pos);
    }

    #[allow(clippy::expect_used)]
    let filler = pool.pop().expect("draw pile has a spare card");
    for (i, player) in state.players.iter_mut().enumerate() {
        if i == seat {
            continue;
        }
        if let Some(slot) = player.hand.iter_mut().find(|c| c.face == face) {
            return std::mem::replace(slot, filler);
        }
    }

    let mut discard = state.discard_pile.clone().into_cards();
    #[allow(clippy::expect_used)]
    let pos = discard
        .iter()
        .position(|c| c.face == face)
        .expect("face still in the game");
    let card = std::mem::replace(&mut discard[pos], filler);
    state.discard_pile = DiscardPile::new(discard);
    card
}
