//! Property tests for building, shuffling, dealing and drawing.
//!
//! Properties tested:
//! - Shuffle is a permutation
//! - Dealing gives disjoint full hands and keeps every card
//! - Drawing never loses or duplicates a card, reshuffle included

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{DECK_SIZE, HAND_SIZE, MAX_PLAYERS};
use crate::domain::{build_deck, deal, draw_card, shuffle, test_prelude, CardId, Deck, DiscardPile};

fn ids<'a>(cards: impl IntoIterator<Item = &'a crate::domain::Card>) -> Vec<CardId> {
    let mut v: Vec<CardId> = cards.into_iter().map(|c| c.id).collect();
    v.sort();
    v
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = build_deck(&mut rng);
        let shuffled = shuffle(deck.cards(), &mut rng);
        prop_assert_eq!(ids(deck.cards()), ids(&shuffled));
    }

    #[test]
    fn prop_deal_is_disjoint_and_complete(seed in any::<u64>(), players in 1usize..=MAX_PLAYERS) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = build_deck(&mut rng);
        let dealt = deal(&deck, players).unwrap();

        prop_assert_eq!(dealt.hands.len(), players);
        prop_assert!(dealt.hands.iter().all(|h| h.len() == HAND_SIZE));
        prop_assert_eq!(dealt.remaining.len(), DECK_SIZE - players * HAND_SIZE);

        let mut seen = HashSet::new();
        for card in dealt.hands.iter().flatten().chain(dealt.remaining.cards()) {
            prop_assert!(seen.insert(card.id));
        }
        prop_assert_eq!(seen.len(), DECK_SIZE);
    }

    #[test]
    fn prop_draw_conserves_cards(seed in any::<u64>(), split in 0usize..DECK_SIZE, draws in 1usize..40) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let all = build_deck(&mut rng).into_cards();
        let expected = ids(&all);

        let mut deck = Deck::new(all[..split].to_vec());
        let mut pile = DiscardPile::new(all[split..].to_vec());
        let mut hand = Vec::new();
        for _ in 0..draws {
            let out = draw_card(&deck, &pile, &mut rng);
            if let Some(card) = out.card {
                hand.push(card);
            }
            deck = out.deck;
            pile = out.discard_pile;
        }
        let everything: Vec<_> = hand.iter().chain(deck.cards()).chain(pile.cards()).collect();
        prop_assert_eq!(ids(everything.into_iter()), expected);
        prop_assert!(!pile.is_empty());
    }
}
