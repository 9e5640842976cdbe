//! Multi-turn scenarios driven through the public action functions.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::fixtures::CardFixtures;
use crate::domain::rules::{DECK_SIZE, HAND_SIZE, PHASE_COUNT};
use crate::domain::{
    discard, draw_from_deck, draw_from_discard, initialize_game, lay_down_phase, GameState,
    GameStatus,
};

fn assert_conserved(state: &GameState) {
    let cards = state.all_cards();
    assert_eq!(cards.len(), DECK_SIZE);
    let unique: HashSet<_> = cards.iter().map(|c| c.id).collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

/// Everyone draws and throws their first card back; nobody lays down.
fn play_plain_turn(state: &GameState, rng: &mut ChaCha8Rng, from_discard: bool) -> GameState {
    let pid = state.current_player().map(|p| p.id).unwrap();
    let drawn = if from_discard {
        draw_from_discard(state, pid).unwrap()
    } else {
        draw_from_deck(state, pid, rng).unwrap()
    };
    let card = drawn.current_player().unwrap().hand[0].id;
    discard(&drawn, pid, card, rng).unwrap()
}

#[test]
fn long_game_keeps_every_card_through_reshuffles() {
    let mut rng = ChaCha8Rng::seed_from_u64(404);
    let mut state = initialize_game(&["Ann", "Ben", "Cat", "Dan"], &mut rng).unwrap();
    assert_conserved(&state);

    // 4 players leave 67 in the deck; 150 draws forces at least one reshuffle.
    for turn in 0..150 {
        let seat = state.current_player_index;
        state = play_plain_turn(&state, &mut rng, turn % 5 == 4);
        assert_eq!(state.current_player_index, (seat + 1) % 4);
        assert!(state.players.iter().all(|p| p.hand.len() == HAND_SIZE));
        assert_conserved(&state);
    }
    assert_eq!(state.round_no, 1);
    assert_eq!(state.status, GameStatus::Active);
}

#[test]
fn round_completes_and_only_the_finisher_advances() {
    let mut rng = ChaCha8Rng::seed_from_u64(505);
    let mut state = initialize_game(&["Ann", "Ben"], &mut rng).unwrap();
    let ann = state.players[0].id;

    let ids = CardFixtures::rig_hand(&mut state, 0, &["R4", "B4", "G4", "Y9", "R9", "W", "G1"]);
    let groups = vec![ids[..3].to_vec(), ids[3..6].to_vec()];
    let last = ids[6];
    state.has_drawn = true;
    let before: HashSet<_> = state.all_cards().iter().map(|c| c.id).collect();

    let laid = lay_down_phase(&state, ann, &groups, &mut rng).unwrap();
    let penalty_b = crate::domain::score_hand(&laid.players[1].hand);
    let next = discard(&laid, ann, last, &mut rng).unwrap();

    assert_eq!(next.round_no, 2);
    assert_eq!(next.players[0].current_phase, 2);
    assert_eq!(next.players[1].current_phase, 1);
    assert_eq!(next.players[1].score, penalty_b);
    assert_eq!(next.current_player_index, 1);
    assert_conserved(&next);
    let after: HashSet<_> = next.all_cards().iter().map(|c| c.id).collect();
    assert_eq!(after, before);
}

#[test]
fn final_phase_ends_the_game() {
    let mut rng = ChaCha8Rng::seed_from_u64(606);
    let mut state = initialize_game(&["Ann", "Ben"], &mut rng).unwrap();
    let ann = state.players[0].id;
    state.players[0].current_phase = PHASE_COUNT;
    state.players[0].score = 90;
    state.players[1].score = 10;

    // Phase 10: set of 5 then set of 3
    let ids = CardFixtures::rig_hand(
        &mut state,
        0,
        &["R8", "B8", "G8", "Y8", "W", "R2", "B2", "W", "Y12"],
    );
    let groups = vec![ids[..5].to_vec(), ids[5..8].to_vec()];
    let last = ids[8];
    state.has_drawn = true;

    let laid = lay_down_phase(&state, ann, &groups, &mut rng).unwrap();
    let done = discard(&laid, ann, last, &mut rng).unwrap();

    assert_eq!(done.status, GameStatus::Completed);
    // Ben's lower score does not count without finishing phase 10.
    assert_eq!(done.winner, Some(ann));
    assert_eq!(done.players[0].current_phase, PHASE_COUNT + 1);

    let err = draw_from_deck(&done, ann, &mut rng).unwrap_err();
    assert_eq!(
        err.validation_kind(),
        Some(&crate::errors::domain::ValidationKind::GameNotActive)
    );
}
