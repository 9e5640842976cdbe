//! End-of-round scoring, phase advancement and the next deal.

use rand::Rng;
use tracing::info;

use crate::domain::dealing::deal;
use crate::domain::deck::{shuffle, Deck, DiscardPile};
use crate::domain::rules::PHASE_COUNT;
use crate::domain::scoring::score_hand;
use crate::domain::state::{next_player_index, require_active, GameState, GameStatus, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

/// Add each player's hand penalty to their score and advance everyone who
/// laid down by one phase.
pub fn apply_round_scoring(state: &GameState) -> GameState {
    let mut next = state.clone();
    for player in &mut next.players {
        player.score += score_hand(&player.hand);
        if player.has_laid_down {
            player.current_phase = (player.current_phase + 1).min(PHASE_COUNT + 1);
        }
    }
    next
}

/// Winner once somebody has finished the last phase: lowest score among
/// those players, earliest seat on ties.
pub fn determine_winner(state: &GameState) -> Option<PlayerId> {
    state
        .players
        .iter()
        .filter(|p| p.current_phase > PHASE_COUNT)
        .min_by_key(|p| p.score)
        .map(|p| p.id)
}

/// Deal a fresh round. Every card in the game (hands, piles and laid-down
/// groups) is gathered and reshuffled, keeping its identity. The opening
/// seat rotates one to the left.
pub fn start_next_round<R: Rng + ?Sized>(
    state: &GameState,
    rng: &mut R,
) -> Result<GameState, DomainError> {
    require_active(state)?;

    let deck = Deck::new(shuffle(&state.all_cards(), rng));
    let dealt = deal(&deck, state.players.len())?;
    let mut remaining = dealt.remaining.into_cards();
    let seed_card = remaining.pop().ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InsufficientCards,
            "No card left to seed the discard pile",
        )
    })?;

    let mut next = state.clone();
    for (player, hand) in next.players.iter_mut().zip(dealt.hands) {
        player.hand = hand;
        player.has_completed_phase = false;
        player.has_laid_down = false;
    }
    next.deck = Deck::new(remaining);
    next.discard_pile = DiscardPile::new(vec![seed_card]);
    next.round_no += 1;
    next.round_starter_index = next_player_index(state.round_starter_index, state.players.len());
    next.current_player_index = next.round_starter_index;
    next.has_drawn = false;
    next.laid_down.clear();
    Ok(next)
}

/// Close the current round: score it, then either complete the game or deal
/// the next round.
pub fn finish_round<R: Rng + ?Sized>(
    state: &GameState,
    rng: &mut R,
) -> Result<GameState, DomainError> {
    require_active(state)?;
    let mut scored = apply_round_scoring(state);

    if let Some(winner) = determine_winner(&scored) {
        scored.set_status(GameStatus::Completed)?;
        scored.winner = Some(winner);
        scored.has_drawn = false;
        info!(game_id = %scored.id, round_no = scored.round_no, winner = %winner, "Game completed");
        return Ok(scored);
    }

    info!(game_id = %scored.id, round_no = scored.round_no, "Round finished");
    start_next_round(&scored, rng)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::domain::fixtures::CardFixtures;
    use crate::domain::{Card, CardId, LaidDownCards};
    use crate::domain::rules::{DECK_SIZE, HAND_SIZE};
    use crate::domain::setup::initialize_game;

    fn game(names: &[&str]) -> (GameState, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let state = initialize_game(names, &mut rng).unwrap();
        (state, rng)
    }

    #[test]
    fn scoring_adds_penalties_and_advances_laid_down_players() {
        let (mut state, _) = game(&["A", "B"]);
        state.players[0].hand = Vec::new();
        state.players[0].has_completed_phase = true;
        state.players[0].has_laid_down = true;
        state.players[1].hand = CardFixtures::parse_hardcoded(&["W", "R10", "B2"]);

        let scored = apply_round_scoring(&state);
        assert_eq!(scored.players[0].score, 0);
        assert_eq!(scored.players[0].current_phase, 2);
        assert_eq!(scored.players[1].score, 40);
        assert_eq!(scored.players[1].current_phase, 1);
        // input untouched
        assert_eq!(state.players[1].score, 0);
    }

    #[test]
    fn next_round_redeals_and_rotates_starter() {
        let (mut state, mut rng) = game(&["A", "B", "C"]);
        state.players[1].has_laid_down = true;
        state.players[1].has_completed_phase = true;
        state.current_player_index = 2;
        state.has_drawn = true;

        let next = finish_round(&state, &mut rng).unwrap();
        assert_eq!(next.round_no, 2);
        assert_eq!(next.round_starter_index, 1);
        assert_eq!(next.current_player_index, 1);
        assert!(!next.has_drawn);
        assert!(next.laid_down.is_empty());
        assert_eq!(next.players[1].current_phase, 2);
        for p in &next.players {
            assert_eq!(p.hand.len(), HAND_SIZE);
            assert!(!p.has_laid_down && !p.has_completed_phase);
        }
        assert_eq!(next.all_cards().len(), DECK_SIZE);
        assert_eq!(next.status, GameStatus::Active);
    }

    #[test]
    fn card_identities_survive_a_new_round() {
        let (mut state, mut rng) = game(&["A", "B"]);
        let a = state.players[0].id;
        // Player A has laid down phase 1 and holds nothing.
        CardFixtures::rig_hand(&mut state, 0, &["R4", "B4", "G4", "Y9", "R9", "W"]);
        state.players[0].has_laid_down = true;
        let laid: Vec<Card> = state.players[0].hand.drain(..).collect();
        state.laid_down.push(LaidDownCards {
            player_id: a,
            groups: vec![laid[..3].to_vec(), laid[3..].to_vec()],
        });
        state.discard_pile = state.discard_pile.with_top(state.players[1].hand.remove(0));

        let before: HashSet<CardId> = state.all_cards().iter().map(|c| c.id).collect();
        assert_eq!(before.len(), DECK_SIZE);

        let next = finish_round(&state, &mut rng).unwrap();
        assert_eq!(next.round_no, 2);
        let after: HashSet<CardId> = next.all_cards().iter().map(|c| c.id).collect();
        assert_eq!(after, before);
        assert_eq!(next.all_cards().len(), DECK_SIZE);
    }

    #[test]
    fn finishing_phase_ten_completes_game() {
        let (mut state, mut rng) = game(&["A", "B", "C"]);
        for i in [0, 2] {
            state.players[i].current_phase = PHASE_COUNT;
            state.players[i].has_laid_down = true;
            state.players[i].has_completed_phase = true;
        }
        state.players[0].score = 120;
        state.players[2].score = 80;
        state.players[1].score = 0;
        state.players[0].hand.clear();
        state.players[2].hand = CardFixtures::parse_hardcoded(&["R3"]);

        let done = finish_round(&state, &mut rng).unwrap();
        assert_eq!(done.status, GameStatus::Completed);
        // 80 + 5 beats 120; the low-scoring player B never finished phase 10
        assert_eq!(done.winner, Some(state.players[2].id));
        assert_eq!(done.round_no, state.round_no);
    }

    #[test]
    fn completed_games_do_not_deal() {
        let (mut state, mut rng) = game(&["A"]);
        state.status = GameStatus::Completed;
        let err = start_next_round(&state, &mut rng).unwrap_err();
        assert_eq!(err.validation_kind(), Some(&ValidationKind::GameNotActive));
    }
}
