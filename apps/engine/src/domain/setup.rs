//! Game setup: building, dealing and seeding a fresh game.

use rand::Rng;
use time::OffsetDateTime;
use tracing::debug;

use crate::domain::deck::{build_deck, Deck, DiscardPile};
use crate::domain::dealing::deal;
use crate::domain::rules::MAX_PLAYERS;
use crate::domain::state::{GameId, GameState, GameStatus, Player, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::utils::join_code::generate_share_code;

pub(crate) fn validate_player_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerName,
            "Player name is required",
        ));
    }
    Ok(())
}

/// Start a game for `player_names` (turn order = list order), stamped with
/// the current time.
pub fn initialize_game<S, R>(player_names: &[S], rng: &mut R) -> Result<GameState, DomainError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    initialize_game_at(player_names, rng, OffsetDateTime::now_utc())
}

/// Same as [`initialize_game`] with an explicit creation timestamp.
pub fn initialize_game_at<S, R>(
    player_names: &[S],
    rng: &mut R,
    created_at: OffsetDateTime,
) -> Result<GameState, DomainError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if player_names.is_empty() || player_names.len() > MAX_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!(
                "Player count must be 1..={MAX_PLAYERS}, got {}",
                player_names.len()
            ),
        ));
    }
    for name in player_names {
        validate_player_name(name.as_ref())?;
    }

    let deck = build_deck(rng);
    let dealt = deal(&deck, player_names.len())?;

    let mut remaining = dealt.remaining.into_cards();
    let seed_card = remaining.pop().ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InsufficientCards,
            "No card left to seed the discard pile",
        )
    })?;

    let players = player_names
        .iter()
        .zip(dealt.hands)
        .map(|(name, hand)| Player::new(PlayerId::random(rng), name.as_ref(), hand))
        .collect();

    let state = GameState {
        id: GameId::random(rng),
        players,
        deck: Deck::new(remaining),
        discard_pile: DiscardPile::new(vec![seed_card]),
        current_player_index: 0,
        round_starter_index: 0,
        round_no: 1,
        status: GameStatus::Active,
        winner: None,
        created_at,
        share_code: generate_share_code(rng),
        has_drawn: false,
        laid_down: Vec::new(),
    };
    debug!(
        game_id = %state.id,
        players = state.players.len(),
        deck = state.deck.len(),
        "Initialized game"
    );
    Ok(state)
}
