//! Domain layer: pure game logic types and helpers.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod deck;
pub mod draw;
pub mod fixtures;
pub mod game_transition;
pub mod player_actions;
pub mod round_lifecycle;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod setup;
pub mod state;
pub mod validation;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_integration;
#[cfg(test)]
mod tests_props_deck;
#[cfg(test)]
mod tests_props_validation;

// Re-exports for ergonomics
pub use cards_types::{Card, CardId, Color, Face, Rank};
pub use dealing::{deal, Dealt};
pub use deck::{build_deck, shuffle, Deck, DiscardPile};
pub use draw::{draw_card, DrawOutcome};
pub use game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
pub use player_actions::{
    discard, draw_from_deck, draw_from_discard, join_game, lay_down_phase, start_game,
};
pub use round_lifecycle::{apply_round_scoring, determine_winner, finish_round, start_next_round};
pub use rules::{phase, Phase, PhaseRequirement, RequirementKind, PHASES};
pub use scoring::score_hand;
pub use seed_derivation::{derive_action_seed, derive_setup_seed};
pub use setup::{initialize_game, initialize_game_at};
pub use state::{GameId, GameState, GameStatus, LaidDownCards, Player, PlayerId};
pub use validation::{
    can_extend, is_valid_color, is_valid_group, is_valid_run, is_valid_set, validate_completion,
};
