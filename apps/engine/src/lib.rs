#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod repos;
pub mod services;
pub mod utils;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::EngineConfig;
pub use domain::{Card, CardId, Color, Face, GameId, GameState, GameStatus, PlayerId, Rank};
pub use errors::{DomainError, ErrorCode};
pub use repos::{GameEvent, GameRecord, GameStore, InMemoryGameStore};
pub use services::{GameFlowMutationResult, GameFlowService};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
