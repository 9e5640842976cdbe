#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;

use engine::{EngineConfig, GameFlowService, InMemoryGameStore, PlayerId};

// Logging is auto-installed for every test binary that pulls in `common`
#[ctor::ctor]
fn init_logging() {
    test_support::logging::init();
}

pub type Service = GameFlowService<InMemoryGameStore>;

/// Service over a fresh in-memory store with a fixed seed source.
pub fn seeded_service(seed: u64) -> Service {
    let config = EngineConfig {
        rng_seed: Some(seed),
        ..EngineConfig::default()
    };
    GameFlowService::new(Arc::new(InMemoryGameStore::new()), config)
}

pub fn current_player(state: &engine::GameState) -> PlayerId {
    state
        .current_player()
        .map(|p| p.id)
        .expect("active game has a current player")
}
