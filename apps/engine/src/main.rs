use std::sync::Arc;

use engine::config::EngineConfig;
use engine::repos::InMemoryGameStore;
use engine::services::GameFlowService;
use tracing::info;

mod telemetry;

fn main() {
    telemetry::init_tracing();

    // PHASE10_MAX_PLAYERS / PHASE10_RNG_SEED come from the environment.
    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let mut names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        names = vec!["Player 1".to_string(), "Player 2".to_string()];
    }

    let service = GameFlowService::new(Arc::new(InMemoryGameStore::new()), config);
    let record = match service.create_game(&names) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("❌ Failed to create game: {e}");
            std::process::exit(1);
        }
    };
    info!(game_id = %record.id(), deck = record.state.deck.len(), "Dealt new game");

    match serde_json::to_string_pretty(&record.state) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("❌ Failed to serialize game: {e}");
            std::process::exit(1);
        }
    }
}
