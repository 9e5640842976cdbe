//! Game storage: the store contract and its in-memory implementation.

pub mod games;
pub mod memory;

pub use games::{GameEvent, GameRecord, GameStore};
pub use memory::InMemoryGameStore;
