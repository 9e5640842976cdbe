//! RNG seed derivation for deterministic game behavior.
//!
//! Every game carries one base seed. Each mutating action replays from a
//! seed derived from that base and the record version the action was
//! applied to, so the same history always produces the same shuffles.

/// Derive the seed for the initial deal of a game.
pub fn derive_setup_seed(game_seed: u64) -> u64 {
    game_seed.wrapping_add(1)
}

/// Derive the seed for an action applied on top of record `lock_version`.
///
/// Unique per (game, version). Offset from the setup seed so version 0
/// never reuses the dealing stream.
pub fn derive_action_seed(game_seed: u64, lock_version: i32) -> u64 {
    game_seed
        .wrapping_add((lock_version as u64).wrapping_mul(1_000_003))
        .wrapping_add(2)
}
