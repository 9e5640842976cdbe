//! Test support utilities shared by the engine's integration tests.
//!
//! Provides unified test logging initialization and ULID-based unique
//! names so parallel tests never collide on player names or share codes.

pub mod logging;

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use test_support::unique_str;
///
/// let id1 = unique_str("player");
/// let id2 = unique_str("player");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("player-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate `count` unique player names sharing a prefix.
pub fn unique_player_names(prefix: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| unique_str(&format!("{prefix}{i}")))
        .collect()
}
