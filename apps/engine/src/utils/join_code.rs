//! Share code generation for games.
//!
//! Share codes are 6 uppercase base-36 characters (`0-9A-Z`). Uniqueness is
//! enforced by the store, which rejects a duplicate with
//! `ConflictKind::JoinCodeConflict`.

use rand::Rng;

const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SHARE_CODE_LEN: usize = 6;

/// Generate a share code from `rng`.
pub fn generate_share_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SHARE_CODE_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

/// Canonical form of a code typed by a player: trimmed and uppercased.
pub fn normalize_share_code(input: &str) -> String {
    input.trim().to_ascii_uppercase()
}

pub fn is_valid_share_code(code: &str) -> bool {
    code.len() == SHARE_CODE_LEN && code.bytes().all(|b| BASE36.contains(&b))
}
