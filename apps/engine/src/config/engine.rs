use std::env;
use std::str::FromStr;

use crate::domain::rules::MAX_PLAYERS;
use crate::errors::domain::DomainError;

pub const MAX_PLAYERS_VAR: &str = "PHASE10_MAX_PLAYERS";
pub const RNG_SEED_VAR: &str = "PHASE10_RNG_SEED";

/// Runtime knobs for the game service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Seat limit for new games, never above the rules maximum.
    pub max_players: usize,
    /// Fixed base seed for every new game; random per game when unset.
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_players: MAX_PLAYERS,
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    /// Read configuration from the environment, falling back to defaults for
    /// unset variables.
    pub fn from_env() -> Result<Self, DomainError> {
        let max_players = optional_var::<usize>(MAX_PLAYERS_VAR)?.unwrap_or(MAX_PLAYERS);
        if !(1..=MAX_PLAYERS).contains(&max_players) {
            return Err(DomainError::config(format!(
                "{MAX_PLAYERS_VAR} must be between 1 and {MAX_PLAYERS}, got {max_players}"
            )));
        }
        let rng_seed = optional_var::<u64>(RNG_SEED_VAR)?;
        Ok(Self {
            max_players,
            rng_seed,
        })
    }
}

/// Parse an environment variable if present; a present but malformed value
/// is an error.
fn optional_var<T: FromStr>(name: &str) -> Result<Option<T>, DomainError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            DomainError::config(format!(
                "Environment variable '{name}' has invalid value '{raw}'"
            ))
        }),
        Err(_) => Ok(None),
    }
}
