//! Card face parsing from compact tokens (e.g., "R7", "B12", "W", "S")
//!
//! The first character is the color (`R`, `B`, `G`, `Y`) followed by the
//! rank `1..=12`; `W` is a wild card and `S` a skip card.

use std::str::FromStr;

use super::cards_types::{Color, Face, Rank};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_error(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl FromStr for Face {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" => return Ok(Face::Wild),
            "S" => return Ok(Face::Skip),
            _ => {}
        }
        let mut chars = s.chars();
        let color = match chars.next() {
            Some('R') => Color::Red,
            Some('B') => Color::Blue,
            Some('G') => Color::Green,
            Some('Y') => Color::Yellow,
            _ => return Err(parse_error(s)),
        };
        let rank_str = chars.as_str();
        if rank_str.is_empty() || !rank_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(parse_error(s));
        }
        let n: u8 = rank_str.parse().map_err(|_| parse_error(s))?;
        let rank = Rank::new(n).map_err(|_| parse_error(s))?;
        Ok(Face::Number { rank, color })
    }
}

/// Non-panicking helper to parse face tokens.
pub fn try_parse_faces<I, S>(tokens: I) -> Result<Vec<Face>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Face>())
        .collect()
}
