//! Core card-related types: Card, CardId, Face, Rank, Color

use std::fmt;

use uuid::Uuid;

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];
}

/// Numeric rank, always within `1..=12`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(u8);

impl Rank {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 12;

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Rank must be {}..={}, got {value}", Self::MIN, Self::MAX),
            ))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// All twelve ranks in ascending order.
    pub fn all() -> impl Iterator<Item = Rank> {
        (Self::MIN..=Self::MAX).map(Rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What is printed on a card. Only numbered cards carry a color.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Face {
    Number { rank: Rank, color: Color },
    Wild,
    Skip,
}

impl Face {
    pub fn number(rank: Rank, color: Color) -> Self {
        Face::Number { rank, color }
    }

    pub fn rank(self) -> Option<Rank> {
        match self {
            Face::Number { rank, .. } => Some(rank),
            Face::Wild | Face::Skip => None,
        }
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Face::Number { color, .. } => Some(color),
            Face::Wild | Face::Skip => None,
        }
    }

    pub fn is_wild(self) -> bool {
        matches!(self, Face::Wild)
    }

    pub fn is_skip(self) -> bool {
        matches!(self, Face::Skip)
    }
}

/// Stable identity of a physical card for the life of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CardId(pub Uuid);

impl CardId {
    pub fn new_v4() -> Self {
        CardId(Uuid::new_v4())
    }

    /// Build an id from caller-supplied random bytes so seeded decks get
    /// reproducible identities.
    pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
        CardId(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub id: CardId,
    pub face: Face,
}

impl Card {
    pub fn new(id: CardId, face: Face) -> Self {
        Self { id, face }
    }

    pub fn rank(&self) -> Option<Rank> {
        self.face.rank()
    }

    pub fn color(&self) -> Option<Color> {
        self.face.color()
    }

    pub fn is_wild(&self) -> bool {
        self.face.is_wild()
    }

    pub fn is_skip(&self) -> bool {
        self.face.is_skip()
    }
}
