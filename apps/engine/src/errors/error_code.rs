//! Stable error codes handed to collaborators.
//!
//! The store layer and any request handler surface these strings to
//! players; add new codes here and never pass ad-hoc strings.

use core::fmt;

use super::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};

/// Centralized error codes for the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Setup
    InvalidPlayerCount,
    InvalidPlayerName,
    InsufficientCards,
    GameFull,
    InvalidShareCode,

    // Turn actions
    OutOfTurn,
    AlreadyDrew,
    MustDrawFirst,
    NoCardsLeft,
    DiscardPileEmpty,
    CardNotInHand,
    DuplicateCard,
    AlreadyLaidDown,
    /// Proposed groups do not satisfy the player's phase
    PhaseNotMet,
    InvalidPhase,
    GameNotActive,
    InvalidStatusTransition,
    ParseCard,
    ValidationError,

    // Resource Not Found
    GameNotFound,
    PlayerNotFound,
    NotFound,

    // Conflicts
    OptimisticLock,
    JoinCodeConflict,
    GameExists,
    Conflict,

    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::InsufficientCards => "INSUFFICIENT_CARDS",
            Self::GameFull => "GAME_FULL",
            Self::InvalidShareCode => "INVALID_SHARE_CODE",

            Self::OutOfTurn => "OUT_OF_TURN",
            Self::AlreadyDrew => "ALREADY_DREW",
            Self::MustDrawFirst => "MUST_DRAW_FIRST",
            Self::NoCardsLeft => "NO_CARDS_LEFT",
            Self::DiscardPileEmpty => "DISCARD_PILE_EMPTY",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::DuplicateCard => "DUPLICATE_CARD",
            Self::AlreadyLaidDown => "ALREADY_LAID_DOWN",
            Self::PhaseNotMet => "PHASE_NOT_MET",
            Self::InvalidPhase => "INVALID_PHASE",
            Self::GameNotActive => "GAME_NOT_ACTIVE",
            Self::InvalidStatusTransition => "INVALID_STATUS_TRANSITION",
            Self::ParseCard => "PARSE_CARD",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::JoinCodeConflict => "JOIN_CODE_CONFLICT",
            Self::GameExists => "GAME_EXISTS",
            Self::Conflict => "CONFLICT",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::InvalidPlayerCount => Self::InvalidPlayerCount,
                ValidationKind::InvalidPlayerName => Self::InvalidPlayerName,
                ValidationKind::InsufficientCards => Self::InsufficientCards,
                ValidationKind::GameFull => Self::GameFull,
                ValidationKind::InvalidShareCode => Self::InvalidShareCode,
                ValidationKind::OutOfTurn => Self::OutOfTurn,
                ValidationKind::AlreadyDrew => Self::AlreadyDrew,
                ValidationKind::MustDrawFirst => Self::MustDrawFirst,
                ValidationKind::NoCardsLeft => Self::NoCardsLeft,
                ValidationKind::DiscardPileEmpty => Self::DiscardPileEmpty,
                ValidationKind::CardNotInHand => Self::CardNotInHand,
                ValidationKind::DuplicateCard => Self::DuplicateCard,
                ValidationKind::AlreadyLaidDown => Self::AlreadyLaidDown,
                ValidationKind::PhaseNotMet => Self::PhaseNotMet,
                ValidationKind::InvalidPhase => Self::InvalidPhase,
                ValidationKind::GameNotActive => Self::GameNotActive,
                ValidationKind::InvalidStatusTransition => Self::InvalidStatusTransition,
                ValidationKind::ParseCard => Self::ParseCard,
                ValidationKind::Other(_) => Self::ValidationError,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::OptimisticLock => Self::OptimisticLock,
                ConflictKind::JoinCodeConflict => Self::JoinCodeConflict,
                ConflictKind::GameExists => Self::GameExists,
                ConflictKind::Other(_) => Self::Conflict,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Game => Self::GameNotFound,
                NotFoundKind::Player => Self::PlayerNotFound,
                NotFoundKind::Other(_) => Self::NotFound,
            },
            DomainError::Config(_) => Self::ConfigError,
        }
    }
}
