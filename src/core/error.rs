//! Error taxonomy.
//!
//! Gameplay errors (`GameError`) are never returned through `Result`: a
//! rejected `roll` or `move` reports `false` and the cause is kept on the
//! game for inspection. Only building a game from a malformed snapshot
//! fails with `Err(SnapshotError)`.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error;

/// The reason an action was rejected.
///
/// Variants are listed in the order the move validation gate checks them,
/// after the turn and phase checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    NotPlayersTurn,
    WrongPhase,
    PointNotFound,
    EmptyPoint,
    EmptyBar,
    PointOwnership,
    Blocked,
    WrongDirection,
    PiecesOnBar,
    BearOff,
    DiceMismatch,
}

impl ErrorKind {
    /// Every kind, in precedence order.
    pub const ALL: [ErrorKind; 11] = [
        ErrorKind::NotPlayersTurn,
        ErrorKind::WrongPhase,
        ErrorKind::PointNotFound,
        ErrorKind::EmptyPoint,
        ErrorKind::EmptyBar,
        ErrorKind::PointOwnership,
        ErrorKind::Blocked,
        ErrorKind::WrongDirection,
        ErrorKind::PiecesOnBar,
        ErrorKind::BearOff,
        ErrorKind::DiceMismatch,
    ];

    /// Human readable message used when no override is configured.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            ErrorKind::NotPlayersTurn => "It is not the player's turn yet.",
            ErrorKind::WrongPhase => "It is the wrong phase.",
            ErrorKind::PointNotFound => "Point cannot be found.",
            ErrorKind::EmptyPoint => "Point is empty.",
            ErrorKind::EmptyBar => "No pieces owned by player on bar.",
            ErrorKind::PointOwnership => "Point is not owned by player.",
            ErrorKind::Blocked => "Point blocked by opponent.",
            ErrorKind::WrongDirection => "A piece cannot move backwards.",
            ErrorKind::PiecesOnBar => "There are still pieces on the bar.",
            ErrorKind::BearOff => "Cannot bear off while pieces are not home.",
            ErrorKind::DiceMismatch => "Move does not match dice rolls.",
        }
    }
}

/// A rejected action: its kind plus the message shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GameError {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl GameError {
    /// Create an error carrying the kind's default message.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: Cow::Borrowed(kind.default_message()),
        }
    }

    /// Create an error with a custom message.
    #[must_use]
    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Cow::Owned(message.into()),
        }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The message shown to the player.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ErrorKind> for GameError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// A snapshot that does not describe a playable game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("invalid current player number {0}")]
    InvalidPlayer(u8),
    #[error("piece owner {0} is not a player")]
    InvalidOwner(u8),
    #[error("die value {0} is outside 1..=6")]
    InvalidDieNumber(u8),
    #[error("expected 2 or 4 dice, found {0}")]
    InvalidDiceCount(usize),
    #[error("point number {0} is outside 1..=24")]
    InvalidPointNumber(u8),
    #[error("point number {0} appears more than once")]
    DuplicatePoint(u8),
    #[error("point number {0} holds pieces of both players")]
    MixedOwners(u8),
}
