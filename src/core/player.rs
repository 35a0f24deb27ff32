//! Player identification.
//!
//! Backgammon is strictly a two-player game. Player 1 moves from point 1
//! towards point 24 and bears off past 24; player 2 moves the other way
//! and bears off past point 1.
//!
//! `PlayerNumber` is a thin newtype rather than a two-variant enum because
//! host input is a raw number and rule checks must answer sensibly (if
//! negatively) for numbers that are neither 1 nor 2.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Player number, `1` or `2` in a well-formed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerNumber(pub u8);

impl PlayerNumber {
    /// The player who moves up the board (1 -> 24).
    pub const ONE: PlayerNumber = PlayerNumber(1);

    /// The player who moves down the board (24 -> 1).
    pub const TWO: PlayerNumber = PlayerNumber(2);

    /// Create a new player number.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// Get the raw player number.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Check if this is player 1 or player 2.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self.0, 1 | 2)
    }

    /// The other player. Numbers other than 1 and 2 have no opponent.
    #[must_use]
    pub const fn opponent(self) -> Option<PlayerNumber> {
        match self.0 {
            1 => Some(Self::TWO),
            2 => Some(Self::ONE),
            _ => None,
        }
    }

    /// Point numbers forming this player's home board.
    #[must_use]
    pub const fn home_range(self) -> Option<RangeInclusive<u8>> {
        match self.0 {
            1 => Some(19..=24),
            2 => Some(1..=6),
            _ => None,
        }
    }

    /// Both players, in turn order.
    pub fn both() -> impl Iterator<Item = PlayerNumber> {
        [Self::ONE, Self::TWO].into_iter()
    }
}

impl From<u8> for PlayerNumber {
    fn from(number: u8) -> Self {
        Self(number)
    }
}

impl std::fmt::Display for PlayerNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
