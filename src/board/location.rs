//! Resolved board locations.

use crate::core::config::{BAR_POSITION_PLAYER_ONE, BAR_POSITION_PLAYER_TWO};
use crate::core::PlayerNumber;

/// A place a piece can be: a point, the bar or off the board.
///
/// Every consumer matches on all three kinds, so adding a kind is a
/// compile error everywhere it matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    /// Point `1..=24`.
    Point(u8),
    /// The bar.
    Bar,
    /// Off the board.
    OffBoard,
}

impl Location {
    /// Position on a player's track: points keep their number, the bar
    /// and off board sit just outside the board at the player's start and
    /// end.
    ///
    /// Player 1 enters at 0 and bears off at 25; player 2 enters at 25 and
    /// bears off at 0. Other player numbers have no track.
    #[must_use]
    pub fn position_for(self, player: PlayerNumber) -> Option<i8> {
        let (bar, off_board) = match player.raw() {
            1 => (BAR_POSITION_PLAYER_ONE, BAR_POSITION_PLAYER_TWO),
            2 => (BAR_POSITION_PLAYER_TWO, BAR_POSITION_PLAYER_ONE),
            _ => return None,
        };

        match self {
            Location::Point(number) => i8::try_from(number).ok(),
            Location::Bar => Some(bar),
            Location::OffBoard => Some(off_board),
        }
    }

    /// The point number, if this is a point.
    #[must_use]
    pub const fn point_number(self) -> Option<u8> {
        match self {
            Location::Point(number) => Some(number),
            Location::Bar | Location::OffBoard => None,
        }
    }

    #[must_use]
    pub const fn is_point(self) -> bool {
        matches!(self, Location::Point(_))
    }

    #[must_use]
    pub const fn is_bar(self) -> bool {
        matches!(self, Location::Bar)
    }

    #[must_use]
    pub const fn is_off_board(self) -> bool {
        matches!(self, Location::OffBoard)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Point(number) => write!(f, "point {number}"),
            Location::Bar => f.write_str("bar"),
            Location::OffBoard => f.write_str("off board"),
        }
    }
}
