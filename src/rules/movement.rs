//! A single piece move.

use crate::board::{Bar, Location, PointSet};
use crate::core::{MoveRequest, PlayerNumber};

/// One origin -> destination transition.
///
/// Either end is `None` when the submitted identifier did not resolve to
/// anything on the board. Origins are points or the bar; destinations are
/// points or off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Option<Location>,
    pub to: Option<Location>,
}

impl Move {
    /// Create a move between two resolved locations.
    #[must_use]
    pub const fn new(from: Location, to: Location) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Resolve a raw request against the board.
    #[must_use]
    pub fn resolve(request: &MoveRequest, points: &PointSet) -> Self {
        Self {
            from: points.resolve_origin(&request.from),
            to: points.resolve_destination(&request.to),
        }
    }

    /// Signed distance along `player`'s track.
    ///
    /// Positive for player 1 moving forward, negative for player 2 moving
    /// forward. Zero for unresolved moves and unknown players.
    #[must_use]
    pub fn distance_for_player(&self, player: PlayerNumber) -> i8 {
        let (Some(from), Some(to)) = (self.from, self.to) else {
            return 0;
        };

        match (from.position_for(player), to.position_for(player)) {
            (Some(start), Some(end)) => end - start,
            _ => 0,
        }
    }

    /// Number of pips the move covers.
    #[must_use]
    pub fn absolute_distance_for_player(&self, player: PlayerNumber) -> u8 {
        self.distance_for_player(player).unsigned_abs()
    }

    /// Check if the move runs against `player`'s direction of travel.
    ///
    /// Always true for numbers other than 1 and 2.
    #[must_use]
    pub fn wrong_direction(&self, player: PlayerNumber) -> bool {
        match player.raw() {
            1 => self.distance_for_player(player) < 0,
            2 => self.distance_for_player(player) > 0,
            _ => true,
        }
    }

    /// Check if the destination is a point held by two or more opposing pieces.
    #[must_use]
    pub fn blocked(&self, player: PlayerNumber, points: &PointSet) -> bool {
        match self.to {
            Some(Location::Point(number)) => points
                .find_by_number(number)
                .is_some_and(|p| p.owned_by_opponent(player) && p.is_blocked()),
            Some(Location::OffBoard | Location::Bar) | None => false,
        }
    }

    /// Check if either end failed to resolve.
    #[must_use]
    pub fn missing_point(&self) -> bool {
        self.from.is_none() || self.to.is_none()
    }

    #[must_use]
    pub fn from_bar(&self) -> bool {
        matches!(self.from, Some(Location::Bar))
    }

    #[must_use]
    pub fn to_point(&self) -> bool {
        matches!(self.to, Some(Location::Point(_)))
    }

    #[must_use]
    pub fn bear_off(&self) -> bool {
        matches!(self.to, Some(Location::OffBoard))
    }

    /// Check if this move leaves the bar while `player` has nothing there.
    #[must_use]
    pub fn empty_for_player(&self, player: PlayerNumber, bar: &Bar) -> bool {
        self.from_bar() && bar.empty_for_player(player)
    }
}
