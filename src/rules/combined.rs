//! Chains of moves made by one piece.

use smallvec::SmallVec;

use crate::board::{Location, Point, PointSet};
use crate::core::PlayerNumber;

/// One piece moved several times in a turn, as `[origin, stop.., end]`.
///
/// Ownership and emptiness of a chain are judged at its true origin: an
/// intermediate point may legitimately be empty before the turn is
/// applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombinedMove {
    legs: SmallVec<[Location; 5]>,
}

impl CombinedMove {
    /// Start a chain with a single move.
    #[must_use]
    pub fn new(from: Location, to: Location) -> Self {
        let mut legs = SmallVec::new();
        legs.push(from);
        legs.push(to);
        Self { legs }
    }

    /// Every location visited, origin first.
    #[must_use]
    pub fn legs(&self) -> &[Location] {
        &self.legs
    }

    /// Number of locations in the chain, origin included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Where the chain currently ends.
    #[must_use]
    pub fn last(&self) -> Option<Location> {
        self.legs.last().copied()
    }

    /// Where the piece started.
    #[must_use]
    pub fn origin(&self) -> Option<Location> {
        self.legs.first().copied()
    }

    /// Extend the chain with a further destination.
    pub fn push(&mut self, to: Location) {
        self.legs.push(to);
    }

    /// Check if the piece moves more than once.
    #[must_use]
    pub fn multi_leg(&self) -> bool {
        self.legs.len() > 2
    }

    #[must_use]
    pub fn from_point(&self) -> bool {
        self.origin().is_some_and(Location::is_point)
    }

    /// Check if the origin point has no pieces.
    #[must_use]
    pub fn origin_empty(&self, points: &PointSet) -> bool {
        self.origin_point(points).is_some_and(|p| p.is_empty())
    }

    /// Check if the origin point holds opposing pieces.
    #[must_use]
    pub fn owned_by_opponent(&self, player: PlayerNumber, points: &PointSet) -> bool {
        self.origin_point(points)
            .is_some_and(|p| p.owned_by_opponent(player))
    }

    fn origin_point<'a>(&self, points: &'a PointSet) -> Option<&'a Point> {
        self.origin()
            .and_then(Location::point_number)
            .and_then(|number| points.find_by_number(number))
    }
}
