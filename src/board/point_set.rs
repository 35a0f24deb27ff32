//! The ordered collection of points and its reachability queries.

use smallvec::SmallVec;

use super::location::Location;
use super::point::Point;
use crate::core::action::LocationId;
use crate::core::config::POINT_COUNT;
use crate::core::PlayerNumber;
use crate::dice::DiceSet;

/// The points of a board.
///
/// A full board holds points 1 to 24, but partial boards (puzzles, test
/// positions) are allowed: a destination missing from the set is simply
/// unreachable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Build a set from points, kept in the order given.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Points 1 to 24, all empty.
    #[must_use]
    pub fn empty_board() -> Self {
        Self::new((1..=POINT_COUNT).map(Point::empty).collect())
    }

    /// All points, in construction order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Find a point by number.
    #[must_use]
    pub fn find_by_number(&self, number: u8) -> Option<&Point> {
        self.points.iter().find(|p| p.number() == number)
    }

    /// Find a point by number, mutably.
    pub fn find_by_number_mut(&mut self, number: u8) -> Option<&mut Point> {
        self.points.iter_mut().find(|p| p.number() == number)
    }

    /// Points where `player` has pieces outside their home board.
    ///
    /// Bearing off is only allowed once this is empty.
    #[must_use]
    pub fn not_home(&self, player: PlayerNumber) -> Vec<&Point> {
        self.points
            .iter()
            .filter(|p| p.owned_by_player(player) && !p.is_home(player))
            .collect()
    }

    /// Check if any of `player`'s pieces are outside their home board.
    #[must_use]
    pub fn some_pieces_not_home(&self, player: PlayerNumber) -> bool {
        !self.not_home(player).is_empty()
    }

    /// Points holding at least one of `player`'s pieces.
    #[must_use]
    pub fn owned_by_player(&self, player: PlayerNumber) -> Vec<&Point> {
        self.points
            .iter()
            .filter(|p| p.owned_by_player(player))
            .collect()
    }

    /// Points a single piece at `from` could land on with one die each.
    ///
    /// A candidate must exist on the board and be open to `player`:
    /// empty, already theirs, or a lone opposing blot. Move chaining and
    /// dice usage are not considered here. The same point can appear
    /// twice when two dice show the same face.
    #[must_use]
    pub fn destinations(&self, from: Location, dice: &DiceSet, player: PlayerNumber) -> SmallVec<[&Point; 4]> {
        dice.rolled()
            .filter_map(|die| self.destination(from, die, player))
            .filter(|p| p.is_empty() || p.owned_by_player(player) || p.is_blot())
            .collect()
    }

    fn destination(&self, from: Location, die: u8, player: PlayerNumber) -> Option<&Point> {
        let origin = i16::from(from.position_for(player)?);
        let step = i16::from(die);
        let target = match player.raw() {
            1 => origin + step,
            2 => origin - step,
            _ => return None,
        };

        u8::try_from(target)
            .ok()
            .and_then(|number| self.find_by_number(number))
    }

    /// Resolve a raw origin identifier: a point on this board or the bar.
    #[must_use]
    pub fn resolve_origin(&self, id: &LocationId) -> Option<Location> {
        match id {
            LocationId::Bar => Some(Location::Bar),
            LocationId::Point(number) => self.resolve_point(*number),
            LocationId::OffBoard | LocationId::Unrecognized(_) => None,
        }
    }

    /// Resolve a raw destination identifier: a point on this board or off the board.
    #[must_use]
    pub fn resolve_destination(&self, id: &LocationId) -> Option<Location> {
        match id {
            LocationId::OffBoard => Some(Location::OffBoard),
            LocationId::Point(number) => self.resolve_point(*number),
            LocationId::Bar | LocationId::Unrecognized(_) => None,
        }
    }

    fn resolve_point(&self, number: i32) -> Option<Location> {
        let number = u8::try_from(number).ok()?;
        self.find_by_number(number).map(|p| Location::Point(p.number()))
    }
}
