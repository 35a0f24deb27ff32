//! Plain records describing a whole game, for construction and export.
//!
//! Snapshots carry no identifiers: a game built from one numbers its dice
//! and pieces afresh. The shape serializes as
//!
//! ```text
//! {
//!   "current_player_number": 1,
//!   "current_phase": "roll",
//!   "dice": [{ "number": null }, { "number": null }],
//!   "bar": { "pieces": [] },
//!   "points": [{ "number": 1, "pieces": [{ "owner": 1 }, ...] }, ...],
//!   "off_board": { "pieces": [] }
//! }
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::config::POINT_COUNT;
use super::error::SnapshotError;
use super::player::PlayerNumber;
use super::state::Phase;

/// A piece, known only by its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub owner: PlayerNumber,
}

impl PieceSnapshot {
    #[must_use]
    pub const fn new(owner: PlayerNumber) -> Self {
        Self { owner }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieSnapshot {
    pub number: Option<u8>,
}

impl DieSnapshot {
    #[must_use]
    pub const fn new(number: Option<u8>) -> Self {
        Self { number }
    }
}

/// The bar or the off-board tray.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSnapshot {
    pub pieces: Vec<PieceSnapshot>,
}

impl ContainerSnapshot {
    #[must_use]
    pub fn new(pieces: Vec<PieceSnapshot>) -> Self {
        Self { pieces }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSnapshot {
    pub number: u8,
    pub pieces: Vec<PieceSnapshot>,
}

impl PointSnapshot {
    #[must_use]
    pub fn new(number: u8, pieces: Vec<PieceSnapshot>) -> Self {
        Self { number, pieces }
    }

    #[must_use]
    pub fn empty(number: u8) -> Self {
        Self::new(number, Vec::new())
    }

    /// A point holding `count` pieces of one owner.
    #[must_use]
    pub fn stack(number: u8, owner: PlayerNumber, count: usize) -> Self {
        Self::new(number, vec![PieceSnapshot::new(owner); count])
    }

    /// Check if pieces of more than one owner share this point.
    #[must_use]
    pub fn has_mixed_owners(&self) -> bool {
        self.pieces
            .split_first()
            .is_some_and(|(first, rest)| rest.iter().any(|p| p.owner != first.owner))
    }
}

/// A complete game position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub current_player_number: PlayerNumber,
    pub current_phase: Phase,
    pub dice: Vec<DieSnapshot>,
    pub bar: ContainerSnapshot,
    pub points: Vec<PointSnapshot>,
    pub off_board: ContainerSnapshot,
}

impl GameSnapshot {
    /// The standard starting position: player 1 to roll, dice unset.
    #[must_use]
    pub fn default_layout() -> Self {
        const P1: PlayerNumber = PlayerNumber::ONE;
        const P2: PlayerNumber = PlayerNumber::TWO;

        let stacks: [(u8, PlayerNumber, usize); 8] = [
            (1, P1, 2),
            (6, P2, 5),
            (8, P2, 3),
            (12, P1, 5),
            (13, P2, 5),
            (17, P1, 3),
            (19, P1, 5),
            (24, P2, 2),
        ];

        let points = (1..=POINT_COUNT)
            .map(|number| {
                stacks
                    .iter()
                    .find(|(n, _, _)| *n == number)
                    .map_or_else(
                        || PointSnapshot::empty(number),
                        |&(n, owner, count)| PointSnapshot::stack(n, owner, count),
                    )
            })
            .collect();

        Self {
            current_player_number: P1,
            current_phase: Phase::Roll,
            dice: vec![DieSnapshot::default(); 2],
            bar: ContainerSnapshot::default(),
            points,
            off_board: ContainerSnapshot::default(),
        }
    }

    /// Every piece in the snapshot, in id assignment order.
    pub fn pieces(&self) -> impl Iterator<Item = &PieceSnapshot> + '_ {
        self.bar
            .pieces
            .iter()
            .chain(self.points.iter().flat_map(|p| p.pieces.iter()))
            .chain(self.off_board.pieces.iter())
    }

    /// Check the snapshot describes a position a game can be built from.
    ///
    /// # Errors
    ///
    /// Returns the first contract violation found: player, dice, points,
    /// piece owners, then points shared by both players.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if !self.current_player_number.is_valid() {
            return Err(SnapshotError::InvalidPlayer(self.current_player_number.raw()));
        }

        match self.dice.len() {
            2 | 4 => {}
            count => return Err(SnapshotError::InvalidDiceCount(count)),
        }

        if let Some(number) = self
            .dice
            .iter()
            .filter_map(|d| d.number)
            .find(|n| !(1..=6).contains(n))
        {
            return Err(SnapshotError::InvalidDieNumber(number));
        }

        let mut seen = FxHashSet::default();
        for point in &self.points {
            if !(1..=POINT_COUNT).contains(&point.number) {
                return Err(SnapshotError::InvalidPointNumber(point.number));
            }
            if !seen.insert(point.number) {
                return Err(SnapshotError::DuplicatePoint(point.number));
            }
        }

        if let Some(piece) = self.pieces().find(|p| !p.owner.is_valid()) {
            return Err(SnapshotError::InvalidOwner(piece.owner.raw()));
        }

        match self.points.iter().find(|p| p.has_mixed_owners()) {
            Some(point) => Err(SnapshotError::MixedOwners(point.number)),
            None => Ok(()),
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::default_layout()
    }
}
