//! Entity identification and the piece token.
//!
//! Pieces and dice carry small numeric identifiers so a host can track
//! a particular checker across turns. Identifiers are assigned when a
//! game is built (default layout or snapshot) and never change.
//!
//! ## Usage
//!
//! ```
//! use backgammon_engine::core::{Piece, PieceId, PlayerNumber};
//!
//! let piece = Piece::new(PieceId(7), PlayerNumber::ONE);
//! assert!(piece.is_owned_by(PlayerNumber::ONE));
//! assert!(!piece.is_owned_by(PlayerNumber::TWO));
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerNumber;

/// Unique identifier for a piece (checker).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The identifier following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for PieceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// Unique identifier for a die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DieId(pub u32);

impl DieId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Die({})", self.0)
    }
}

/// A checker owned by one player.
///
/// Pieces are never recoloured: moving a piece transfers it between
/// containers (point, bar, off board), it is never rebuilt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    id: PieceId,
    owner: PlayerNumber,
}

impl Piece {
    /// Create a new piece.
    #[must_use]
    pub const fn new(id: PieceId, owner: PlayerNumber) -> Self {
        Self { id, owner }
    }

    /// The piece identifier.
    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    /// The owning player.
    #[must_use]
    pub const fn owner(&self) -> PlayerNumber {
        self.owner
    }

    /// Check if the piece belongs to `player`.
    #[must_use]
    pub fn is_owned_by(&self, player: PlayerNumber) -> bool {
        self.owner == player
    }
}

/// Hands out sequential piece identifiers while a game is being built.
#[derive(Clone, Debug)]
pub(crate) struct PieceIdAllocator {
    next: PieceId,
}

impl PieceIdAllocator {
    pub(crate) fn new() -> Self {
        Self { next: PieceId(1) }
    }

    pub(crate) fn piece(&mut self, owner: PlayerNumber) -> Piece {
        let id = self.next;
        self.next = id.next();
        Piece::new(id, owner)
    }
}
