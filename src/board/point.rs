//! A single numbered point.

use crate::core::{Piece, PlayerNumber};

/// A point holding a stack of pieces.
///
/// In legal play a point never holds pieces of both players; a lone
/// piece (a blot) can be hit and replaced by an opposing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    number: u8,
    pieces: Vec<Piece>,
}

impl Point {
    /// Create a point with the given pieces (bottom first).
    #[must_use]
    pub fn new(number: u8, pieces: Vec<Piece>) -> Self {
        Self { number, pieces }
    }

    /// Create an empty point.
    #[must_use]
    pub fn empty(number: u8) -> Self {
        Self::new(number, Vec::new())
    }

    /// The point number.
    #[must_use]
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Pieces on the point, bottom first.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Number of pieces on the point.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Remove and return the top piece, `None` when empty.
    pub fn pop(&mut self) -> Option<Piece> {
        self.pieces.pop()
    }

    /// Put a piece on top.
    pub fn push(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }

    /// Check if any piece here belongs to `player`.
    #[must_use]
    pub fn owned_by_player(&self, player: PlayerNumber) -> bool {
        self.pieces.iter().any(|p| p.owner() == player)
    }

    /// Check if any piece here belongs to someone other than `player`.
    #[must_use]
    pub fn owned_by_opponent(&self, player: PlayerNumber) -> bool {
        self.pieces.iter().any(|p| p.owner() != player)
    }

    /// More than one piece: an opponent cannot land here.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.pieces.len() > 1
    }

    /// Exactly one piece.
    #[must_use]
    pub fn is_blot(&self) -> bool {
        self.pieces.len() == 1
    }

    /// A lone opposing piece `player` would hit by landing here.
    #[must_use]
    pub fn is_hittable(&self, player: PlayerNumber) -> bool {
        self.is_blot() && self.owned_by_opponent(player)
    }

    /// Check if this point is in `player`'s home board.
    ///
    /// Numbers other than 1 and 2 count every point as home.
    #[must_use]
    pub fn is_home(&self, player: PlayerNumber) -> bool {
        player
            .home_range()
            .map_or(true, |range| range.contains(&self.number))
    }
}
