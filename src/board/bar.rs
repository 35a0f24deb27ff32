//! The bar, where hit pieces wait to re-enter.

use crate::core::{Piece, PlayerNumber};

/// Pieces that were hit, from both players.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bar {
    pieces: Vec<Piece>,
}

impl Bar {
    #[must_use]
    pub fn new(pieces: Vec<Piece>) -> Self {
        Self { pieces }
    }

    /// All pieces on the bar.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Pieces belonging to `player`.
    pub fn pieces_owned_by_player(&self, player: PlayerNumber) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |p| p.owner() == player)
    }

    #[must_use]
    pub fn number_of_pieces_owned_by_player(&self, player: PlayerNumber) -> usize {
        self.pieces_owned_by_player(player).count()
    }

    #[must_use]
    pub fn any_pieces_for_player(&self, player: PlayerNumber) -> bool {
        self.pieces_owned_by_player(player).next().is_some()
    }

    #[must_use]
    pub fn empty_for_player(&self, player: PlayerNumber) -> bool {
        !self.any_pieces_for_player(player)
    }

    /// Remove and return one of `player`'s pieces.
    pub fn pop_for_player(&mut self, player: PlayerNumber) -> Option<Piece> {
        let index = self.pieces.iter().position(|p| p.owner() == player)?;
        Some(self.pieces.remove(index))
    }

    /// Put a hit piece on the bar.
    pub fn push(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }
}
