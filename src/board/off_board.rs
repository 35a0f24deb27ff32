//! The off-board tray for borne-off pieces.

use crate::core::config::PIECES_PER_PLAYER;
use crate::core::{Piece, PlayerNumber};

/// Pieces that have been borne off. Only ever grows during a game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OffBoard {
    pieces: Vec<Piece>,
}

impl OffBoard {
    #[must_use]
    pub fn new(pieces: Vec<Piece>) -> Self {
        Self { pieces }
    }

    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[must_use]
    pub fn number_of_pieces_owned_by_player(&self, player: PlayerNumber) -> usize {
        self.pieces.iter().filter(|p| p.owner() == player).count()
    }

    /// Check if `player` has borne off every piece.
    #[must_use]
    pub fn all_borne_off(&self, player: PlayerNumber) -> bool {
        self.number_of_pieces_owned_by_player(player) == PIECES_PER_PLAYER
    }

    pub fn push(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }
}
