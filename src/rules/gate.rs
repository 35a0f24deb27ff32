//! The ordered validation gates a move list passes through.

use super::move_list::{MoveContext, MoveList};
use crate::core::ErrorKind;

/// One legality check. Gates run in `ORDER` and the first failure wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationGate {
    MissingPoint,
    EmptyPoint,
    EmptyBar,
    PointOwnership,
    Blocked,
    WrongDirection,
    PiecesOnBar,
    BearOff,
    DiceMismatch,
}

impl ValidationGate {
    pub const ORDER: [ValidationGate; 9] = [
        ValidationGate::MissingPoint,
        ValidationGate::EmptyPoint,
        ValidationGate::EmptyBar,
        ValidationGate::PointOwnership,
        ValidationGate::Blocked,
        ValidationGate::WrongDirection,
        ValidationGate::PiecesOnBar,
        ValidationGate::BearOff,
        ValidationGate::DiceMismatch,
    ];

    /// The error reported when this gate fails.
    #[must_use]
    pub const fn error_kind(self) -> ErrorKind {
        match self {
            ValidationGate::MissingPoint => ErrorKind::PointNotFound,
            ValidationGate::EmptyPoint => ErrorKind::EmptyPoint,
            ValidationGate::EmptyBar => ErrorKind::EmptyBar,
            ValidationGate::PointOwnership => ErrorKind::PointOwnership,
            ValidationGate::Blocked => ErrorKind::Blocked,
            ValidationGate::WrongDirection => ErrorKind::WrongDirection,
            ValidationGate::PiecesOnBar => ErrorKind::PiecesOnBar,
            ValidationGate::BearOff => ErrorKind::BearOff,
            ValidationGate::DiceMismatch => ErrorKind::DiceMismatch,
        }
    }

    /// Check if `list` fails this gate.
    #[must_use]
    pub fn fails(self, list: &MoveList, ctx: &MoveContext<'_>) -> bool {
        match self {
            ValidationGate::MissingPoint => list.any_missing_point(),
            ValidationGate::EmptyPoint => list.any_point_empty(ctx.points),
            ValidationGate::EmptyBar => list.any_bar_empty_for_player(ctx.player, ctx.bar),
            ValidationGate::PointOwnership => {
                list.any_point_owned_by_opponent(ctx.player, ctx.points)
            }
            ValidationGate::Blocked => list.any_blocked(ctx.player, ctx.points),
            ValidationGate::WrongDirection => list.any_wrong_direction(ctx.player),
            ValidationGate::PiecesOnBar => list.pieces_still_on_bar(ctx),
            ValidationGate::BearOff => list.cannot_bear_off(ctx.player, ctx.points),
            ValidationGate::DiceMismatch => list.dice_mismatch(ctx),
        }
    }
}
