//! A submitted list of moves and every legality query over it.
//!
//! The queries mirror the validation gates one-to-one; the order they are
//! asked in lives in `ValidationGate`.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::combined::CombinedMove;
use super::gate::ValidationGate;
use super::movement::Move;
use crate::board::{Bar, Location, PointSet};
use crate::core::{ErrorKind, MoveRequest, PlayerNumber};
use crate::dice::DiceSet;

/// Everything a move list is judged against.
#[derive(Clone, Copy, Debug)]
pub struct MoveContext<'a> {
    /// The player submitting the moves.
    pub player: PlayerNumber,
    pub points: &'a PointSet,
    pub bar: &'a Bar,
    pub dice: &'a DiceSet,
}

/// The moves of one submitted action, in submission order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    /// Resolve raw requests against the board.
    #[must_use]
    pub fn resolve(requests: &[MoveRequest], points: &PointSet) -> Self {
        Self::new(requests.iter().map(|r| Move::resolve(r, points)).collect())
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Group the moves into per-piece chains.
    ///
    /// A move starting where an existing chain currently ends extends that
    /// chain; anything else starts a new one. Unresolved moves are skipped.
    #[must_use]
    pub fn combined_moves(&self) -> Vec<CombinedMove> {
        let mut combined: Vec<CombinedMove> = Vec::new();

        for m in &self.moves {
            let (Some(from), Some(to)) = (m.from, m.to) else {
                continue;
            };

            match combined.iter_mut().find(|chain| chain.last() == Some(from)) {
                Some(chain) => chain.push(to),
                None => combined.push(CombinedMove::new(from, to)),
            }
        }

        combined
    }

    /// Check if some piece moves more than once.
    #[must_use]
    pub fn piece_moves_multiple_times(&self) -> bool {
        self.combined_moves().iter().any(CombinedMove::multi_leg)
    }

    #[must_use]
    pub fn any_missing_point(&self) -> bool {
        self.moves.iter().any(Move::missing_point)
    }

    /// Check if a chain starts on an empty point.
    #[must_use]
    pub fn any_point_empty(&self, points: &PointSet) -> bool {
        self.combined_moves()
            .iter()
            .any(|chain| chain.from_point() && chain.origin_empty(points))
    }

    /// Check if a move leaves the bar while the player has nothing there.
    #[must_use]
    pub fn any_bar_empty_for_player(&self, player: PlayerNumber, bar: &Bar) -> bool {
        self.moves.iter().any(|m| m.empty_for_player(player, bar))
    }

    /// Check if a chain starts on a point holding opposing pieces.
    #[must_use]
    pub fn any_point_owned_by_opponent(&self, player: PlayerNumber, points: &PointSet) -> bool {
        self.combined_moves()
            .iter()
            .any(|chain| chain.from_point() && chain.owned_by_opponent(player, points))
    }

    #[must_use]
    pub fn any_blocked(&self, player: PlayerNumber, points: &PointSet) -> bool {
        self.moves.iter().any(|m| m.blocked(player, points))
    }

    #[must_use]
    pub fn any_wrong_direction(&self, player: PlayerNumber) -> bool {
        self.moves.iter().any(|m| m.wrong_direction(player))
    }

    #[must_use]
    pub fn any_bear_off(&self) -> bool {
        self.moves.iter().any(Move::bear_off)
    }

    #[must_use]
    pub fn all_moves_from_bar(&self) -> bool {
        self.moves.iter().all(Move::from_bar)
    }

    #[must_use]
    pub fn number_of_moves_from_bar(&self) -> usize {
        self.moves.iter().filter(|m| m.from_bar()).count()
    }

    /// Pip count of each move, in submission order.
    #[must_use]
    pub fn absolute_distances(&self, player: PlayerNumber) -> SmallVec<[u8; 4]> {
        self.moves
            .iter()
            .map(|m| m.absolute_distance_for_player(player))
            .collect()
    }

    /// Check if the player skipped bar pieces they could have entered.
    ///
    /// Fails when some move does not come from the bar, the bar moves do
    /// not account for all of the player's bar pieces, and the dice open
    /// at least as many entry points as bar moves were submitted.
    #[must_use]
    pub fn pieces_still_on_bar(&self, ctx: &MoveContext<'_>) -> bool {
        let from_bar = self.number_of_moves_from_bar();

        !self.all_moves_from_bar()
            && from_bar != ctx.bar.number_of_pieces_owned_by_player(ctx.player)
            && ctx.points.destinations(Location::Bar, ctx.dice, ctx.player).len() >= from_bar
    }

    /// Check if the list bears off while pieces it does not move are
    /// still outside the home board.
    #[must_use]
    pub fn cannot_bear_off(&self, player: PlayerNumber, points: &PointSet) -> bool {
        if !self.any_bear_off() {
            return false;
        }

        let moved_from: FxHashSet<u8> = self
            .moves
            .iter()
            .filter_map(|m| m.from.and_then(Location::point_number))
            .collect();

        points
            .not_home(player)
            .iter()
            .any(|p| !moved_from.contains(&p.number()))
    }

    /// Check if the moves cannot be paid for with the dice, when the
    /// player has any legal move at all.
    #[must_use]
    pub fn dice_mismatch(&self, ctx: &MoveContext<'_>) -> bool {
        current_player_has_moves(ctx) && self.moves_mismatch_dice(ctx.player, ctx.dice)
    }

    /// Allocate one distinct die to every move, smallest fitting die first.
    ///
    /// Ordinary moves need a die equal to their distance; bearing off may
    /// use any die at least as large.
    fn moves_mismatch_dice(&self, player: PlayerNumber, dice: &DiceSet) -> bool {
        let mut unallocated: SmallVec<[u8; 4]> = dice.rolled().collect();
        unallocated.sort_unstable();
        let mut allocated = 0;

        for m in &self.moves {
            let distance = m.absolute_distance_for_player(player);
            let fits = |die: &u8| {
                if m.bear_off() {
                    *die >= distance
                } else {
                    *die == distance
                }
            };

            if let Some(index) = unallocated.iter().position(fits) {
                unallocated.remove(index);
                allocated += 1;
            }
        }

        allocated != self.moves.len()
    }

    /// Run the gates in order and report the first failure.
    pub fn validate(&self, ctx: &MoveContext<'_>) -> Result<(), ErrorKind> {
        ValidationGate::ORDER
            .into_iter()
            .find(|gate| gate.fails(self, ctx))
            .map_or(Ok(()), |gate| Err(gate.error_kind()))
    }
}

/// Check if the player can move any piece with the current dice.
///
/// Pieces on the bar must enter first, so only entry points count while
/// the bar holds any of the player's pieces.
fn current_player_has_moves(ctx: &MoveContext<'_>) -> bool {
    if ctx.bar.any_pieces_for_player(ctx.player) {
        !ctx.points.destinations(Location::Bar, ctx.dice, ctx.player).is_empty()
    } else {
        ctx.points.owned_by_player(ctx.player).iter().any(|p| {
            !ctx.points
                .destinations(Location::Point(p.number()), ctx.dice, ctx.player)
                .is_empty()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Point;
    use crate::core::{DieId, Piece, PieceId};
    use crate::dice::Die;

    const P1: PlayerNumber = PlayerNumber::ONE;
    const P2: PlayerNumber = PlayerNumber::TWO;

    struct Board {
        points: PointSet,
        bar: Bar,
        dice: DiceSet,
    }

    impl Board {
        fn new(layout: &[(u8, u8, usize)], bar: &[u8], dice: &[u8]) -> Self {
            let mut id = 0;
            let mut piece = |owner: u8| {
                id += 1;
                Piece::new(PieceId(id), PlayerNumber::new(owner))
            };

            let points = (1..=24)
                .map(|number| {
                    let pieces = layout
                        .iter()
                        .filter(|(n, _, _)| *n == number)
                        .flat_map(|&(_, owner, count)| std::iter::repeat(owner).take(count))
                        .map(&mut piece)
                        .collect();
                    Point::new(number, pieces)
                })
                .collect();
            let bar = bar.iter().map(|&owner| piece(owner)).collect();
            let dice = DiceSet::from_dice(
                dice.iter()
                    .enumerate()
                    .map(|(i, &n)| Die::new(DieId(i as u32 + 1), Some(n))),
            );

            Self {
                points: PointSet::new(points),
                bar: Bar::new(bar),
                dice,
            }
        }

        fn ctx(&self, player: PlayerNumber) -> MoveContext<'_> {
            MoveContext {
                player,
                points: &self.points,
                bar: &self.bar,
                dice: &self.dice,
            }
        }

        fn check(&self, player: PlayerNumber, requests: &[MoveRequest]) -> Result<(), ErrorKind> {
            MoveList::resolve(requests, &self.points).validate(&self.ctx(player))
        }
    }

    #[test]
    fn test_combined_moves_chain_one_piece() {
        let list = MoveList::new(vec![
            Move::new(Location::Point(1), Location::Point(3)),
            Move::new(Location::Point(12), Location::Point(14)),
            Move::new(Location::Point(3), Location::Point(4)),
        ]);

        let combined = list.combined_moves();
        assert_eq!(combined.len(), 2);
        assert_eq!(
            combined[0].legs(),
            &[Location::Point(1), Location::Point(3), Location::Point(4)]
        );
        assert!(list.piece_moves_multiple_times());
    }

    #[test]
    fn test_chain_origin_judged_not_intermediate() {
        // Point 3 is empty but only as a stop on the way from 1.
        let board = Board::new(&[(1, 1, 1)], &[], &[2, 1]);
        let moves = [MoveRequest::new(1, 3), MoveRequest::new(3, 4)];
        assert_eq!(board.check(P1, &moves), Ok(()));
    }

    #[test]
    fn test_missing_point_comes_first() {
        let board = Board::new(&[(1, 2, 1)], &[], &[1, 2]);
        let moves = [MoveRequest::new(1, 2), MoveRequest::new("nowhere", 3)];
        assert_eq!(board.check(P1, &moves), Err(ErrorKind::PointNotFound));
    }

    #[test]
    fn test_empty_point() {
        let board = Board::new(&[(1, 1, 1)], &[], &[1, 2]);
        assert_eq!(board.check(P1, &[MoveRequest::new(5, 6)]), Err(ErrorKind::EmptyPoint));
    }

    #[test]
    fn test_empty_bar() {
        let board = Board::new(&[(1, 1, 1)], &[2], &[1, 2]);
        assert_eq!(board.check(P1, &[MoveRequest::new("bar", 2)]), Err(ErrorKind::EmptyBar));
    }

    #[test]
    fn test_point_ownership() {
        let board = Board::new(&[(1, 1, 1), (5, 2, 2)], &[], &[1, 2]);
        assert_eq!(board.check(P1, &[MoveRequest::new(5, 6)]), Err(ErrorKind::PointOwnership));
    }

    #[test]
    fn test_blocked() {
        let board = Board::new(&[(1, 1, 1), (3, 2, 2)], &[], &[1, 2]);
        assert_eq!(board.check(P1, &[MoveRequest::new(1, 3)]), Err(ErrorKind::Blocked));
    }

    #[test]
    fn test_wrong_direction() {
        let board = Board::new(&[(5, 1, 1)], &[], &[1, 2]);
        assert_eq!(board.check(P1, &[MoveRequest::new(5, 3)]), Err(ErrorKind::WrongDirection));
        assert_eq!(
            Board::new(&[(5, 2, 1)], &[], &[1, 2]).check(P2, &[MoveRequest::new(5, 7)]),
            Err(ErrorKind::WrongDirection)
        );
    }

    #[test]
    fn test_pieces_on_bar() {
        let board = Board::new(&[(1, 1, 1)], &[1], &[1, 2]);
        assert_eq!(board.check(P1, &[MoveRequest::new(1, 2)]), Err(ErrorKind::PiecesOnBar));
        assert_eq!(
            board.check(P1, &[MoveRequest::new("bar", 1), MoveRequest::new(1, 3)]),
            Ok(())
        );
    }

    #[test]
    fn test_bear_off_needs_all_home() {
        let board = Board::new(&[(12, 1, 1), (20, 1, 2)], &[], &[5, 6]);
        assert_eq!(
            board.check(P1, &[MoveRequest::new(20, "off_board")]),
            Err(ErrorKind::BearOff)
        );
    }

    #[test]
    fn test_bear_off_with_larger_die() {
        let board = Board::new(&[(19, 1, 1), (23, 1, 1)], &[], &[6, 4]);
        assert!(current_player_has_moves(&board.ctx(P1)));
        assert_eq!(board.check(P1, &[MoveRequest::new(23, "off_board")]), Ok(()));
        assert_eq!(
            board.check(P1, &[MoveRequest::new(23, "off_board"), MoveRequest::new(19, "off_board")]),
            Ok(())
        );
    }

    #[test]
    fn test_dice_allocation() {
        let moves = [MoveRequest::new(1, 4), MoveRequest::new(1, 6)];

        let matching = Board::new(&[(1, 1, 2)], &[], &[3, 5]);
        assert_eq!(matching.check(P1, &moves), Ok(()));

        let short = Board::new(&[(1, 1, 2)], &[], &[3, 4]);
        assert_eq!(short.check(P1, &moves), Err(ErrorKind::DiceMismatch));
    }

    #[test]
    fn test_one_die_per_move() {
        let board = Board::new(&[(1, 1, 2)], &[], &[3, 5]);
        let moves = [MoveRequest::new(1, 4), MoveRequest::new(1, 4)];
        assert_eq!(board.check(P1, &moves), Err(ErrorKind::DiceMismatch));
    }

    #[test]
    fn test_dice_ignored_without_legal_moves() {
        // Player 1 on the bar facing a closed entry.
        let board = Board::new(&[(1, 2, 2), (2, 2, 2), (10, 1, 1)], &[1], &[1, 2]);
        assert!(!current_player_has_moves(&board.ctx(P1)));
        assert_eq!(board.check(P1, &[]), Ok(()));
    }

    #[test]
    fn test_empty_list_passes() {
        let board = Board::new(&[(1, 1, 2)], &[], &[3, 5]);
        assert_eq!(board.check(P1, &[]), Ok(()));
    }

    #[test]
    fn test_queries() {
        let list = MoveList::new(vec![
            Move::new(Location::Bar, Location::Point(3)),
            Move::new(Location::Point(22), Location::OffBoard),
        ]);

        assert_eq!(list.number_of_moves_from_bar(), 1);
        assert!(!list.all_moves_from_bar());
        assert!(list.any_bear_off());
        assert_eq!(list.absolute_distances(P1).as_slice(), &[3, 3]);
    }
}
