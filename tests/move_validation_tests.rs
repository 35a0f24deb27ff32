//! Move list validation integration tests.
//!
//! Each test sets up a position in the move phase, submits one move list
//! and checks which gate (if any) rejects it. Gates are checked in a
//! fixed order, so several tests also pin down precedence.

use backgammon_engine::core::{
    ContainerSnapshot, DieSnapshot, ErrorKind, GameConfig, GameSnapshot, GameState, LoadedDice,
    MoveRequest, Phase, PieceSnapshot, PlayerNumber, PointSnapshot,
};
use backgammon_engine::rules::{MoveContext, MoveList, ValidationGate};

const P1: PlayerNumber = PlayerNumber::ONE;
const P2: PlayerNumber = PlayerNumber::TWO;

fn position(
    player: PlayerNumber,
    dice: &[u8],
    stacks: &[(u8, PlayerNumber, usize)],
    bar: &[PlayerNumber],
) -> GameState<LoadedDice> {
    let points = (1..=24)
        .map(|number| {
            let pieces = stacks
                .iter()
                .filter(|(n, _, _)| *n == number)
                .flat_map(|&(_, owner, count)| vec![PieceSnapshot::new(owner); count])
                .collect();
            PointSnapshot::new(number, pieces)
        })
        .collect();

    let snapshot = GameSnapshot {
        current_player_number: player,
        current_phase: Phase::Move,
        dice: dice.iter().map(|&n| DieSnapshot::new(Some(n))).collect(),
        bar: ContainerSnapshot::new(bar.iter().map(|&o| PieceSnapshot::new(o)).collect()),
        points,
        off_board: ContainerSnapshot::default(),
    };

    GameState::with_dice_source(&snapshot, LoadedDice::new([6]), GameConfig::new()).unwrap()
}

/// Submit `moves` and return the rejection, if any.
fn submit(game: &mut GameState<LoadedDice>, moves: &[MoveRequest]) -> Option<ErrorKind> {
    let player = game.current_player_number();
    if game.move_pieces(player, moves) {
        None
    } else {
        Some(game.errors()[0].kind())
    }
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_unknown_identifiers() {
    let mut game = position(P1, &[1, 2], &[(1, P1, 2)], &[]);

    assert_eq!(submit(&mut game, &[MoveRequest::new(1, 25)]), Some(ErrorKind::PointNotFound));
    assert_eq!(submit(&mut game, &[MoveRequest::new(0, 1)]), Some(ErrorKind::PointNotFound));
    assert_eq!(submit(&mut game, &[MoveRequest::new("middle", 2)]), Some(ErrorKind::PointNotFound));
    assert_eq!(submit(&mut game, &[MoveRequest::new("off_board", 2)]), Some(ErrorKind::PointNotFound));
    assert_eq!(submit(&mut game, &[MoveRequest::new(1, "bar")]), Some(ErrorKind::PointNotFound));
}

#[test]
fn test_text_point_numbers_resolve() {
    let mut game = position(P1, &[1, 2], &[(1, P1, 2)], &[]);
    assert_eq!(submit(&mut game, &[MoveRequest::new("1", "2")]), None);
}

#[test]
fn test_missing_point_wins_over_later_gates() {
    // The second move is blocked and backwards, but resolution fails first.
    let mut game = position(P1, &[1, 2], &[(1, P1, 2), (5, P2, 2)], &[]);
    let moves = [MoveRequest::new(9, 5), MoveRequest::new(1, 30)];
    assert_eq!(submit(&mut game, &moves), Some(ErrorKind::PointNotFound));
}

// =============================================================================
// Origins
// =============================================================================

#[test]
fn test_empty_origin() {
    let mut game = position(P1, &[1, 2], &[(1, P1, 2)], &[]);
    assert_eq!(submit(&mut game, &[MoveRequest::new(4, 5)]), Some(ErrorKind::EmptyPoint));
}

#[test]
fn test_empty_bar() {
    let mut game = position(P1, &[1, 2], &[(1, P1, 2)], &[P2]);
    assert_eq!(submit(&mut game, &[MoveRequest::new("bar", 2)]), Some(ErrorKind::EmptyBar));
}

#[test]
fn test_opponent_origin() {
    let mut game = position(P1, &[1, 2], &[(1, P1, 2), (6, P2, 2)], &[]);
    assert_eq!(submit(&mut game, &[MoveRequest::new(6, 7)]), Some(ErrorKind::PointOwnership));
}

#[test]
fn test_chained_moves_judged_at_origin() {
    let mut game = position(P1, &[1, 2], &[(1, P1, 1)], &[]);
    assert_eq!(submit(&mut game, &[MoveRequest::new(1, 2), MoveRequest::new(2, 4)]), None);
    assert_eq!(game.points().find_by_number(4).map(|p| p.len()), Some(1));
}

// =============================================================================
// Destinations and Direction
// =============================================================================

#[test]
fn test_blocked_destination() {
    let mut game = position(P1, &[1, 2], &[(1, P1, 2), (3, P2, 2)], &[]);
    assert_eq!(submit(&mut game, &[MoveRequest::new(1, 3)]), Some(ErrorKind::Blocked));
}

#[test]
fn test_blot_is_not_blocking() {
    let mut game = position(P1, &[1, 2], &[(1, P1, 2), (3, P2, 1)], &[]);
    assert_eq!(submit(&mut game, &[MoveRequest::new(1, 3)]), None);
}

#[test]
fn test_backwards_move() {
    let mut game = position(P1, &[1, 2], &[(5, P1, 2)], &[]);
    assert_eq!(submit(&mut game, &[MoveRequest::new(5, 4)]), Some(ErrorKind::WrongDirection));

    let mut game = position(P2, &[1, 2], &[(5, P2, 2)], &[]);
    assert_eq!(submit(&mut game, &[MoveRequest::new(5, 6)]), Some(ErrorKind::WrongDirection));
}

// =============================================================================
// Bar Priority
// =============================================================================

#[test]
fn test_bar_then_point() {
    let mut game = position(P1, &[1, 2], &[(1, P1, 1)], &[P1]);
    assert_eq!(submit(&mut game, &[MoveRequest::new("bar", 1), MoveRequest::new(1, 3)]), None);
    assert!(game.bar().is_empty());
}

#[test]
fn test_point_before_bar() {
    let mut game = position(P1, &[1, 2], &[(1, P1, 1)], &[P1]);
    assert_eq!(submit(&mut game, &[MoveRequest::new(1, 2)]), Some(ErrorKind::PiecesOnBar));
}

#[test]
fn test_bar_entry_needs_matching_die() {
    let mut game = position(P1, &[1, 2], &[(1, P1, 1)], &[P1]);
    let moves = [MoveRequest::new("bar", 4), MoveRequest::new(1, 2)];
    assert_eq!(submit(&mut game, &moves), Some(ErrorKind::DiceMismatch));
}

#[test]
fn test_player_two_enters_from_high_side() {
    let mut game = position(P2, &[3, 5], &[(13, P2, 2)], &[P2]);
    let moves = [MoveRequest::new("bar", 22), MoveRequest::new(13, 8)];
    assert_eq!(submit(&mut game, &moves), None);
    assert_eq!(game.points().find_by_number(22).map(|p| p.len()), Some(1));
}

// =============================================================================
// Bearing Off
// =============================================================================

#[test]
fn test_bear_off_with_exact_and_smaller_moves() {
    let mut game = position(P1, &[1, 2], &[(21, P1, 1), (23, P1, 1)], &[]);
    let moves = [MoveRequest::new(23, "off_board"), MoveRequest::new(21, 22)];
    assert_eq!(submit(&mut game, &moves), None);
    assert_eq!(game.off_board().number_of_pieces_owned_by_player(P1), 1);
}

#[test]
fn test_bear_off_with_high_dice() {
    let mut game = position(P1, &[6, 5], &[(20, P1, 1), (22, P1, 1)], &[]);
    let moves = [MoveRequest::new(20, "off_board"), MoveRequest::new(22, "off_board")];
    assert_eq!(submit(&mut game, &moves), None);
    assert_eq!(game.off_board().number_of_pieces_owned_by_player(P1), 2);
}

#[test]
fn test_bear_off_while_bringing_last_piece_home() {
    let mut game = position(P1, &[6, 2], &[(18, P1, 1), (19, P1, 1)], &[]);
    let moves = [MoveRequest::new(18, 20), MoveRequest::new(19, "off_board")];
    assert_eq!(submit(&mut game, &moves), None);
}

#[test]
fn test_bear_off_with_piece_outside_home() {
    let mut game = position(P1, &[6, 2], &[(12, P1, 1), (19, P1, 2)], &[]);
    let moves = [MoveRequest::new(19, "off_board")];
    assert_eq!(submit(&mut game, &moves), Some(ErrorKind::BearOff));
}

#[test]
fn test_player_two_bears_off_toward_zero() {
    let mut game = position(P2, &[3, 4], &[(3, P2, 1), (4, P2, 1)], &[]);
    let moves = [MoveRequest::new(3, "off_board"), MoveRequest::new(4, "off_board")];
    assert_eq!(submit(&mut game, &moves), None);
    assert_eq!(game.off_board().number_of_pieces_owned_by_player(P2), 2);
}

// =============================================================================
// Dice Allocation
// =============================================================================

#[test]
fn test_distances_match_dice() {
    let moves = [MoveRequest::new(1, 4), MoveRequest::new(1, 6)];

    let mut exact = position(P1, &[3, 5], &[(1, P1, 2)], &[]);
    assert_eq!(submit(&mut exact, &moves), None);

    let mut short = position(P1, &[3, 4], &[(1, P1, 2)], &[]);
    assert_eq!(submit(&mut short, &moves), Some(ErrorKind::DiceMismatch));
}

#[test]
fn test_partial_use_of_dice() {
    let mut game = position(P1, &[3, 5], &[(1, P1, 2)], &[]);
    assert_eq!(submit(&mut game, &[MoveRequest::new(1, 4)]), None);
}

#[test]
fn test_too_many_moves() {
    let mut game = position(P1, &[1, 2], &[(1, P1, 3)], &[]);
    let moves = [MoveRequest::new(1, 2), MoveRequest::new(1, 3), MoveRequest::new(1, 2)];
    assert_eq!(submit(&mut game, &moves), Some(ErrorKind::DiceMismatch));
}

#[test]
fn test_doubles_allow_four_moves() {
    let mut game = position(P1, &[3, 3, 3, 3], &[(1, P1, 4)], &[]);
    let moves = vec![MoveRequest::new(1, 4); 4];
    assert_eq!(submit(&mut game, &moves), None);
    assert_eq!(game.points().find_by_number(4).map(|p| p.len()), Some(4));
}

// =============================================================================
// Gate Order
// =============================================================================

#[test]
fn test_gate_order_matches_error_precedence() {
    let kinds: Vec<ErrorKind> = ValidationGate::ORDER.iter().map(|g| g.error_kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ErrorKind::PointNotFound,
            ErrorKind::EmptyPoint,
            ErrorKind::EmptyBar,
            ErrorKind::PointOwnership,
            ErrorKind::Blocked,
            ErrorKind::WrongDirection,
            ErrorKind::PiecesOnBar,
            ErrorKind::BearOff,
            ErrorKind::DiceMismatch,
        ]
    );
}

#[test]
fn test_move_list_validates_without_a_game() {
    let game = position(P1, &[1, 2], &[(1, P1, 2), (3, P2, 2)], &[]);
    let ctx = MoveContext {
        player: P1,
        points: game.points(),
        bar: game.bar(),
        dice: game.dice(),
    };

    let list = MoveList::resolve(&[MoveRequest::new(1, 3), MoveRequest::new(1, 0)], game.points());
    assert_eq!(list.validate(&ctx), Err(ErrorKind::PointNotFound));

    let list = MoveList::resolve(&[MoveRequest::new(1, 3)], game.points());
    assert_eq!(list.validate(&ctx), Err(ErrorKind::Blocked));
    assert!(ValidationGate::Blocked.fails(&list, &ctx));
    assert!(!ValidationGate::DiceMismatch.fails(&list, &ctx));
}
