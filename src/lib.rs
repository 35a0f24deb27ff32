//! # backgammon-engine
//!
//! A rules engine for two-player backgammon: board, dice, move legality
//! and the roll/move turn cycle.
//!
//! ## Design Principles
//!
//! 1. **Whole-list validation**: a turn's moves are judged together, in a
//!    fixed gate order, and the first failing gate is the single reported
//!    cause.
//!
//! 2. **No partial mutation**: a rejected `roll` or `move` leaves the game
//!    untouched and returns `false`; the cause is read from `errors()`.
//!
//! 3. **Injected randomness**: dice roll through a `DiceSource`, seeded
//!    `GameRng` by default or a scripted `LoadedDice` for tests.
//!
//! ## Modules
//!
//! - `core`: pieces, players, RNG, configuration, errors, actions,
//!   snapshots and `GameState`
//! - `dice`: `Die` and `DiceSet`
//! - `board`: `Location`, points, bar and off-board tray
//! - `rules`: moves, combined moves, move lists and the validation gate
//!
//! ## Example
//!
//! ```
//! use backgammon_engine::{GameConfig, GameSnapshot, GameState, LoadedDice, MoveRequest, PlayerNumber};
//!
//! let mut game = GameState::with_dice_source(
//!     &GameSnapshot::default_layout(),
//!     LoadedDice::new([1, 2]),
//!     GameConfig::new(),
//! )
//! .unwrap();
//!
//! assert!(game.roll(PlayerNumber::ONE));
//! assert!(game.move_pieces(
//!     PlayerNumber::ONE,
//!     &[MoveRequest::new(1, 2), MoveRequest::new(1, 3)],
//! ));
//! assert_eq!(game.current_player_number(), PlayerNumber::TWO);
//! ```

pub mod core;
pub mod dice;
pub mod board;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    DieId, Piece, PieceId, PlayerNumber,
    DiceSource, GameRng, GameRngState, LoadedDice,
    GameConfig,
    ErrorKind, GameError, SnapshotError,
    LastChange, LocationId, MoveRequest,
    ContainerSnapshot, DieSnapshot, GameSnapshot, PieceSnapshot, PointSnapshot,
    GameState, Phase,
};

pub use crate::dice::{DiceSet, Die};

pub use crate::board::{Bar, Location, OffBoard, Point, PointSet};

pub use crate::rules::{CombinedMove, Move, MoveContext, MoveList, ValidationGate};
