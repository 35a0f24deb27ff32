//! Core engine types: pieces, players, dice randomness, configuration,
//! errors, host actions, snapshots and the game state itself.
//!
//! Board containers live in `board`, dice in `dice` and move legality in
//! `rules`; this module ties them together.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;
pub mod snapshot;
pub mod state;

pub use entity::{DieId, Piece, PieceId};
pub use player::PlayerNumber;
pub use rng::{DiceSource, GameRng, GameRngState, LoadedDice};
pub use config::GameConfig;
pub use error::{ErrorKind, GameError, SnapshotError};
pub use action::{LastChange, LocationId, MoveRequest};
pub use snapshot::{ContainerSnapshot, DieSnapshot, GameSnapshot, PieceSnapshot, PointSnapshot};
pub use state::{GameState, Phase};
