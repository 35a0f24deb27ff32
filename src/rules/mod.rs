//! Move legality.
//!
//! A submitted move list is judged as a whole, never move by move:
//!
//! - `Move`: one origin -> destination transition, resolved against the board
//! - `CombinedMove`: consecutive moves of the same piece, chained into legs
//! - `MoveList`: the submission, with every legality query
//! - `ValidationGate`: the ordered checks; the first failing gate is the
//!   single reported cause

pub mod movement;
pub mod combined;
pub mod move_list;
pub mod gate;

pub use movement::Move;
pub use combined::CombinedMove;
pub use move_list::{MoveList, MoveContext};
pub use gate::ValidationGate;
