//! Dice: single dice and the per-turn dice set.
//!
//! Two dice are rolled at the start of every move phase. A double
//! duplicates the set so four move distances are available, and the set
//! collapses back to two unset dice when the turn ends.

pub mod die;
pub mod set;

pub use die::Die;
pub use set::DiceSet;
