//! The board: 24 points, the bar and the off-board tray.
//!
//! Each container exclusively owns the pieces currently inside it. A
//! move transfers one piece between two containers; nothing is ever
//! copied.
//!
//! ## Key Types
//!
//! - `Location`: closed variant over Point / Bar / OffBoard
//! - `Point`: a numbered stack of pieces
//! - `PointSet`: the ordered points, with reachability queries
//! - `Bar`: pieces that were hit
//! - `OffBoard`: pieces that were borne off

pub mod location;
pub mod point;
pub mod point_set;
pub mod bar;
pub mod off_board;

pub use location::Location;
pub use point::Point;
pub use point_set::PointSet;
pub use bar::Bar;
pub use off_board::OffBoard;
