//! Host-facing action representation.
//!
//! A host submits moves as raw `{from, to}` pairs where each end is a
//! point number, the token `"bar"` or the token `"off_board"`. These are
//! kept raw (`LocationId`) until validation resolves them against the
//! board, so that unknown identifiers become a `PointNotFound` rejection
//! instead of a parse failure.
//!
//! ## Example
//!
//! ```
//! use backgammon_engine::core::{LocationId, MoveRequest};
//!
//! let enter = MoveRequest::new("bar", 3);
//! assert_eq!(enter.from, LocationId::Bar);
//! assert_eq!(enter.to, LocationId::Point(3));
//!
//! let parsed: LocationId = "off_board".into();
//! assert_eq!(parsed, LocationId::OffBoard);
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerNumber;

/// Raw identifier of one end of a move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawLocation", into = "RawLocation")]
pub enum LocationId {
    /// A point number (not yet checked against the board).
    Point(i32),
    /// The bar.
    Bar,
    /// Off the board.
    OffBoard,
    /// Text that names nothing on the board.
    Unrecognized(String),
}

impl LocationId {
    /// Token naming the bar.
    pub const BAR_TOKEN: &'static str = "bar";

    /// Token naming the off-board area.
    pub const OFF_BOARD_TOKEN: &'static str = "off_board";
}

impl From<i32> for LocationId {
    fn from(number: i32) -> Self {
        Self::Point(number)
    }
}

impl From<u8> for LocationId {
    fn from(number: u8) -> Self {
        Self::Point(i32::from(number))
    }
}

impl From<&str> for LocationId {
    fn from(text: &str) -> Self {
        match text.trim() {
            Self::BAR_TOKEN => Self::Bar,
            Self::OFF_BOARD_TOKEN => Self::OffBoard,
            other => other
                .parse::<i32>()
                .map_or_else(|_| Self::Unrecognized(text.to_string()), Self::Point),
        }
    }
}

impl From<String> for LocationId {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl std::str::FromStr for LocationId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationId::Point(number) => write!(f, "{number}"),
            LocationId::Bar => f.write_str(Self::BAR_TOKEN),
            LocationId::OffBoard => f.write_str(Self::OFF_BOARD_TOKEN),
            LocationId::Unrecognized(text) => f.write_str(text),
        }
    }
}

/// Wire shape of a `LocationId`: a bare number or a token string.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawLocation {
    Number(i32),
    Text(String),
}

impl From<RawLocation> for LocationId {
    fn from(raw: RawLocation) -> Self {
        match raw {
            RawLocation::Number(number) => LocationId::Point(number),
            RawLocation::Text(text) => LocationId::from(text),
        }
    }
}

impl From<LocationId> for RawLocation {
    fn from(id: LocationId) -> Self {
        match id {
            LocationId::Point(number) => RawLocation::Number(number),
            other => RawLocation::Text(other.to_string()),
        }
    }
}

/// One submitted piece move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Where the piece starts.
    pub from: LocationId,
    /// Where the piece ends.
    pub to: LocationId,
}

impl MoveRequest {
    /// Create a move request from anything naming a location.
    #[must_use]
    pub fn new(from: impl Into<LocationId>, to: impl Into<LocationId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// The most recent successful action, kept for host notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum LastChange {
    /// Dice were rolled.
    Roll {
        player_number: PlayerNumber,
        /// Dice faces after the roll (two or four entries).
        dice: Vec<Option<u8>>,
    },
    /// Pieces were moved.
    Move {
        player_number: PlayerNumber,
        list: Vec<MoveRequest>,
    },
}

impl LastChange {
    /// The player who acted.
    #[must_use]
    pub fn player_number(&self) -> PlayerNumber {
        match self {
            LastChange::Roll { player_number, .. } | LastChange::Move { player_number, .. } => {
                *player_number
            }
        }
    }
}
