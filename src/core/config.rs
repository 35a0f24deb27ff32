//! Game configuration and board constants.
//!
//! A game is configured once, when it is built:
//! - `seed`: seed of the built-in `GameRng` dice source
//! - message overrides: replace the default text of any `ErrorKind`
//!
//! The board itself is fixed by the rules of backgammon and lives in the
//! constants below.

use rustc_hash::FxHashMap;

use super::error::{ErrorKind, GameError};

/// Number of points on the board.
pub const POINT_COUNT: u8 = 24;

/// Pieces each player starts with. Bearing all of them off wins.
pub const PIECES_PER_PLAYER: usize = 15;

/// Effective position of the bar for player 1 (one below point 1).
pub const BAR_POSITION_PLAYER_ONE: i8 = 0;

/// Effective position of the bar for player 2 (one above point 24).
pub const BAR_POSITION_PLAYER_TWO: i8 = 25;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use backgammon_engine::core::{ErrorKind, GameConfig};
///
/// let config = GameConfig::new()
///     .with_seed(7)
///     .with_message(ErrorKind::Blocked, "That point is closed.");
///
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.error(ErrorKind::Blocked).message(), "That point is closed.");
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameConfig {
    /// Seed for the built-in dice source.
    pub seed: u64,

    /// Per-kind replacements for the default error messages.
    pub messages: FxHashMap<ErrorKind, String>,
}

impl GameConfig {
    /// Create a configuration with seed 0 and default messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Override the message reported for `kind`.
    #[must_use]
    pub fn with_message(mut self, kind: ErrorKind, message: impl Into<String>) -> Self {
        self.messages.insert(kind, message.into());
        self
    }

    /// Build the error reported for `kind`, honouring overrides.
    #[must_use]
    pub fn error(&self, kind: ErrorKind) -> GameError {
        match self.messages.get(&kind) {
            Some(message) => GameError::with_message(kind, message.clone()),
            None => GameError::new(kind),
        }
    }
}
