//! Deterministic dice randomness.
//!
//! ## Key Features
//!
//! - **Injectable**: the game never reaches for a global generator; dice
//!   are rolled through the `DiceSource` trait
//! - **Deterministic**: same seed produces the same rolls
//! - **Forkable**: hosts exploring lines of play can branch the generator
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use backgammon_engine::core::{DiceSource, GameRng, LoadedDice};
//!
//! let mut rng = GameRng::new(42);
//! let value = rng.roll_die();
//! assert!((1..=6).contains(&value));
//!
//! // Scripted rolls for tests and replays
//! let mut loaded = LoadedDice::new([3, 3]);
//! assert_eq!(loaded.roll_die(), 3);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Anything that can produce a die face in `1..=6`.
pub trait DiceSource {
    /// Produce the next die face.
    fn roll_die(&mut self) -> u8;
}

/// Deterministic RNG backing the default dice source.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl DiceSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// A dice source that replays a fixed script of faces, cycling forever.
///
/// Faces outside `1..=6` are clamped into range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl LoadedDice {
    /// Create a source replaying `faces` in order.
    ///
    /// # Panics
    ///
    /// Panics if `faces` is empty.
    #[must_use]
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let faces: Vec<u8> = faces.into_iter().map(|f| f.clamp(1, 6)).collect();
        assert!(!faces.is_empty(), "LoadedDice needs at least one face");
        Self { faces, cursor: 0 }
    }

    /// Number of faces handed out so far.
    #[must_use]
    pub fn rolls(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for LoadedDice {
    fn roll_die(&mut self) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

impl<S: DiceSource + ?Sized> DiceSource for &mut S {
    fn roll_die(&mut self) -> u8 {
        (**self).roll_die()
    }
}
