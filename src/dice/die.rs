//! A single die.

use crate::core::{DiceSource, DieId};

/// A die showing a face in `1..=6`, or nothing before it is rolled.
///
/// Two dice are equal when they show the same number; identity does not
/// matter, which is what detecting a double needs.
#[derive(Clone, Copy, Debug)]
pub struct Die {
    id: DieId,
    number: Option<u8>,
}

impl Die {
    /// Create a die.
    #[must_use]
    pub const fn new(id: DieId, number: Option<u8>) -> Self {
        Self { id, number }
    }

    /// Create a die that has not been rolled.
    #[must_use]
    pub const fn unset(id: DieId) -> Self {
        Self::new(id, None)
    }

    /// The die identifier.
    #[must_use]
    pub const fn id(&self) -> DieId {
        self.id
    }

    /// The face shown, if rolled.
    #[must_use]
    pub const fn number(&self) -> Option<u8> {
        self.number
    }

    /// Roll the die.
    pub fn roll<S: DiceSource + ?Sized>(&mut self, source: &mut S) -> u8 {
        let face = source.roll_die();
        self.number = Some(face);
        face
    }

    /// Clear the face.
    pub fn reset(&mut self) {
        self.number = None;
    }
}

impl PartialEq for Die {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Die {}
