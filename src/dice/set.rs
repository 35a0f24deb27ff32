//! The dice set rolled each turn.

use smallvec::SmallVec;

use super::die::Die;
use crate::core::{DiceSource, DieId};

/// The dice available this turn: two dice, or four after a double.
///
/// ## Example
///
/// ```
/// use backgammon_engine::core::LoadedDice;
/// use backgammon_engine::dice::DiceSet;
///
/// let mut dice = DiceSet::new();
/// dice.roll(&mut LoadedDice::new([5, 5]));
/// assert_eq!(dice.len(), 4);
///
/// dice.reset();
/// assert_eq!(dice.len(), 2);
/// assert!(!dice.is_rolled());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiceSet {
    dice: SmallVec<[Die; 4]>,
}

impl DiceSet {
    /// Two unset dice with ids 1 and 2.
    #[must_use]
    pub fn new() -> Self {
        Self::from_dice([Die::unset(DieId(1)), Die::unset(DieId(2))])
    }

    /// Build a set from existing dice.
    #[must_use]
    pub fn from_dice(dice: impl IntoIterator<Item = Die>) -> Self {
        Self {
            dice: dice.into_iter().collect(),
        }
    }

    /// The dice in order.
    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Number of dice (2, or 4 after a double).
    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Check if the set holds no dice at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Check if every die shows a face.
    #[must_use]
    pub fn is_rolled(&self) -> bool {
        !self.dice.is_empty() && self.dice.iter().all(|d| d.number().is_some())
    }

    /// Check if the set holds a double (the first and last die agree).
    #[must_use]
    pub fn is_double(&self) -> bool {
        match (self.dice.first(), self.dice.last()) {
            (Some(first), Some(last)) => self.dice.len() > 1 && first.number().is_some() && first == last,
            _ => false,
        }
    }

    /// Find a die showing `number`.
    #[must_use]
    pub fn find_by_number(&self, number: u8) -> Option<&Die> {
        self.dice.iter().find(|d| d.number() == Some(number))
    }

    /// Faces of every die, `None` for unset dice.
    #[must_use]
    pub fn numbers(&self) -> SmallVec<[Option<u8>; 4]> {
        self.dice.iter().map(Die::number).collect()
    }

    /// Faces of the rolled dice only.
    pub fn rolled(&self) -> impl Iterator<Item = u8> + '_ {
        self.dice.iter().filter_map(Die::number)
    }

    /// Roll two dice, duplicating the set when they show a double.
    ///
    /// A set left at four dice is collapsed to two before rolling.
    pub fn roll<S: DiceSource + ?Sized>(&mut self, source: &mut S) {
        self.dice.truncate(2);
        for die in &mut self.dice {
            die.roll(source);
        }

        if self.is_double() {
            let copy: SmallVec<[Die; 4]> = self.dice.clone();
            self.dice.extend(copy);
        }
    }

    /// Clear every face and collapse back to two dice.
    pub fn reset(&mut self) {
        for die in &mut self.dice {
            die.reset();
        }
        self.dice.truncate(2);
    }
}

impl Default for DiceSet {
    fn default() -> Self {
        Self::new()
    }
}
