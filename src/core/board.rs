//! Board state as seen by the guesser
//!
//! One slot per letter of the secret word, each either revealed or not.

use super::Feedback;
use std::fmt;

/// Per-slot reveal state of the secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    slots: Vec<Option<u8>>,
}

impl Board {
    /// Create a board with `len` unrevealed slots
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<u8>] {
        &self.slots
    }

    /// True if `index` holds a revealed letter; out-of-range is unrevealed
    #[inline]
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    /// True before any letter has been revealed
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// True once every slot is revealed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of slots still hidden
    #[must_use]
    pub fn unrevealed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Write `letter` into every reported position
    ///
    /// Feedback is validated on construction; positions beyond this board
    /// (feedback for a different length) are ignored.
    pub fn reveal(&mut self, letter: u8, feedback: &Feedback) {
        for &index in feedback.spots() {
            if let Some(slot) = self.slots.get_mut(index) {
                *slot = Some(letter);
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.map_or('_', char::from))?;
        }
        Ok(())
    }
}
