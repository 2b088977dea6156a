//! Candidate pool
//!
//! The exclusively-owned set of words still consistent with every piece of
//! feedback. It only ever shrinks.

use super::{EngineError, Exhaustion};
use crate::core::Word;

/// Words still consistent with the feedback received so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    words: Vec<Word>,
}

impl CandidatePool {
    /// Create a pool from an initial word list (any mix of lengths)
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Drop every word whose length differs from `len`
    ///
    /// # Errors
    /// Returns `ExhaustedPool` if no word of that length remains.
    pub fn restrict_to_length(&mut self, len: usize) -> Result<(), EngineError> {
        self.words.retain(|word| word.len() == len);

        if self.words.is_empty() {
            return Err(EngineError::ExhaustedPool(Exhaustion::NoWordOfLength(len)));
        }
        Ok(())
    }

    /// Drop every word matching `predicate`, returning how many were removed
    ///
    /// # Errors
    /// Returns `ExhaustedPool` if the pool ends up empty. The words are gone
    /// either way.
    pub fn remove<F>(&mut self, mut predicate: F) -> Result<usize, EngineError>
    where
        F: FnMut(&Word) -> bool,
    {
        let before = self.words.len();
        self.words.retain(|word| !predicate(word));

        if self.words.is_empty() {
            return Err(EngineError::ExhaustedPool(Exhaustion::Empty));
        }
        Ok(before - self.words.len())
    }

    /// Read-only view for scoring
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check membership by text
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.iter().any(|word| word.text() == text)
    }
}
