//! Letter selection strategies
//!
//! Defines the `GuessStrategy` trait and the letter-frequency heuristic.

use super::{EngineError, Exhaustion};
use crate::core::{Board, Word};
use rustc_hash::FxHashMap;

/// A strategy for choosing the next letter to guess
pub trait GuessStrategy {
    /// Pick a letter given the board and the current candidates
    ///
    /// # Errors
    /// Returns `ExhaustedPool` when there are no candidates to score.
    fn select_letter(&self, board: &Board, candidates: &[Word]) -> Result<u8, EngineError>;
}

/// Aggregated letter totals with an explicit zero default
#[derive(Debug, Default, Clone)]
pub struct LetterCounts(FxHashMap<u8, usize>);

impl LetterCounts {
    /// Count for `letter`, zero when it was never seen
    #[must_use]
    pub fn get_or_zero(&self, letter: u8) -> usize {
        self.0.get(&letter).copied().unwrap_or_default()
    }

    fn add(&mut self, letter: u8) {
        *self.0.entry(letter).or_insert(0) += 1;
    }

    /// Letters ordered by ascending count, ties by descending letter
    ///
    /// The last entry is therefore the most frequent letter, and among equal
    /// counts the alphabetically earliest one.
    #[must_use]
    pub fn ranked(&self) -> Vec<(u8, usize)> {
        let mut ranked: Vec<(u8, usize)> = self.0.iter().map(|(&l, &c)| (l, c)).collect();
        ranked.sort_unstable_by(|(l1, c1), (l2, c2)| c1.cmp(c2).then(l2.cmp(l1)));
        ranked
    }
}

/// Letter-frequency heuristic over unrevealed positions
///
/// Every candidate contributes one count per letter sitting in a slot the
/// board has not revealed yet. On a fresh board that is every slot, so the
/// first guess scores raw occurrence totals, repeats included. Letters that
/// were already guessed are not excluded.
#[derive(Debug, Default, Clone, Copy)]
pub struct LetterFrequency;

impl LetterFrequency {
    /// Aggregate letter totals over the unrevealed slots of every candidate
    #[must_use]
    pub fn count(board: &Board, candidates: &[Word]) -> LetterCounts {
        let mut counts = LetterCounts::default();

        for word in candidates {
            for (index, &letter) in word.chars().iter().enumerate() {
                if !board.is_revealed(index) {
                    counts.add(letter);
                }
            }
        }

        counts
    }
}

impl GuessStrategy for LetterFrequency {
    fn select_letter(&self, board: &Board, candidates: &[Word]) -> Result<u8, EngineError> {
        if candidates.is_empty() {
            return Err(EngineError::ExhaustedPool(Exhaustion::Empty));
        }

        Self::count(board, candidates)
            .ranked()
            .last()
            .map(|&(letter, _)| letter)
            .ok_or(EngineError::NothingToGuess)
    }
}
