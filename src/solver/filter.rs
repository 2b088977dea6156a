//! Feedback filtering
//!
//! Turns one referee report into a survival test for candidate words and
//! applies it to the pool.

use super::{CandidatePool, EngineError, Exhaustion};
use crate::core::{Feedback, Word};

/// Does `word` agree with `feedback` for `letter`?
///
/// - A miss keeps only words without the letter.
/// - A hit keeps words that hold the letter at every reported position and
///   nowhere else, i.e. the total count equals the number of positions.
///
/// # Examples
/// ```
/// use hangman_solver::core::{Feedback, Word};
/// use hangman_solver::solver::survives;
///
/// let hit = Feedback::new([1, 2], 6).unwrap();
/// assert!(survives(&Word::new("rooney").unwrap(), b'o', &hit));
/// assert!(!survives(&Word::new("sloane").unwrap(), b'o', &hit));
/// ```
#[must_use]
pub fn survives(word: &Word, letter: u8, feedback: &Feedback) -> bool {
    if feedback.is_miss() {
        return !word.has_letter(letter);
    }

    feedback
        .spots()
        .iter()
        .all(|&spot| word.char_at(spot) == Some(letter))
        && word.count_of(letter) == feedback.spots().len()
}

/// Remove every candidate that disagrees with `feedback`
///
/// Returns how many words were removed.
///
/// # Errors
/// Returns `ExhaustedPool` when no candidate agrees with the feedback.
pub fn apply(
    pool: &mut CandidatePool,
    letter: u8,
    feedback: &Feedback,
) -> Result<usize, EngineError> {
    pool.remove(|word| !survives(word, letter, feedback))
        .map_err(|_| {
            EngineError::ExhaustedPool(Exhaustion::InconsistentFeedback(char::from(letter)))
        })
}
