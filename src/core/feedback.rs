//! Referee feedback for a single guessed letter
//!
//! Feedback lists the board indices where the guessed letter occurs. An empty
//! list means the letter is absent. Values can only be built through
//! validation, so out-of-range or repeated indices never reach the filter.

use super::Word;
use std::fmt;
use thiserror::Error;

/// Reasons a feedback report is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("position {index} is outside a word of length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("position {0} was reported more than once")]
    Duplicate(usize),
    #[error("could not read a position from {0:?}")]
    Unparseable(String),
    #[error("feedback is for a word of length {got}, expected {expected}")]
    LengthMismatch { expected: usize, got: usize },
}

/// Matched positions for one guessed letter, sorted and duplicate-free
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    spots: Vec<usize>,
    word_len: usize,
}

impl Feedback {
    /// Validate reported positions against the secret word's length
    ///
    /// # Errors
    /// Returns `FeedbackError::OutOfRange` for an index `>= word_len` and
    /// `FeedbackError::Duplicate` when an index appears twice.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Feedback;
    ///
    /// let feedback = Feedback::new([2, 0], 3).unwrap();
    /// assert_eq!(feedback.spots(), &[0, 2]);
    ///
    /// assert!(Feedback::new([3], 3).is_err());
    /// assert!(Feedback::new([1, 1], 3).is_err());
    /// ```
    pub fn new(
        spots: impl IntoIterator<Item = usize>,
        word_len: usize,
    ) -> Result<Self, FeedbackError> {
        let mut spots: Vec<usize> = spots.into_iter().collect();

        if let Some(&index) = spots.iter().find(|&&index| index >= word_len) {
            return Err(FeedbackError::OutOfRange {
                index,
                len: word_len,
            });
        }

        spots.sort_unstable();
        if let Some(pair) = spots.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(FeedbackError::Duplicate(pair[0]));
        }

        Ok(Self { spots, word_len })
    }

    /// Feedback reporting that the letter does not occur
    #[must_use]
    pub const fn miss(word_len: usize) -> Self {
        Self {
            spots: Vec::new(),
            word_len,
        }
    }

    /// Truthful feedback for `letter` against a known secret
    #[must_use]
    pub fn from_secret(secret: &Word, letter: u8) -> Self {
        Self {
            spots: secret.positions_of(letter).to_vec(),
            word_len: secret.len(),
        }
    }

    /// Parse a comma-separated list of positions such as `"0, 2"`
    ///
    /// Blank input means no matches.
    ///
    /// # Errors
    /// Returns `FeedbackError::Unparseable` for anything that is not a
    /// non-negative integer, plus the errors of [`Feedback::new`].
    pub fn parse(input: &str, word_len: usize) -> Result<Self, FeedbackError> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Ok(Self::miss(word_len));
        }

        let spots = compact
            .split(',')
            .map(|part| {
                part.parse::<usize>()
                    .map_err(|_| FeedbackError::Unparseable(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(spots, word_len)
    }

    /// Matched positions in ascending order
    #[inline]
    #[must_use]
    pub fn spots(&self) -> &[usize] {
        &self.spots
    }

    /// True when the letter does not occur at all
    #[inline]
    #[must_use]
    pub fn is_miss(&self) -> bool {
        self.spots.is_empty()
    }

    /// Length of the word this feedback was validated against
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spots: Vec<String> = self.spots.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", spots.join(", "))
    }
}
