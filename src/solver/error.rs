//! Engine error kinds

use super::EngineState;
use crate::core::FeedbackError;
use thiserror::Error;

/// Why the candidate pool ran dry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Exhaustion {
    #[error("no word of length {0} in the word list")]
    NoWordOfLength(usize),
    #[error("feedback for '{0}' contradicts every remaining candidate")]
    InconsistentFeedback(char),
    #[error("no candidates left to score")]
    Empty,
}

/// Errors surfaced by the inference engine
///
/// All of these are fatal to the current game; none are recovered by guessing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("candidate pool exhausted: {0}")]
    ExhaustedPool(Exhaustion),
    #[error("invalid feedback: {0}")]
    InvalidFeedback(#[from] FeedbackError),
    #[error("the word list contains no usable words")]
    NoCandidates,
    #[error("engine is {0}, not playing")]
    NotPlaying(EngineState),
    #[error("no secret word has been picked")]
    NoSecret,
    #[error("every slot on the board is already revealed")]
    NothingToGuess,
}
