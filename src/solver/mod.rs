//! Hangman guessing engine
//!
//! Candidate pool, letter selection, feedback filtering and the engine that
//! ties them together.

mod engine;
mod error;
pub mod filter;
mod pool;
pub mod strategy;

pub use engine::{EngineState, InferenceEngine};
pub use error::{EngineError, Exhaustion};
pub use filter::survives;
pub use pool::CandidatePool;
pub use strategy::{GuessStrategy, LetterCounts, LetterFrequency};
