//! Core domain types for hangman
//!
//! Words, boards and referee feedback. Everything here is pure and validated
//! at construction.

mod board;
mod feedback;
mod word;

pub use board::Board;
pub use feedback::{Feedback, FeedbackError};
pub use word::{Word, WordError};
