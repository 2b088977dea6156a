//! Player roles
//!
//! Every participant, human or engine, exposes the same capabilities so the
//! game can seat either one as guesser or referee.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{Console, HumanPlayer, LineReader};

use crate::core::{Board, Feedback};
use crate::game::GameError;
use std::io::{Stdout, Write};

/// Capabilities a participant offers to the game
pub trait Player {
    /// Display name
    fn name(&self) -> &str;

    /// Choose a secret word and return its length (referee role)
    ///
    /// # Errors
    /// Returns `GameError` if the player cannot commit to a word.
    fn pick_secret_word(&mut self) -> Result<usize, GameError>;

    /// Learn the length of the opponent's secret (guesser role)
    ///
    /// # Errors
    /// Returns `GameError` if the player cannot play a word of that length.
    fn register_secret_length(&mut self, len: usize) -> Result<(), GameError>;

    /// Propose the next letter (guesser role)
    ///
    /// # Errors
    /// Returns `GameError` if no letter can be produced.
    fn guess(&mut self, board: &Board) -> Result<u8, GameError>;

    /// Report where `letter` occurs in the secret (referee role)
    ///
    /// # Errors
    /// Returns `GameError` if no valid report can be produced.
    fn check_guess(&mut self, letter: u8) -> Result<Feedback, GameError>;

    /// Receive the referee's report for a guessed letter (guesser role)
    ///
    /// # Errors
    /// Returns `GameError` if the report cannot be absorbed.
    fn handle_response(&mut self, letter: u8, feedback: &Feedback) -> Result<(), GameError>;

    /// The game is over
    fn conclude(&mut self) {}
}

/// Enum wrapper for both player variants
///
/// Allows choosing roles at runtime while keeping static dispatch.
pub enum PlayerKind<R: LineReader = Console, W: Write = Stdout> {
    Human(HumanPlayer<R, W>),
    Computer(ComputerPlayer),
}

impl<R: LineReader, W: Write> Player for PlayerKind<R, W> {
    fn name(&self) -> &str {
        match self {
            Self::Human(p) => p.name(),
            Self::Computer(p) => p.name(),
        }
    }

    fn pick_secret_word(&mut self) -> Result<usize, GameError> {
        match self {
            Self::Human(p) => p.pick_secret_word(),
            Self::Computer(p) => p.pick_secret_word(),
        }
    }

    fn register_secret_length(&mut self, len: usize) -> Result<(), GameError> {
        match self {
            Self::Human(p) => p.register_secret_length(len),
            Self::Computer(p) => p.register_secret_length(len),
        }
    }

    fn guess(&mut self, board: &Board) -> Result<u8, GameError> {
        match self {
            Self::Human(p) => p.guess(board),
            Self::Computer(p) => p.guess(board),
        }
    }

    fn check_guess(&mut self, letter: u8) -> Result<Feedback, GameError> {
        match self {
            Self::Human(p) => p.check_guess(letter),
            Self::Computer(p) => p.check_guess(letter),
        }
    }

    fn handle_response(&mut self, letter: u8, feedback: &Feedback) -> Result<(), GameError> {
        match self {
            Self::Human(p) => p.handle_response(letter, feedback),
            Self::Computer(p) => p.handle_response(letter, feedback),
        }
    }

    fn conclude(&mut self) {
        match self {
            Self::Human(p) => p.conclude(),
            Self::Computer(p) => p.conclude(),
        }
    }
}
