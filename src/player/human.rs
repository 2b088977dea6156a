//! Console-backed player
//!
//! Prompts a person for every decision. Input and output are generic so the
//! prompts can be scripted in tests.

use super::Player;
use crate::core::{Board, Feedback};
use crate::game::GameError;
use crate::solver::EngineError;
use rustc_hash::FxHashSet;
use std::io::{self, BufRead, Stdout, Write};

/// Source of input lines
pub trait LineReader {
    /// Read one line into `buf`, returning 0 at end of input
    ///
    /// # Errors
    /// Returns any underlying I/O error.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<R: BufRead> LineReader for R {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Standard input, locked only for the duration of each read
///
/// Two human players can share the terminal without holding the lock.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl LineReader for Console {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::stdin().read_line(buf)
    }
}

/// A person at the keyboard
pub struct HumanPlayer<R: LineReader = Console, W: Write = Stdout> {
    name: String,
    input: R,
    output: W,
    guesses: FxHashSet<u8>,
    secret_len: Option<usize>,
}

impl HumanPlayer {
    /// A human player on the terminal
    #[must_use]
    pub fn console(name: impl Into<String>) -> Self {
        Self::new(name, Console, io::stdout())
    }
}

impl<R: LineReader, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            guesses: FxHashSet::default(),
            secret_len: None,
        }
    }

    /// Consume the player and return its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: LineReader, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn pick_secret_word(&mut self) -> Result<usize, GameError> {
        let question = format!(
            "{}, enter the length of the secret word that you would like the other player to guess:",
            self.name
        );
        let mut answer = self.prompt(&question)?;

        loop {
            match answer.parse::<usize>() {
                Ok(len) if len > 0 => {
                    self.secret_len = Some(len);
                    return Ok(len);
                }
                _ => answer = self.prompt("Please enter a positive whole number:")?,
            }
        }
    }

    fn register_secret_length(&mut self, len: usize) -> Result<(), GameError> {
        self.guesses.clear();
        writeln!(self.output, "The secret word has {len} letters.")?;
        Ok(())
    }

    fn guess(&mut self, board: &Board) -> Result<u8, GameError> {
        writeln!(self.output, "{board}")?;
        let question = format!("Hi {}, what letter would you like to guess?", self.name);
        let mut answer = self.prompt(&question)?.to_lowercase();

        loop {
            let letter = match answer.as_bytes() {
                [letter] if letter.is_ascii_lowercase() => Some(*letter),
                _ => None,
            };

            answer = match letter {
                Some(letter) if self.guesses.insert(letter) => return Ok(letter),
                Some(_) => self.prompt(
                    "You've already tried guessing that. Please enter a different letter.",
                )?,
                None => self.prompt("Please enter a single letter:")?,
            }
            .to_lowercase();
        }
    }

    fn check_guess(&mut self, letter: u8) -> Result<Feedback, GameError> {
        let len = self.secret_len.ok_or(EngineError::NoSecret)?;

        let question = format!(
            "The other player has guessed the letter \"{}\".\n\
             Please enter the numbered positions (left to right, starting at 0) where it appears, e.g. 0,1 or 2,3.\n\
             If no positions match, leave this blank and press enter.",
            char::from(letter).to_ascii_uppercase()
        );
        let mut answer = self.prompt(&question)?;

        loop {
            match Feedback::parse(&answer, len) {
                Ok(feedback) => return Ok(feedback),
                Err(e) => {
                    answer = self.prompt(&format!("That doesn't work ({e}). Please try again:"))?;
                }
            }
        }
    }

    fn handle_response(&mut self, _letter: u8, feedback: &Feedback) -> Result<(), GameError> {
        if feedback.is_miss() {
            writeln!(self.output, "D'oh! Your guess wasn't correct this time but try again.")?;
        } else {
            writeln!(self.output, "Eureka! The letter you guessed matches!")?;
        }
        Ok(())
    }
}
