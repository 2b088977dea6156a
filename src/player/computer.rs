//! Engine-backed player

use super::Player;
use crate::core::{Board, Feedback, Word};
use crate::game::GameError;
use crate::solver::{EngineError, InferenceEngine};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A player driven by the inference engine
///
/// As referee it samples its secret with its own random source (or uses a
/// fixed one); as guesser it narrows its pool from the feedback it receives.
pub struct ComputerPlayer {
    name: String,
    engine: InferenceEngine,
    rng: StdRng,
    fixed_secret: Option<Word>,
}

impl ComputerPlayer {
    /// Create a computer player over `words`, sampling secrets from `rng`
    ///
    /// # Errors
    /// Returns `NoCandidates` if `words` is empty.
    pub fn new(words: Vec<Word>, rng: StdRng) -> Result<Self, EngineError> {
        Ok(Self {
            name: "Computer".to_string(),
            engine: InferenceEngine::new(words)?,
            rng,
            fixed_secret: None,
        })
    }

    /// Create a computer referee that always plays `secret`
    ///
    /// The secret need not appear in any dictionary.
    #[must_use]
    pub fn with_secret(secret: Word) -> Self {
        Self {
            name: "Computer".to_string(),
            engine: InferenceEngine::from_secret(secret.clone()),
            rng: StdRng::seed_from_u64(0),
            fixed_secret: Some(secret),
        }
    }

    /// Rename the player
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub const fn engine(&self) -> &InferenceEngine {
        &self.engine
    }
}

impl Player for ComputerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn pick_secret_word(&mut self) -> Result<usize, GameError> {
        let len = match self.fixed_secret.take() {
            Some(secret) => self.engine.set_secret_word(secret)?,
            None => self.engine.pick_secret_word(&mut self.rng)?,
        };
        Ok(len)
    }

    fn register_secret_length(&mut self, len: usize) -> Result<(), GameError> {
        Ok(self.engine.register_secret_length(len)?)
    }

    fn guess(&mut self, board: &Board) -> Result<u8, GameError> {
        Ok(self.engine.guess(board)?)
    }

    fn check_guess(&mut self, letter: u8) -> Result<Feedback, GameError> {
        Ok(self.engine.check_guess(letter)?)
    }

    fn handle_response(&mut self, letter: u8, feedback: &Feedback) -> Result<(), GameError> {
        Ok(self.engine.handle_response(letter, feedback)?)
    }

    fn conclude(&mut self) {
        self.engine.conclude();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::EngineState;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn referee_with_fixed_secret_reports_positions() {
        let mut referee = ComputerPlayer::with_secret(Word::new("class").unwrap());

        assert_eq!(referee.pick_secret_word().unwrap(), 5);
        assert_eq!(referee.check_guess(b's').unwrap().spots(), &[3, 4]);
        assert!(referee.check_guess(b'z').unwrap().is_miss());
    }

    #[test]
    fn seeded_referee_is_deterministic() {
        let words = ["ekko", "ashe", "bard", "quinn", "fortune", "graves"];
        let mut a = ComputerPlayer::new(words_from_slice(&words), StdRng::seed_from_u64(3)).unwrap();
        let mut b = ComputerPlayer::new(words_from_slice(&words), StdRng::seed_from_u64(3)).unwrap();

        assert_eq!(a.pick_secret_word().unwrap(), b.pick_secret_word().unwrap());
        assert_eq!(a.engine().secret(), b.engine().secret());
    }

    #[test]
    fn guesser_narrows_after_response() {
        let words = words_from_slice(&["dog", "cat", "bug"]);
        let mut guesser = ComputerPlayer::new(words, StdRng::seed_from_u64(0)).unwrap();
        guesser.register_secret_length(3).unwrap();

        let letter = guesser.guess(&Board::new(3)).unwrap();
        assert_eq!(letter, b'g');

        guesser.handle_response(letter, &Feedback::miss(3)).unwrap();
        assert_eq!(guesser.engine().candidates().len(), 1);
    }

    #[test]
    fn conclude_stops_the_engine() {
        let words = words_from_slice(&["cat"]);
        let mut guesser = ComputerPlayer::new(words, StdRng::seed_from_u64(0)).unwrap();
        guesser.register_secret_length(3).unwrap();
        guesser.conclude();

        assert_eq!(guesser.engine().state(), EngineState::Concluded);
        assert!(matches!(
            guesser.guess(&Board::new(3)),
            Err(GameError::Engine(EngineError::NotPlaying(EngineState::Concluded)))
        ));
    }
}
