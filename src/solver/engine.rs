//! Main hangman inference engine

use super::strategy::{GuessStrategy, LetterFrequency};
use super::{CandidatePool, EngineError, filter};
use crate::core::{Board, Feedback, FeedbackError, Word};
use log::{debug, info};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Lifecycle of an engine within one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No secret length known yet
    Uncommitted,
    /// Length committed; guesses and feedback are serviced
    Playing,
    /// Feedback contradicted every candidate
    Exhausted,
    /// The orchestrator ended the game
    Concluded,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uncommitted => "uncommitted",
            Self::Playing => "playing",
            Self::Exhausted => "exhausted",
            Self::Concluded => "concluded",
        };
        f.write_str(name)
    }
}

/// Hangman inference engine
///
/// Owns the candidate pool and the letters guessed so far, delegates letter
/// choice to a strategy and narrows the pool after each feedback.
#[derive(Debug, Clone)]
pub struct InferenceEngine<S: GuessStrategy = LetterFrequency> {
    strategy: S,
    pool: CandidatePool,
    secret: Option<Word>,
    board: Board,
    guessed: FxHashSet<u8>,
    state: EngineState,
}

impl InferenceEngine<LetterFrequency> {
    /// Create an engine using the letter-frequency heuristic
    ///
    /// # Errors
    /// Returns `NoCandidates` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, EngineError> {
        Self::with_strategy(LetterFrequency, words)
    }

    /// Create a referee engine whose only word is `secret`
    #[must_use]
    pub fn from_secret(secret: Word) -> Self {
        Self {
            strategy: LetterFrequency,
            pool: CandidatePool::new(vec![secret]),
            secret: None,
            board: Board::new(0),
            guessed: FxHashSet::default(),
            state: EngineState::Uncommitted,
        }
    }
}

impl<S: GuessStrategy> InferenceEngine<S> {
    /// Create an engine with a custom strategy
    ///
    /// # Errors
    /// Returns `NoCandidates` if `words` is empty.
    pub fn with_strategy(strategy: S, words: Vec<Word>) -> Result<Self, EngineError> {
        if words.is_empty() {
            return Err(EngineError::NoCandidates);
        }

        Ok(Self {
            strategy,
            pool: CandidatePool::new(words),
            secret: None,
            board: Board::new(0),
            guessed: FxHashSet::default(),
            state: EngineState::Uncommitted,
        })
    }

    /// Sample a private secret word and commit to its length
    ///
    /// # Errors
    /// Returns `NotPlaying` outside the `Uncommitted` state.
    pub fn pick_secret_word<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, EngineError> {
        self.require(EngineState::Uncommitted)?;

        let secret = self
            .pool
            .snapshot()
            .choose(rng)
            .cloned()
            .ok_or(EngineError::NoCandidates)?;
        let len = secret.len();

        debug!("picked a secret of length {len}");
        self.secret = Some(secret);
        self.commit(len)?;
        Ok(len)
    }

    /// Fix a known secret instead of sampling one
    ///
    /// # Errors
    /// Returns `NotPlaying` outside the `Uncommitted` state.
    pub fn set_secret_word(&mut self, secret: Word) -> Result<usize, EngineError> {
        self.require(EngineState::Uncommitted)?;

        let len = secret.len();
        self.secret = Some(secret);
        self.commit(len)?;
        Ok(len)
    }

    /// Learn the opponent's secret length and restrict the pool to it
    ///
    /// Repeating the call with the same length is harmless.
    ///
    /// # Errors
    /// Returns `ExhaustedPool` if no word has that length, `NotPlaying` once
    /// the engine has reached a terminal state, and `InvalidFeedback` when a
    /// different length was already committed.
    pub fn register_secret_length(&mut self, len: usize) -> Result<(), EngineError> {
        match self.state {
            EngineState::Uncommitted => self.commit(len),
            EngineState::Playing if self.board.len() == len => {
                self.pool.restrict_to_length(len)
            }
            EngineState::Playing => Err(FeedbackError::LengthMismatch {
                expected: self.board.len(),
                got: len,
            }
            .into()),
            state => Err(EngineError::NotPlaying(state)),
        }
    }

    fn commit(&mut self, len: usize) -> Result<(), EngineError> {
        if let Err(e) = self.pool.restrict_to_length(len) {
            self.state = EngineState::Exhausted;
            return Err(e);
        }

        self.board = Board::new(len);
        self.state = EngineState::Playing;
        info!(
            "committed to length {len}: {} candidates",
            self.pool.len()
        );
        Ok(())
    }

    /// Choose the next letter for the given board
    ///
    /// # Errors
    /// Returns `NotPlaying` outside the `Playing` state, or the strategy's
    /// error when the pool cannot be scored.
    pub fn guess(&self, board: &Board) -> Result<u8, EngineError> {
        self.require(EngineState::Playing)?;
        self.strategy.select_letter(board, self.pool.snapshot())
    }

    /// Choose the next letter using the engine's own board
    ///
    /// # Errors
    /// Same as [`InferenceEngine::guess`].
    pub fn next_guess(&self) -> Result<u8, EngineError> {
        self.guess(&self.board)
    }

    /// Report where `letter` occurs in the private secret
    ///
    /// # Errors
    /// Returns `NoSecret` if this engine never picked a secret.
    pub fn check_guess(&self, letter: u8) -> Result<Feedback, EngineError> {
        self.secret
            .as_ref()
            .map(|secret| Feedback::from_secret(secret, letter))
            .ok_or(EngineError::NoSecret)
    }

    /// Narrow the pool with the referee's answer for `letter`
    ///
    /// # Errors
    /// Returns `InvalidFeedback` if the feedback was validated against a
    /// different word length, `NotPlaying` outside `Playing`, and
    /// `ExhaustedPool` (moving to `Exhausted`) if no candidate survives.
    pub fn handle_response(&mut self, letter: u8, feedback: &Feedback) -> Result<(), EngineError> {
        self.require(EngineState::Playing)?;

        if feedback.word_len() != self.board.len() {
            return Err(FeedbackError::LengthMismatch {
                expected: self.board.len(),
                got: feedback.word_len(),
            }
            .into());
        }

        self.guessed.insert(letter);
        let before = self.pool.len();

        match filter::apply(&mut self.pool, letter, feedback) {
            Ok(removed) => {
                debug!(
                    "'{}' {feedback}: removed {removed} of {before}, {} left",
                    char::from(letter),
                    self.pool.len()
                );
                self.board.reveal(letter, feedback);
                Ok(())
            }
            Err(e) => {
                self.state = EngineState::Exhausted;
                Err(e)
            }
        }
    }

    /// Mark the game as over; later guesses are refused
    pub fn conclude(&mut self) {
        if self.state != EngineState::Exhausted {
            self.state = EngineState::Concluded;
        }
    }

    fn require(&self, expected: EngineState) -> Result<(), EngineError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(EngineError::NotPlaying(self.state))
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// Words still consistent with all feedback
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        self.pool.snapshot()
    }

    /// The engine's own view of the board
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Whether `letter` has already been guessed this game
    #[must_use]
    pub fn has_guessed(&self, letter: u8) -> bool {
        self.guessed.contains(&letter)
    }

    /// Letters guessed so far, in alphabetical order
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<u8> {
        let mut letters: Vec<u8> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// The secret word, once picked
    #[must_use]
    pub const fn secret(&self) -> Option<&Word> {
        self.secret.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Exhaustion;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn engine(words: &[&str]) -> InferenceEngine {
        InferenceEngine::new(words_from_slice(words)).unwrap()
    }

    fn texts<S: GuessStrategy>(engine: &InferenceEngine<S>) -> Vec<&str> {
        engine.candidates().iter().map(Word::text).collect()
    }

    #[test]
    fn empty_word_list_is_rejected() {
        assert_eq!(
            InferenceEngine::new(Vec::new()).unwrap_err(),
            EngineError::NoCandidates
        );
    }

    #[test]
    fn starts_uncommitted_and_refuses_to_guess() {
        let engine = engine(&["dog", "cat"]);
        assert_eq!(engine.state(), EngineState::Uncommitted);
        assert_eq!(
            engine.guess(&Board::new(3)),
            Err(EngineError::NotPlaying(EngineState::Uncommitted))
        );
    }

    #[test]
    fn pick_secret_restricts_to_its_length() {
        let mut engine = engine(&["bueller", "sloane", "cameron", "rooney", "car", "class"]);
        let mut rng = StdRng::seed_from_u64(7);

        let len = engine.pick_secret_word(&mut rng).unwrap();
        let secret = engine.secret().unwrap().clone();

        assert_eq!(secret.len(), len);
        assert_eq!(engine.state(), EngineState::Playing);
        assert!(engine.candidates().iter().all(|w| w.len() == len));
        assert!(engine.candidates().contains(&secret));
    }

    #[test]
    fn same_seed_picks_same_secret() {
        let words = ["ekko", "ashe", "bard", "quinn", "fortune", "graves"];
        let mut a = engine(&words);
        let mut b = engine(&words);

        a.pick_secret_word(&mut StdRng::seed_from_u64(42)).unwrap();
        b.pick_secret_word(&mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a.secret(), b.secret());
    }

    #[test]
    fn check_guess_reports_secret_positions() {
        let mut engine = engine(&["rooney"]);
        engine.set_secret_word(Word::new("rooney").unwrap()).unwrap();

        assert_eq!(engine.check_guess(b'o').unwrap().spots(), &[1, 2]);
        assert!(engine.check_guess(b'z').unwrap().is_miss());
    }

    #[test]
    fn check_guess_without_secret_fails() {
        let engine = engine(&["car"]);
        assert_eq!(engine.check_guess(b'c'), Err(EngineError::NoSecret));
    }

    #[test]
    fn register_length_restricts_pool() {
        let mut engine = engine(&["dog", "cat", "bug", "class"]);
        engine.register_secret_length(3).unwrap();

        assert_eq!(engine.state(), EngineState::Playing);
        assert_eq!(texts(&engine), ["dog", "cat", "bug"]);

        // Repeating the same length changes nothing
        engine.register_secret_length(3).unwrap();
        assert_eq!(texts(&engine), ["dog", "cat", "bug"]);
    }

    #[test]
    fn register_unknown_length_exhausts() {
        let mut engine = engine(&["dog", "cat"]);
        assert_eq!(
            engine.register_secret_length(5),
            Err(EngineError::ExhaustedPool(Exhaustion::NoWordOfLength(5)))
        );
        assert_eq!(engine.state(), EngineState::Exhausted);
    }

    #[test]
    fn register_conflicting_length_is_rejected() {
        let mut engine = engine(&["dog", "class"]);
        engine.register_secret_length(3).unwrap();
        assert!(matches!(
            engine.register_secret_length(5),
            Err(EngineError::InvalidFeedback(FeedbackError::LengthMismatch { .. }))
        ));
    }

    #[test]
    fn first_guess_then_miss() {
        let mut engine = engine(&["dog", "cat", "bug"]);
        engine.register_secret_length(3).unwrap();

        let letter = engine.guess(&Board::new(3)).unwrap();
        assert_eq!(letter, b'g');

        engine.handle_response(letter, &Feedback::miss(3)).unwrap();
        assert_eq!(texts(&engine), ["cat"]);
        assert!(engine.has_guessed(b'g'));
    }

    #[test]
    fn hit_matching_every_candidate_keeps_pool() {
        let mut engine = engine(&["cat", "car", "can"]);
        engine.register_secret_length(3).unwrap();

        engine
            .handle_response(b'c', &Feedback::new([0], 3).unwrap())
            .unwrap();

        assert_eq!(texts(&engine), ["cat", "car", "can"]);
        assert!(engine.board().is_revealed(0));
    }

    #[test]
    fn contradictory_feedback_exhausts_engine() {
        let mut engine = engine(&["cat"]);
        engine.register_secret_length(3).unwrap();

        assert_eq!(
            engine.handle_response(b't', &Feedback::miss(3)),
            Err(EngineError::ExhaustedPool(Exhaustion::InconsistentFeedback('t')))
        );
        assert_eq!(engine.state(), EngineState::Exhausted);
        assert_eq!(
            engine.next_guess(),
            Err(EngineError::NotPlaying(EngineState::Exhausted))
        );
    }

    #[test]
    fn feedback_for_wrong_length_is_rejected() {
        let mut engine = engine(&["cat", "car"]);
        engine.register_secret_length(3).unwrap();

        let feedback = Feedback::new([3], 4).unwrap();
        assert_eq!(
            engine.handle_response(b'a', &feedback),
            Err(EngineError::InvalidFeedback(FeedbackError::LengthMismatch {
                expected: 3,
                got: 4,
            }))
        );
        assert_eq!(engine.state(), EngineState::Playing);
        assert_eq!(engine.candidates().len(), 2);
    }

    #[test]
    fn concluded_engine_refuses_further_turns() {
        let mut engine = engine(&["cat"]);
        engine.register_secret_length(3).unwrap();
        engine.conclude();

        assert_eq!(engine.state(), EngineState::Concluded);
        assert_eq!(
            engine.handle_response(b'c', &Feedback::new([0], 3).unwrap()),
            Err(EngineError::NotPlaying(EngineState::Concluded))
        );
    }

    #[test]
    fn self_play_solves_every_word() {
        let words = ["bueller", "sloane", "cameron", "rooney", "car", "class", "cat"];
        for secret_text in words {
            let secret = Word::new(secret_text).unwrap();
            let mut guesser = engine(&words);
            guesser.register_secret_length(secret.len()).unwrap();

            let mut previous = guesser.candidates().len();
            while !guesser.board().is_solved() {
                let letter = guesser.next_guess().unwrap();
                let feedback = Feedback::from_secret(&secret, letter);
                guesser.handle_response(letter, &feedback).unwrap();

                assert!(guesser.candidates().contains(&secret));
                assert!(guesser.candidates().len() <= previous);
                previous = guesser.candidates().len();
            }

            assert_eq!(guesser.board().to_string(), secret_text);
        }
    }

    #[test]
    fn guessed_letters_are_sorted() {
        let mut engine = engine(&["cat", "car"]);
        engine.register_secret_length(3).unwrap();
        engine
            .handle_response(b'c', &Feedback::new([0], 3).unwrap())
            .unwrap();
        engine
            .handle_response(b'a', &Feedback::new([1], 3).unwrap())
            .unwrap();

        assert_eq!(engine.guessed_letters(), vec![b'a', b'c']);
    }
}
