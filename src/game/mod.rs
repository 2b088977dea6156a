//! Game orchestration
//!
//! Seats a guesser and a referee, runs turns until the board is solved or the
//! wrong-guess limit is reached, and keeps a record of every turn.

mod error;

pub use error::GameError;

use crate::core::{Board, Feedback, FeedbackError};
use crate::output::formatters::{render_board, render_figure};
use crate::player::Player;
use crate::solver::EngineError;
use log::debug;
use std::io::Write;

/// Game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Wrong guesses allowed before the guesser loses
    pub max_wrong_guesses: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_wrong_guesses: usize) -> Self {
        Self { max_wrong_guesses }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(6)
    }
}

/// Who won
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    GuesserWon,
    RefereeWon,
}

/// A single guess and the referee's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub letter: u8,
    pub feedback: Feedback,
}

impl Turn {
    #[must_use]
    pub fn is_hit(&self) -> bool {
        !self.feedback.is_miss()
    }
}

/// Summary of a finished game
#[derive(Debug, Clone)]
pub struct GameReport {
    pub outcome: Outcome,
    pub board: Board,
    pub turns: Vec<Turn>,
    pub wrong_guesses: usize,
}

/// A hangman game between two players
pub struct Game<G: Player, R: Player> {
    guesser: G,
    referee: R,
    config: GameConfig,
    board: Board,
    wrong_guesses: usize,
    turns: Vec<Turn>,
}

impl<G: Player, R: Player> Game<G, R> {
    pub fn new(guesser: G, referee: R, config: GameConfig) -> Self {
        Self {
            guesser,
            referee,
            config,
            board: Board::new(0),
            wrong_guesses: 0,
            turns: Vec::new(),
        }
    }

    /// Commit the referee to a secret and tell the guesser its length
    ///
    /// # Errors
    /// Propagates either player's failure.
    pub fn setup(&mut self) -> Result<(), GameError> {
        let len = self.referee.pick_secret_word()?;
        self.guesser.register_secret_length(len)?;

        self.board = Board::new(len);
        self.wrong_guesses = 0;
        self.turns.clear();
        debug!("{} picked a word of length {len}", self.referee.name());
        Ok(())
    }

    /// Play one guess, check, update, respond cycle
    ///
    /// # Errors
    /// Propagates player failures; a report for a different word length is
    /// rejected as `InvalidFeedback`.
    pub fn take_turn(&mut self) -> Result<&Turn, GameError> {
        let letter = self.guesser.guess(&self.board)?;
        let feedback = self.referee.check_guess(letter)?;

        if feedback.word_len() != self.board.len() {
            return Err(EngineError::from(FeedbackError::LengthMismatch {
                expected: self.board.len(),
                got: feedback.word_len(),
            })
            .into());
        }

        if feedback.is_miss() {
            self.wrong_guesses += 1;
        } else {
            self.board.reveal(letter, &feedback);
        }

        self.guesser.handle_response(letter, &feedback)?;
        debug!("'{}' -> {feedback}, board {}", char::from(letter), self.board);

        self.turns.push(Turn { letter, feedback });
        Ok(&self.turns[self.turns.len() - 1])
    }

    /// Run a full game, writing the board and figure after every turn
    ///
    /// # Errors
    /// Any player or engine failure ends the game early.
    pub fn play(&mut self, out: &mut impl Write) -> Result<GameReport, GameError> {
        self.setup()?;

        while !self.is_won() && !self.is_lost() {
            self.take_turn()?;

            writeln!(out)?;
            writeln!(out, "{}", render_board(&self.board))?;
            if self.wrong_guesses > 0 {
                writeln!(out)?;
                writeln!(out, "{}", render_figure(self.wrong_guesses, self.config.max_wrong_guesses))?;
            }
        }

        Ok(self.conclude(out)?)
    }

    fn conclude(&mut self, out: &mut impl Write) -> Result<GameReport, std::io::Error> {
        self.guesser.conclude();
        self.referee.conclude();

        let outcome = if self.is_won() {
            Outcome::GuesserWon
        } else {
            Outcome::RefereeWon
        };
        let winner = match outcome {
            Outcome::GuesserWon => self.guesser.name(),
            Outcome::RefereeWon => self.referee.name(),
        };

        writeln!(out)?;
        writeln!(out, "The game has ended. {winner} wins!")?;

        Ok(GameReport {
            outcome,
            board: self.board.clone(),
            turns: self.turns.clone(),
            wrong_guesses: self.wrong_guesses,
        })
    }

    /// Every slot revealed
    #[must_use]
    pub fn is_won(&self) -> bool {
        !self.board.is_empty() && self.board.is_solved()
    }

    /// Wrong-guess limit reached
    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.wrong_guesses >= self.config.max_wrong_guesses
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub const fn guesser(&self) -> &G {
        &self.guesser
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::player::{ComputerPlayer, HumanPlayer};
    use crate::solver::Exhaustion;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::{Cursor, sink};

    const WORDS: &[&str] = &["bueller", "sloane", "cameron", "rooney", "car", "class"];

    fn computer() -> ComputerPlayer {
        ComputerPlayer::new(words_from_slice(WORDS), StdRng::seed_from_u64(1)).unwrap()
    }

    fn referee(secret: &str) -> ComputerPlayer {
        ComputerPlayer::with_secret(Word::new(secret).unwrap())
    }

    fn human(input: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        HumanPlayer::new("Ferris", Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn default_allows_six_wrong_guesses() {
        assert_eq!(GameConfig::default().max_wrong_guesses, 6);
    }

    #[test]
    fn computer_solves_every_word_against_computer() {
        for &secret in WORDS {
            let mut game = Game::new(computer(), referee(secret), GameConfig::default());
            let report = game.play(&mut sink()).unwrap();

            assert_eq!(report.outcome, Outcome::GuesserWon, "failed on {secret}");
            assert_eq!(report.board.to_string(), secret);
        }
    }

    #[test]
    fn computer_vs_computer_with_random_secret() {
        let referee = ComputerPlayer::new(words_from_slice(WORDS), StdRng::seed_from_u64(9))
            .unwrap()
            .named("Referee");
        let mut game = Game::new(computer(), referee, GameConfig::default());
        let report = game.play(&mut sink()).unwrap();

        assert_eq!(report.outcome, Outcome::GuesserWon);
        assert!(report.wrong_guesses < 6);
    }

    #[test]
    fn human_guesser_can_lose() {
        // Six letters absent from "car"
        let guesser = human("z\nq\nx\nj\nk\nv\n");
        let mut game = Game::new(guesser, referee("car"), GameConfig::default());
        let report = game.play(&mut sink()).unwrap();

        assert_eq!(report.outcome, Outcome::RefereeWon);
        assert_eq!(report.wrong_guesses, 6);
        assert_eq!(report.turns.len(), 6);
        assert!(report.board.is_fresh());
    }

    #[test]
    fn smaller_limit_ends_sooner() {
        let guesser = human("z\nq\n");
        let mut game = Game::new(guesser, referee("car"), GameConfig::new(2));
        let report = game.play(&mut sink()).unwrap();

        assert_eq!(report.outcome, Outcome::RefereeWon);
        assert_eq!(report.turns.len(), 2);
    }

    #[test]
    fn human_guesser_can_win() {
        let guesser = human("c\nz\na\nr\n");
        let mut game = Game::new(guesser, referee("car"), GameConfig::default());
        let mut out = Vec::new();
        let report = game.play(&mut out).unwrap();

        assert_eq!(report.outcome, Outcome::GuesserWon);
        assert_eq!(report.wrong_guesses, 1);
        assert_eq!(report.turns.iter().filter(|t| t.is_hit()).count(), 3);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Ferris wins!"));
    }

    #[test]
    fn computer_guesser_against_human_referee() {
        // Secret is "cat": length 3, then answer each guess truthfully
        // Pool {car, cat}: first guess 'a' (tie broken alphabetically over
        // c/a at 2 each), then 'c', then 'r' vs 't' tie gives 'r'
        let referee = human("3\n1\n0\n\n2\n");
        let guesser = ComputerPlayer::new(
            words_from_slice(&["car", "cat", "class"]),
            StdRng::seed_from_u64(0),
        )
        .unwrap();

        let mut game = Game::new(guesser, referee, GameConfig::default());
        let report = game.play(&mut sink()).unwrap();

        let letters: Vec<u8> = report.turns.iter().map(|t| t.letter).collect();
        assert_eq!(letters, b"acrt");
        assert_eq!(report.outcome, Outcome::GuesserWon);
        assert_eq!(report.board.to_string(), "cat");
    }

    #[test]
    fn lying_referee_surfaces_exhaustion() {
        // Claims 'a' is absent from a three-letter word drawn from {car, cat}
        let referee = human("3\n\n");
        let guesser = ComputerPlayer::new(
            words_from_slice(&["car", "cat"]),
            StdRng::seed_from_u64(0),
        )
        .unwrap();

        let mut game = Game::new(guesser, referee, GameConfig::default());
        let err = game.play(&mut sink()).unwrap_err();

        assert!(matches!(
            err,
            GameError::Engine(EngineError::ExhaustedPool(Exhaustion::InconsistentFeedback('a')))
        ));
    }

    #[test]
    fn unknown_length_surfaces_exhaustion() {
        let referee = human("9\n");
        let mut game = Game::new(computer(), referee, GameConfig::default());

        assert!(matches!(
            game.setup(),
            Err(GameError::Engine(EngineError::ExhaustedPool(Exhaustion::NoWordOfLength(9))))
        ));
    }

    #[test]
    fn take_turn_records_history() {
        let mut game = Game::new(computer(), referee("class"), GameConfig::default());
        game.setup().unwrap();

        let turn = game.take_turn().unwrap().clone();
        assert_eq!(game.turns(), &[turn]);
        assert!(game.wrong_guesses() <= 1);
    }
}
