//! Word solving command
//!
//! Lets the engine guess a given word and records every step.

use crate::core::Word;
use crate::game::{Game, GameConfig};
use crate::player::ComputerPlayer;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_wrong_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_wrong_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub target: String,
    pub wrong_guesses: usize,
}

/// A single guess in the solution
pub struct GuessStep {
    pub letter: u8,
    pub spots: Vec<usize>,
    pub board: String,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Let the engine guess `config.target` using `words` as its dictionary
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid
/// - The dictionary is empty
/// - The engine runs out of candidates (target not in the dictionary)
pub fn solve_word(config: SolveConfig, words: &[Word]) -> Result<SolveResult> {
    let target = Word::new(&config.target).context("Invalid target word")?;

    let guesser = ComputerPlayer::new(words.to_vec(), StdRng::seed_from_u64(0))?;
    let referee = ComputerPlayer::with_secret(target);
    let mut game = Game::new(guesser, referee, GameConfig::new(config.max_wrong_guesses));
    game.setup()?;

    let mut steps = Vec::new();
    while !game.is_won() && !game.is_lost() {
        let candidates_before = game.guesser().engine().candidates().len();
        let turn = game.take_turn()?.clone();

        steps.push(GuessStep {
            letter: turn.letter,
            spots: turn.feedback.spots().to_vec(),
            board: game.board().to_string(),
            candidates_before,
            candidates_after: game.guesser().engine().candidates().len(),
        });
    }

    Ok(SolveResult {
        success: game.is_won(),
        steps,
        target: config.target,
        wrong_guesses: game.wrong_guesses(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn solve_word_succeeds() {
        let words = words_from_slice(&["bueller", "sloane", "cameron", "fuelled", "smaller"]);
        let result = solve_word(SolveConfig::new("bueller".to_string()), &words).unwrap();

        assert!(result.success);
        assert_eq!(result.steps.last().unwrap().board, "bueller");
    }

    #[test]
    fn solve_records_shrinking_pool() {
        let words = words_from_slice(DICTIONARY);
        let result = solve_word(SolveConfig::new("planet".to_string()), &words).unwrap();

        assert!(!result.steps.is_empty());
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn solve_counts_misses() {
        let words = words_from_slice(DICTIONARY);
        let result = solve_word(SolveConfig::new("cat".to_string()), &words).unwrap();

        let misses = result.steps.iter().filter(|s| s.spots.is_empty()).count();
        assert_eq!(misses, result.wrong_guesses);
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let words = words_from_slice(DICTIONARY);
        assert!(solve_word(SolveConfig::new("r2d2".to_string()), &words).is_err());
    }

    #[test]
    fn solve_unknown_length_returns_error() {
        let words = words_from_slice(&["car", "cat"]);
        assert!(solve_word(SolveConfig::new("class".to_string()), &words).is_err());
    }

    #[test]
    fn solve_with_max_wrong_limit() {
        let words = words_from_slice(&["cat", "cot", "cut", "hat", "hot", "hut", "mat", "rat"]);
        let mut config = SolveConfig::new("rat".to_string());
        config.max_wrong_guesses = 1;

        let result = solve_word(config, &words).unwrap();
        assert!(result.wrong_guesses <= 1);
        if !result.success {
            assert_eq!(result.wrong_guesses, 1);
        }
    }
}
