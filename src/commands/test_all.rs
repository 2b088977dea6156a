//! Test all words - solver evaluation over a whole dictionary
//!
//! Lets the engine guess every word (or a limited subset) and collects statistics.

use crate::core::Word;
use crate::game::{Game, GameConfig, GameError};
use crate::player::ComputerPlayer;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from guessing a single word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub letters: Vec<u8>,
    pub wrong_guesses: usize,
    pub outcome: WordOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOutcome {
    Solved,
    Failed,
    Errored,
}

/// Statistics from guessing every word
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub errored: usize,
    /// Wrong guesses used by solved words
    pub wrong_distribution: FxHashMap<usize, usize>,
    pub max_wrong_guesses: usize,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub average_wrong: f64,
    pub hardest_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
}

/// Let the engine guess one word against the full dictionary
fn test_word(
    target: &Word,
    words: &[Word],
    config: GameConfig,
) -> Result<WordTestResult, GameError> {
    let guesser = ComputerPlayer::new(words.to_vec(), StdRng::seed_from_u64(0))?;
    let referee = ComputerPlayer::with_secret(target.clone());
    let mut game = Game::new(guesser, referee, config);
    game.setup()?;

    while !game.is_won() && !game.is_lost() {
        game.take_turn()?;
    }

    Ok(WordTestResult {
        word: target.text().to_string(),
        letters: game.turns().iter().map(|turn| turn.letter).collect(),
        wrong_guesses: game.wrong_guesses(),
        outcome: if game.is_won() {
            WordOutcome::Solved
        } else {
            WordOutcome::Failed
        },
    })
}

/// Run the engine on every word in `words` (or the first `limit`)
///
/// Words are played in parallel; a word whose game errors is counted as
/// errored rather than aborting the run.
pub fn run_test_all(words: &[Word], limit: Option<usize>, config: GameConfig) -> TestAllStatistics {
    let targets = &words[..limit.unwrap_or(words.len()).min(words.len())];

    println!("🎯 Testing {} words...", targets.len());

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let results: Vec<WordTestResult> = targets
        .par_iter()
        .map(|target| {
            let result = test_word(target, words, config).unwrap_or_else(|e| {
                warn!("{target}: {e}");
                WordTestResult {
                    word: target.text().to_string(),
                    letters: Vec::new(),
                    wrong_guesses: 0,
                    outcome: WordOutcome::Errored,
                }
            });
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(results, config, total_start.elapsed())
}

fn summarize(
    results: Vec<WordTestResult>,
    config: GameConfig,
    total_time: Duration,
) -> TestAllStatistics {
    let solved: Vec<&WordTestResult> = results
        .iter()
        .filter(|r| r.outcome == WordOutcome::Solved)
        .collect();
    let failed_words: Vec<String> = results
        .iter()
        .filter(|r| r.outcome == WordOutcome::Failed)
        .map(|r| r.word.clone())
        .collect();
    let errored = results
        .iter()
        .filter(|r| r.outcome == WordOutcome::Errored)
        .count();

    let mut wrong_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in &solved {
        *wrong_distribution.entry(result.wrong_guesses).or_insert(0) += 1;
    }

    let (average_guesses, average_wrong) = if solved.is_empty() {
        (0.0, 0.0)
    } else {
        let n = solved.len() as f64;
        (
            solved.iter().map(|r| r.letters.len()).sum::<usize>() as f64 / n,
            solved.iter().map(|r| r.wrong_guesses).sum::<usize>() as f64 / n,
        )
    };

    let mut hardest_words: Vec<(String, usize)> = solved
        .iter()
        .filter(|r| r.wrong_guesses > 0)
        .map(|r| (r.word.clone(), r.wrong_guesses))
        .collect();
    hardest_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest_words.truncate(10);

    TestAllStatistics {
        total_words: results.len(),
        solved: solved.len(),
        failed: failed_words.len(),
        errored,
        wrong_distribution,
        max_wrong_guesses: config.max_wrong_guesses,
        total_time,
        average_guesses,
        average_wrong,
        hardest_words,
        failed_words,
    }
}
