//! Interactive game command
//!
//! Seats a human or computer in each role and plays one game on the terminal.

use crate::core::Word;
use crate::game::{Game, GameConfig, GameReport};
use crate::player::{ComputerPlayer, HumanPlayer, PlayerKind};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

/// Who sits in a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlayerType {
    Human,
    Computer,
}

/// Configuration for a single game
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub guesser: PlayerType,
    pub referee: PlayerType,
    pub guesser_name: String,
    pub referee_name: String,
    pub game: GameConfig,
    pub seed: Option<u64>,
}

impl PlayConfig {
    /// Default names and rules for the given seating
    #[must_use]
    pub fn new(guesser: PlayerType, referee: PlayerType) -> Self {
        Self {
            guesser,
            referee,
            guesser_name: "Bueller".to_string(),
            referee_name: "Sloane".to_string(),
            game: GameConfig::default(),
            seed: None,
        }
    }
}

fn rng_for(seed: Option<u64>, offset: u64) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, |seed| {
        StdRng::seed_from_u64(seed.wrapping_add(offset))
    })
}

fn seat(kind: PlayerType, name: &str, words: &[Word], rng: StdRng) -> Result<PlayerKind> {
    Ok(match kind {
        PlayerType::Human => PlayerKind::Human(HumanPlayer::console(name)),
        PlayerType::Computer => {
            PlayerKind::Computer(ComputerPlayer::new(words.to_vec(), rng)?.named(name))
        }
    })
}

/// Play one game on stdin/stdout
///
/// # Errors
///
/// Returns an error if the word list is empty, input closes early, or the
/// guessing engine runs out of candidates.
pub fn run_play(config: &PlayConfig, words: &[Word]) -> Result<GameReport> {
    let guesser = seat(
        config.guesser,
        &config.guesser_name,
        words,
        rng_for(config.seed, 1),
    )?;
    let referee = seat(
        config.referee,
        &config.referee_name,
        words,
        rng_for(config.seed, 0),
    )?;

    let mut game = Game::new(guesser, referee, config.game);
    let report = game.play(&mut io::stdout())?;
    Ok(report)
}
