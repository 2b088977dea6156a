//! Hangman Solver - CLI
//!
//! Play hangman against the letter-frequency engine, or watch it solve words.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{PlayConfig, PlayerType, SolveConfig, run_play, run_test_all, solve_word},
    core::Word,
    game::GameConfig,
    logging,
    output::{print_game_report, print_solve_result, print_test_all_statistics},
    wordlists::{
        DICTIONARY,
        loader::{load_from_file, words_from_slice},
    },
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman with a guesser that tracks every consistent word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Line-delimited word list (default: embedded dictionary)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Wrong guesses allowed before the guesser is hanged
    #[arg(long, global = true, default_value = "6")]
    max_wrong: usize,

    /// Seed for secret word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default: computer guesses your word)
    Play {
        /// Who guesses
        #[arg(long, value_enum, default_value = "computer")]
        guesser: PlayerType,

        /// Who picks the secret word
        #[arg(long, value_enum, default_value = "human")]
        referee: PlayerType,

        /// Guesser's name
        #[arg(long, default_value = "Bueller")]
        guesser_name: String,

        /// Referee's name
        #[arg(long, default_value = "Sloane")]
        referee_name: String,
    },

    /// Let the computer guess a specific word
    Solve {
        /// The word to guess
        word: String,

        /// Show candidate counts per guess
        #[arg(short = 'c', long)]
        candidates: bool,
    },

    /// Let the computer guess every dictionary word
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the word list named by `--dictionary`, or the embedded one
fn load_words(path: Option<&PathBuf>) -> Result<Vec<Word>> {
    let words = match path {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(DICTIONARY),
    };
    if words.is_empty() {
        bail!("word list is empty");
    }
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let words = load_words(cli.dictionary.as_ref())?;
    let game = GameConfig::new(cli.max_wrong);

    let command = cli.command.unwrap_or(Commands::Play {
        guesser: PlayerType::Computer,
        referee: PlayerType::Human,
        guesser_name: "Bueller".to_string(),
        referee_name: "Sloane".to_string(),
    });

    match command {
        Commands::Play {
            guesser,
            referee,
            guesser_name,
            referee_name,
        } => {
            let config = PlayConfig {
                guesser,
                referee,
                guesser_name,
                referee_name,
                game,
                seed: cli.seed,
            };
            let report = run_play(&config, &words)?;
            print_game_report(&report);
        }
        Commands::Solve { word, candidates } => {
            let mut config = SolveConfig::new(word);
            config.max_wrong_guesses = game.max_wrong_guesses;
            let result = solve_word(config, &words)?;
            print_solve_result(&result, candidates);
        }
        Commands::TestAll { limit } => {
            println!("\n{}", "═".repeat(70));
            println!(" Hangman Solver Test ");
            println!("{}", "═".repeat(70));
            println!("\nTesting against {} words", words.len());
            println!("Wrong guesses allowed: {}\n", game.max_wrong_guesses);

            let stats = run_test_all(&words, limit, game);
            print_test_all_statistics(&stats);
        }
    }

    Ok(())
}
