//! Hangman Solver
//!
//! A hangman game whose computer guesser keeps every dictionary word still
//! consistent with the referee's answers and always guesses the letter that
//! occurs most often among them.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hangman_solver::core::Board;
//! use hangman_solver::solver::InferenceEngine;
//! use hangman_solver::wordlists::{DICTIONARY, loader::words_from_slice};
//!
//! let mut engine = InferenceEngine::new(words_from_slice(DICTIONARY)).unwrap();
//! engine.register_secret_length(5).unwrap();
//!
//! let letter = engine.guess(&Board::new(5)).unwrap();
//! println!("First guess: {}", char::from(letter));
//! ```

// Core domain types
pub mod core;

// Candidate pool and guessing engine
pub mod solver;

// Guesser and referee roles
pub mod player;

// Turn-by-turn orchestration
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod logging;
