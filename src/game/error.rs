//! Orchestration errors

use crate::solver::EngineError;
use std::io;
use thiserror::Error;

/// Anything that stops a game before it finishes
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("input closed before the game finished")]
    InputClosed,
}
