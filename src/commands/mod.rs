//! Command implementations

pub mod play;
pub mod solve;
pub mod test_all;

pub use play::{PlayConfig, PlayerType, run_play};
pub use solve::{SolveConfig, SolveResult, solve_word};
pub use test_all::{TestAllStatistics, run_test_all};
