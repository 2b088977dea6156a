//! Log setup for the binary
//!
//! Engine and game events go through the `log` facade; this wires them to
//! stderr via `env_logger`. `RUST_LOG` still takes precedence when set.

use log::LevelFilter;

/// Default level when `RUST_LOG` is unset
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the global logger
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(default_level(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
