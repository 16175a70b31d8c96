//! Logger bootstrap for hosts without their own logging setup.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the process-wide logger.
///
/// `RUST_LOG` takes precedence when set; otherwise `verbose` selects between
/// debug and info level output.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(default_level.to_string());

    // try_init only fails when a logger is already installed. Embedding
    // hosts and tests may both call init, so that case stays silent.
    let _ = Builder::from_env(env).try_init();
}
