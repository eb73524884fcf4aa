//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Setup logging with `default_level` unless `RUST_LOG` says otherwise.
///
/// Output goes to stderr so stdout only carries confirmation messages.
pub fn setup_logging(default_level: LevelFilter) {
    let env = Env::default().default_filter_or(default_level.as_str());
    // A second init (e.g. from tests) is harmless
    let _ = Builder::from_env(env).target(Target::Stderr).try_init();
}
