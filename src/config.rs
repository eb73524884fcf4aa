//! Configuration management for file-tool
//!
//! Settings are built-in defaults, optionally overridden by a file passed
//! with `--config`. Nothing is read implicitly.

use config::{Config, ConfigError, File};
use log::LevelFilter;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct ToolConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,

    /// Suppress confirmation messages on success
    pub quiet: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            quiet: false,
        }
    }
}

impl ToolConfig {
    /// Load configuration from `explicit` when given, else use the defaults.
    ///
    /// An explicit file must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = ToolConfig::default();

        let Some(path) = explicit else {
            return Ok(defaults);
        };

        let config: ToolConfig = Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("quiet", defaults.quiet)?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Parsed log filter
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level.parse::<LevelFilter>().map_err(|_| {
            ConfigError::Message(format!(
                "log_level must be one of off, error, warn, info, debug, trace (got '{}')",
                self.log_level
            ))
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.level_filter().map(|_| ())
    }
}
