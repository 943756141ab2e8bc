//! Console configuration loaded from TOML and overridden from the command line.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a console session.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```toml
/// difficulty = "hard"
/// computer_starts = true
/// log_file = "noughts.log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Starting difficulty of the computer.
    difficulty: Difficulty,

    /// Whether the computer makes the first move of every game.
    computer_starts: bool,

    /// Seed for the computer's random moves; random when unset.
    seed: Option<u64>,

    /// `tracing` filter directive used when `RUST_LOG` is not set.
    log_filter: String,

    /// Log destination; stderr when unset.
    log_file: Option<PathBuf>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            computer_starts: false,
            seed: None,
            log_filter: "warn".to_string(),
            log_file: None,
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Builds the effective configuration for a run: the config file named
    /// on the command line (or defaults), with command-line flags applied on
    /// top.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(difficulty) = cli.difficulty {
            config.difficulty = difficulty;
        }
        if cli.computer_starts {
            config.computer_starts = true;
        }
        if let Some(seed) = cli.seed {
            config.seed = Some(seed);
        }
        if let Some(filter) = &cli.log_filter {
            config.log_filter = filter.clone();
        }
        if let Some(file) = &cli.log_file {
            config.log_file = Some(file.clone());
        }

        debug!(?config, "Resolved configuration");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
