//! Configuration for new positions.

use crate::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How [`TicTacToeState::undo_move`](crate::TicTacToeState::undo_move) treats its argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndoPolicy {
    /// Only the most recently applied move may be undone.
    #[default]
    Strict,
    /// Clear the target cell whatever it holds. Pairing is the caller's job.
    Unchecked,
}

/// Settings used to create a starting position.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct StateConfig {
    /// Mark that moves first from the empty grid.
    #[serde(default = "default_first_to_move")]
    first_to_move: Mark,

    /// Undo validation policy.
    #[serde(default)]
    undo_policy: UndoPolicy,
}

fn default_first_to_move() -> Mark {
    Mark::X
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            first_to_move: default_first_to_move(),
            undo_policy: UndoPolicy::default(),
        }
    }
}

impl StateConfig {
    /// Creates a configuration.
    pub fn new(first_to_move: Mark, undo_policy: UndoPolicy) -> Self {
        Self {
            first_to_move,
            undo_policy,
        }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;

        info!(first_to_move = %config.first_to_move, undo_policy = ?config.undo_policy, "Config loaded successfully");
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
