//! Game configuration.

use crate::ai::Difficulty;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Session settings, loadable from a TOML file.
///
/// Every field has a default, so an empty file is valid.
/// Command-line flags override loaded values through the `with_*` setters.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Name shown for the human in status and score text.
    #[serde(default = "default_player_name")]
    #[setters(into)]
    player_name: String,

    /// Starting difficulty.
    #[serde(default)]
    difficulty: Difficulty,

    /// Pause before the computer replies, in milliseconds.
    #[serde(default = "default_reply_delay_ms")]
    reply_delay_ms: u64,

    /// Seed for the computer's random choices; entropy when absent.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

#[instrument]
fn default_player_name() -> String {
    "Player".to_string()
}

#[instrument]
fn default_reply_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            difficulty: Difficulty::default(),
            reply_delay_ms: default_reply_delay_ms(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(player_name = %config.player_name, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
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
