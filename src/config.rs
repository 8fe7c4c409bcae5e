//! Puzzle front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for the interactive front end.
///
/// Loaded from TOML; every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Delay between scripted solution steps, in milliseconds.
    #[serde(default = "default_replay_interval_ms")]
    replay_interval_ms: u64,

    /// Losses before the loss message starts hinting at the secret sequence.
    #[serde(default = "default_hint_after_failures")]
    hint_after_failures: u32,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_replay_interval_ms() -> u64 {
    1500
}

#[instrument]
fn default_hint_after_failures() -> u32 {
    3
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_river.log")
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            replay_interval_ms: default_replay_interval_ms(),
            hint_after_failures: default_hint_after_failures(),
            log_file: default_log_file(),
        }
    }
}

impl PuzzleConfig {
    /// Replay interval as a [`Duration`].
    pub fn replay_interval(&self) -> Duration {
        Duration::from_millis(self.replay_interval_ms)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            replay_interval_ms = config.replay_interval_ms,
            hint_after_failures = config.hint_after_failures,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
