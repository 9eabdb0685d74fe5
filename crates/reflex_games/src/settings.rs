//! Game settings loaded from TOML, overridable from the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use reflex_tictactoe::Mark;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "reflex_games.toml";

/// User-configurable settings for a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct Settings {
    /// Pause before the opponent moves, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Mark played from the keyboard. X always moves first.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Seed for the opponent's tie-breaks; random when absent.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,

    /// File receiving log output while the terminal UI runs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_think_delay_ms() -> u64 {
    1000
}

fn default_human_mark() -> Mark {
    Mark::X
}

fn default_log_file() -> PathBuf {
    PathBuf::from("reflex_games.log")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            think_delay_ms: default_think_delay_ms(),
            human_mark: default_human_mark(),
            seed: None,
            log_file: default_log_file(),
        }
    }
}

impl Settings {
    /// Loads settings.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and defaults are used otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_PATH);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Opponent delay as a `Duration`.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.think_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_toml() {
        let settings = Settings::from_toml("human_mark = \"O\"\nseed = 42\n").unwrap();
        assert_eq!(*settings.human_mark(), Mark::O);
        assert_eq!(*settings.seed(), Some(42));
        assert_eq!(*settings.think_delay_ms(), 1000);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = Settings::from_toml("think_delay_ms = \"soon\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("settings.rs"));
    }

    #[test]
    fn test_setters_override() {
        let settings = Settings::default().with_seed(9).with_think_delay_ms(0);
        assert_eq!(*settings.seed(), Some(9));
        assert_eq!(settings.think_delay(), Duration::ZERO);
    }
}
