//! Game configuration from TOML and command-line overrides.

use crate::cli::PlayArgs;
use crosswise_core::{Difficulty, Mark};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "crosswise.toml";

/// Settings for a game session.
///
/// Unset names and marks are asked for interactively by the console front
/// end and defaulted by the terminal UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name of player 1.
    #[serde(default)]
    player_name: Option<String>,

    /// Mark for player 1.
    #[serde(default)]
    player_mark: Option<Mark>,

    /// Name of the AI opponent.
    #[serde(default)]
    opponent_name: Option<String>,

    /// AI tier.
    #[serde(default)]
    difficulty: Difficulty,

    /// Let an AI take seat 1 too.
    #[serde(default)]
    ai_vs_ai: bool,
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the config for a run: the file named by `--config`, else
    /// [`DEFAULT_CONFIG_FILE`] if it exists, else defaults; then flags on top.
    #[instrument(skip(args))]
    pub fn resolve(args: &PlayArgs) -> Result<Self, ConfigError> {
        let base = match &args.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };
        Ok(base.with_overrides(args))
    }

    /// Applies command-line flags over file values.
    pub fn with_overrides(mut self, args: &PlayArgs) -> Self {
        if let Some(name) = &args.name {
            self.player_name = Some(name.clone());
        }
        if let Some(mark) = args.mark {
            self.player_mark = Some(mark);
        }
        if let Some(name) = &args.opponent {
            self.opponent_name = Some(name.clone());
        }
        if let Some(difficulty) = args.difficulty {
            self.difficulty = difficulty;
        }
        self.ai_vs_ai |= args.ai_vs_ai;
        self
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
