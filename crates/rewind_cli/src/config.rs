//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::{GameMode, Player, ResetPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Pause before the computer answers a human move, in milliseconds.
    #[serde(default = "default_ai_delay_ms")]
    ai_delay_ms: u64,

    /// Starting mode.
    #[serde(default)]
    mode: GameMode,

    /// Mark that moves first.
    #[serde(default = "default_first_player")]
    first_player: Player,

    /// What "reset" does with mode and first player.
    #[serde(default)]
    reset_policy: ResetPolicy,
}

#[instrument]
fn default_ai_delay_ms() -> u64 {
    500
}

#[instrument]
fn default_first_player() -> Player {
    Player::X
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            ai_delay_ms: default_ai_delay_ms(),
            mode: GameMode::default(),
            first_player: default_first_player(),
            reset_policy: ResetPolicy::default(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path))]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => {
                info!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        first_player: Option<Player>,
        ai_delay_ms: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(first_player) = first_player {
            self.first_player = first_player;
        }
        if let Some(ms) = ai_delay_ms {
            self.ai_delay_ms = ms;
        }
        self
    }

    /// The engine delay as a [`Duration`].
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlayConfig::default();
        assert_eq!(*config.ai_delay_ms(), 500);
        assert_eq!(*config.mode(), GameMode::TwoPlayer);
        assert_eq!(*config.first_player(), Player::X);
        assert_eq!(*config.reset_policy(), ResetPolicy::ClearSettings);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: PlayConfig = toml::from_str("mode = \"one_player\"").unwrap();
        assert_eq!(*config.mode(), GameMode::OnePlayer);
        assert_eq!(config.ai_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_overrides_win() {
        let config = PlayConfig::default().with_overrides(None, Some(Player::O), Some(0));
        assert_eq!(*config.first_player(), Player::O);
        assert_eq!(config.ai_delay(), Duration::ZERO);
        assert_eq!(*config.mode(), GameMode::TwoPlayer);
    }
}
