//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_tictactoe::{DEFAULT_COMPUTER_NAMES, WinningScore};
use tracing::{debug, info, instrument};

/// File looked for when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rounds needed to win a match. Asked for at startup when absent.
    #[serde(default)]
    winning_score: Option<WinningScore>,

    /// Names the computer picks from.
    #[serde(default = "default_computer_names")]
    computer_names: Vec<String>,

    /// Pause between rounds, in milliseconds.
    #[serde(default = "default_round_delay_ms")]
    round_delay_ms: u64,

    /// Clear the terminal before drawing the board.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,

    /// Fixed RNG seed for reproducible games.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_computer_names() -> Vec<String> {
    DEFAULT_COMPUTER_NAMES.iter().map(|s| s.to_string()).collect()
}

#[instrument]
fn default_round_delay_ms() -> u64 {
    2000
}

#[instrument]
fn default_clear_screen() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            winning_score: None,
            computer_names: default_computer_names(),
            round_delay_ms: default_round_delay_ms(),
            clear_screen: default_clear_screen(),
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

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.computer_names.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::new("Computer names must not be blank".to_string()));
        }

        info!(
            winning_score = ?config.winning_score.map(WinningScore::get),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else the built-in defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Overrides the winning score.
    pub fn set_winning_score(&mut self, target: WinningScore) {
        self.winning_score = Some(target);
    }

    /// Overrides the RNG seed.
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }

    /// Overrides the pause between rounds.
    pub fn set_round_delay_ms(&mut self, millis: u64) {
        self.round_delay_ms = millis;
    }

    /// Turns screen clearing on or off.
    pub fn set_clear_screen(&mut self, clear: bool) {
        self.clear_screen = clear;
    }

    /// Pause between rounds.
    pub fn round_delay(&self) -> Duration {
        Duration::from_millis(self.round_delay_ms)
    }

    /// RNG for coin tosses, fallback moves and robot names.
    #[instrument(skip(self))]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
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
