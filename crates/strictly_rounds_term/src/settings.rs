//! Match settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_rounds::{TotalRounds, TransitionDelays};
use tracing::{debug, info, instrument};

/// Settings for a terminal match.
///
/// `total_rounds` is kept raw so that an invalid value reaches the engine
/// and is reported the same way as a bad `rounds` command.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchSettings {
    /// Rounds per match.
    #[serde(default = "default_total_rounds")]
    total_rounds: i64,

    /// Pause before the board clears after a round.
    #[serde(default = "default_round_delay_ms")]
    round_delay_ms: u64,

    /// Pause before the final scores are shown.
    #[serde(default = "default_summary_delay_ms")]
    summary_delay_ms: u64,
}

fn default_total_rounds() -> i64 {
    TotalRounds::DEFAULT.get().into()
}

fn default_round_delay_ms() -> u64 {
    1500
}

fn default_summary_delay_ms() -> u64 {
    500
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            total_rounds: default_total_rounds(),
            round_delay_ms: default_round_delay_ms(),
            summary_delay_ms: default_summary_delay_ms(),
        }
    }
}

impl MatchSettings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(total_rounds = settings.total_rounds, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path`, or defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the delays given on the command line.
    #[instrument(skip(self))]
    pub fn with_delays(mut self, round_delay_ms: Option<u64>, summary_delay_ms: Option<u64>) -> Self {
        if let Some(ms) = round_delay_ms {
            self.round_delay_ms = ms;
        }
        if let Some(ms) = summary_delay_ms {
            self.summary_delay_ms = ms;
        }
        self
    }

    /// Transition delays for the scheduler.
    pub fn delays(&self) -> TransitionDelays {
        TransitionDelays::new(
            Duration::from_millis(self.round_delay_ms),
            Duration::from_millis(self.summary_delay_ms),
        )
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
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
