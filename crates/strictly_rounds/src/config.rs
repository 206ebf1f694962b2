//! Round-count configuration.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use tracing::{instrument, warn};

/// Number of rounds in a match. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct TotalRounds(NonZeroU32);

impl TotalRounds {
    /// Rounds used when the requested count is rejected.
    pub const DEFAULT: TotalRounds = TotalRounds(NonZeroU32::new(3).unwrap());

    /// Validates a requested round count.
    #[track_caller]
    pub fn new(requested: i64) -> Result<Self, ConfigurationError> {
        if requested < 1 {
            return Err(ConfigurationError::new(
                ConfigurationErrorKind::BelowMinimum(requested),
            ));
        }
        match u32::try_from(requested).ok().and_then(NonZeroU32::new) {
            Some(rounds) => Ok(Self(rounds)),
            None => Err(ConfigurationError::new(
                ConfigurationErrorKind::AboveMaximum(requested),
            )),
        }
    }

    /// Validates raw user input such as the contents of a text field.
    ///
    /// Surrounding whitespace is ignored; anything else that is not an
    /// integer is rejected.
    #[track_caller]
    pub fn parse(input: &str) -> Result<Self, ConfigurationError> {
        let trimmed = input.trim();
        match trimmed.parse::<i64>() {
            Ok(requested) => Self::new(requested),
            Err(_) => Err(ConfigurationError::new(ConfigurationErrorKind::NotANumber(
                trimmed.to_string(),
            ))),
        }
    }

    /// Returns the count.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for TotalRounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for TotalRounds {
    type Error = ConfigurationError;

    #[track_caller]
    fn try_from(requested: i64) -> Result<Self, Self::Error> {
        Self::new(requested)
    }
}

impl From<TotalRounds> for u32 {
    fn from(rounds: TotalRounds) -> Self {
        rounds.get()
    }
}

/// Why a round count was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigurationErrorKind {
    /// Input was not an integer.
    #[display("{:?} is not a number", _0)]
    NotANumber(String),
    /// Input was an integer below 1.
    #[display("{} is not a valid number of rounds (minimum 1)", _0)]
    BelowMinimum(i64),
    /// Input was an integer too large to count rounds with.
    #[display("{} is too many rounds (maximum {})", _0, u32::MAX)]
    AboveMaximum(i64),
}

/// Invalid round count. Recoverable: the engine falls back to
/// [`TotalRounds::DEFAULT`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Configuration error: {} at {}:{}", kind, file, line)]
pub struct ConfigurationError {
    /// What was wrong with the input.
    pub kind: ConfigurationErrorKind,
    /// Round count substituted for the rejected one.
    pub fallback: TotalRounds,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigurationError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigurationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        warn!(%kind, fallback = %TotalRounds::DEFAULT, "Rejected round count");
        Self {
            kind,
            fallback: TotalRounds::DEFAULT,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
