//! Configuration options for the practice table.
//!
//! The defaults reproduce the standard practice spot: 100bb stacks with
//! 0.5/1 blinds. A config can also be loaded from a JSON file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How the minimum re-raise is derived after the hero raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaiseTracking {
    /// The last raise is the increment over the bet that was faced.
    /// A raise to 3bb facing 1bb sets the next minimum raise to 5bb.
    #[default]
    Increment,
    /// The last raise is measured against the already-updated current bet,
    /// so it is always zero and the next minimum raise equals the raise.
    Legacy,
}

/// Configuration for the practice table.
///
/// # Example
/// ```
/// use poker_coach::practice::TableConfig;
///
/// let config = TableConfig::default();
/// assert_eq!(config.starting_stack, 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Stack every seat starts each hand with, in big blinds.
    pub starting_stack: f64,

    /// Small blind posted by SB.
    pub small_blind: f64,

    /// Big blind posted by BB. This is also the initial bet to call.
    pub big_blind: f64,

    /// Minimum re-raise derivation.
    pub raise_tracking: RaiseTracking,

    /// Random seed for reproducible deals and showdowns.
    ///
    /// If `None`, the table seeds itself from entropy.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_stack: 100.0,
            small_blind: 0.5,
            big_blind: 1.0,
            raise_tracking: RaiseTracking::Increment,
            seed: None,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set raise tracking.
    pub fn with_raise_tracking(mut self, tracking: RaiseTracking) -> Self {
        self.raise_tracking = tracking;
        self
    }

    /// Builder method: set starting stack.
    pub fn with_starting_stack(mut self, stack: f64) -> Self {
        self.starting_stack = stack;
        self
    }

    /// Minimum raise at the start of a hand (twice the big blind).
    pub fn opening_min_raise(&self) -> f64 {
        self.big_blind * 2.0
    }

    /// Load and validate a config from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_json(&content)
    }

    /// Parse and validate a config from a JSON string. Missing fields
    /// take their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails every comparison below, so each check is phrased to reject it.
        if self.small_blind.is_nan() || self.small_blind <= 0.0 {
            return Err(ConfigError::InvalidBlind("small", self.small_blind));
        }
        if self.big_blind.is_nan() || self.big_blind < self.small_blind {
            return Err(ConfigError::InvalidBlind("big", self.big_blind));
        }
        if self.starting_stack.is_nan() || self.starting_stack < self.big_blind {
            return Err(ConfigError::InvalidStack(self.starting_stack));
        }
        Ok(())
    }
}

/// Errors that can occur when loading or validating table configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} blind {1} is not valid")]
    InvalidBlind(&'static str, f64),
    #[error("starting stack {0} must cover the big blind")]
    InvalidStack(f64),
}
