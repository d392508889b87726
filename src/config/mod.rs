//! Game configuration: playback timing, the level table, the default level.
//!
//! The defaults reproduce the classic board: cues every 600ms held for
//! 300ms, a one second settle before the human turn, a one second pause
//! between rounds, and levels `{1:8, 2:14, 3:20, 4:31}`.
//!
//! # Example
//!
//! ```rust
//! use simon::config::GameConfig;
//! use std::time::Duration;
//!
//! let config = GameConfig::from_json(r#"{ "default_level": 2 }"#).unwrap();
//! assert_eq!(config.default_level, 2);
//! assert_eq!(config.timing.inter_cue_delay(), Duration::from_millis(600));
//!
//! let err = GameConfig::from_json(r#"{ "default_level": 7 }"#).unwrap_err();
//! assert!(err.to_string().contains("Default level 7"));
//! ```

mod levels;
mod validation;

pub use levels::LevelTable;
pub use validation::{validate, ConfigViolation};

use serde::{Deserialize, Serialize};
use std::time::Duration;
use stillwater::validation::Validation;
use thiserror::Error;

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {}", join(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Playback and pacing delays, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Offset between consecutive cue starts.
    pub inter_cue_delay_ms: u64,
    /// How long a cue keeps its pad lit.
    pub cue_duration_ms: u64,
    /// Pause after the last cue before input opens.
    pub settle_delay_ms: u64,
    /// Pause between a completed round and the next playback.
    pub round_advance_delay_ms: u64,
}

impl Timing {
    pub fn inter_cue_delay(&self) -> Duration {
        Duration::from_millis(self.inter_cue_delay_ms)
    }

    pub fn cue_duration(&self) -> Duration {
        Duration::from_millis(self.cue_duration_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn round_advance_delay(&self) -> Duration {
        Duration::from_millis(self.round_advance_delay_ms)
    }

    /// Start offset of cue `index` within a playback.
    pub fn cue_offset(&self, index: usize) -> Duration {
        self.inter_cue_delay() * index as u32
    }

    /// Delay from playback start until the human turn for `len` cues.
    pub fn human_turn_offset(&self, len: usize) -> Duration {
        self.cue_offset(len) + self.settle_delay()
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            inter_cue_delay_ms: 600,
            cue_duration_ms: 300,
            settle_delay_ms: 1000,
            round_advance_delay_ms: 1000,
        }
    }
}

/// Complete configuration of a game controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub timing: Timing,
    pub levels: LevelTable,
    /// Level used by a plain start request.
    pub default_level: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timing: Timing::default(),
            levels: LevelTable::default(),
            default_level: 1,
        }
    }
}

impl GameConfig {
    /// Check every rule, returning all violations at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match validate(self) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    /// Parse a JSON document and validate it. Missing fields take defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}
