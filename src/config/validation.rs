//! Validation of game configuration using Stillwater's `Validation`.
//!
//! Every check runs and every violation is reported, so a shell that loads
//! a bad config gets the full list in one pass.

use crate::config::GameConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single problem with a `GameConfig`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Cue duration ({cue_ms}ms) must be shorter than the inter-cue delay ({delay_ms}ms)")]
    OverlappingCues { cue_ms: u64, delay_ms: u64 },

    #[error("Timing '{field}' must be greater than zero")]
    ZeroDelay { field: &'static str },

    #[error("Level table is empty")]
    NoLevels,

    #[error("Level {level} has a target of zero rounds")]
    EmptyLevel { level: u8 },

    #[error("Default level {level} is not in the level table")]
    UnknownDefaultLevel { level: u8 },
}

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> ConfigViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Run every configuration check, accumulating all violations.
pub fn validate(config: &GameConfig) -> Check {
    let timing = &config.timing;
    let mut checks: Vec<Check> = vec![
        check(timing.cue_duration_ms < timing.inter_cue_delay_ms, || {
            ConfigViolation::OverlappingCues {
                cue_ms: timing.cue_duration_ms,
                delay_ms: timing.inter_cue_delay_ms,
            }
        }),
        check(timing.cue_duration_ms > 0, || ConfigViolation::ZeroDelay {
            field: "cue_duration_ms",
        }),
        check(timing.inter_cue_delay_ms > 0, || ConfigViolation::ZeroDelay {
            field: "inter_cue_delay_ms",
        }),
        check(timing.settle_delay_ms > 0, || ConfigViolation::ZeroDelay {
            field: "settle_delay_ms",
        }),
        check(timing.round_advance_delay_ms > 0, || {
            ConfigViolation::ZeroDelay {
                field: "round_advance_delay_ms",
            }
        }),
        check(!config.levels.is_empty(), || ConfigViolation::NoLevels),
        check(config.levels.contains(config.default_level), || {
            ConfigViolation::UnknownDefaultLevel {
                level: config.default_level,
            }
        }),
    ];

    for (level, target) in config.levels.iter() {
        checks.push(check(target > 0, || ConfigViolation::EmptyLevel { level }));
    }

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LevelTable, Timing};

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&GameConfig::default()).is_success());
    }

    #[test]
    fn accumulates_all_violations() {
        let config = GameConfig {
            timing: Timing {
                inter_cue_delay_ms: 200,
                cue_duration_ms: 300,
                settle_delay_ms: 0,
                round_advance_delay_ms: 1000,
            },
            levels: LevelTable::from_pairs([(1, 0)]),
            default_level: 3,
        };

        match validate(&config) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 4);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::OverlappingCues { .. })));
                assert!(errors.iter().any(|e| *e
                    == ConfigViolation::ZeroDelay {
                        field: "settle_delay_ms"
                    }));
                assert!(errors
                    .iter()
                    .any(|e| *e == ConfigViolation::EmptyLevel { level: 1 }));
                assert!(errors
                    .iter()
                    .any(|e| *e == ConfigViolation::UnknownDefaultLevel { level: 3 }));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn equal_cue_and_delay_overlap() {
        let mut config = GameConfig::default();
        config.timing.cue_duration_ms = config.timing.inter_cue_delay_ms;

        assert!(validate(&config).is_failure());
    }

    #[test]
    fn empty_level_table_is_reported() {
        let config = GameConfig {
            levels: LevelTable::from_pairs([]),
            ..GameConfig::default()
        };

        match validate(&config) {
            Validation::Failure(errors) => {
                assert!(errors.iter().any(|e| *e == ConfigViolation::NoLevels));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }
}
