//! Bot settings from environment variables.

use std::time::Duration;

use blockade_core::{EvalWeights, MAX_DEPTH, MAX_MOBILITY_WEIGHT};
use thiserror::Error;

pub const LOCAL_VAR: &str = "BLOCKADE_LOCAL";
pub const FIRST_TURN_VAR: &str = "BLOCKADE_FIRST_TURN_MS";
pub const TURN_VAR: &str = "BLOCKADE_TURN_MS";
pub const MAX_DEPTH_VAR: &str = "BLOCKADE_MAX_DEPTH";
pub const SEED_VAR: &str = "BLOCKADE_SEED";
pub const MOBILITY_WEIGHT_VAR: &str = "BLOCKADE_MOBILITY_WEIGHT";

/// Budgets sit under the referee's 1000 ms / 100 ms limits to leave room
/// for process and pipe overhead.
const DEFAULT_FIRST_TURN_MS: u64 = 900;
const DEFAULT_TURN_MS: u64 = 90;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("{var} must be between {min} and {max}, got {value}")]
    OutOfRange {
        var: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BotConfig {
    /// Running outside the contest: chattier logs and a stats message
    /// appended to each action.
    pub local: bool,
    pub first_turn: Duration,
    pub turn: Duration,
    pub max_depth: u8,
    /// None seeds from entropy
    pub seed: Option<u64>,
    pub weights: EvalWeights,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            local: false,
            first_turn: Duration::from_millis(DEFAULT_FIRST_TURN_MS),
            turn: Duration::from_millis(DEFAULT_TURN_MS),
            max_depth: MAX_DEPTH,
            seed: None,
            weights: EvalWeights::default(),
        }
    }
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(LOCAL_VAR) {
            config.local = parse_flag(LOCAL_VAR, &value)?;
        }
        if let Some(value) = lookup(FIRST_TURN_VAR) {
            config.first_turn = Duration::from_millis(parse(FIRST_TURN_VAR, &value, "millisecond count")?);
        }
        if let Some(value) = lookup(TURN_VAR) {
            config.turn = Duration::from_millis(parse(TURN_VAR, &value, "millisecond count")?);
        }
        if let Some(value) = lookup(MAX_DEPTH_VAR) {
            let depth = parse_in_range(MAX_DEPTH_VAR, &value, "depth", 1, MAX_DEPTH as i64)?;
            config.max_depth = depth as u8;
        }
        if let Some(value) = lookup(SEED_VAR) {
            config.seed = Some(parse(SEED_VAR, &value, "seed")?);
        }
        if let Some(value) = lookup(MOBILITY_WEIGHT_VAR) {
            let weight = parse_in_range(
                MOBILITY_WEIGHT_VAR,
                &value,
                "integer weight",
                0,
                MAX_MOBILITY_WEIGHT as i64,
            )?;
            config.weights.mobility = weight as i32;
        }

        Ok(config)
    }

    /// Search budget for the given turn, counted from when its input arrived.
    pub fn budget(&self, first_turn: bool) -> Duration {
        if first_turn {
            self.first_turn
        } else {
            self.turn
        }
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.local {
            "info"
        } else {
            "warn"
        }
    }
}

fn parse<T: std::str::FromStr>(
    var: &'static str,
    value: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: value.to_string(),
        expected,
    })
}

fn parse_in_range(
    var: &'static str,
    value: &str,
    expected: &'static str,
    min: i64,
    max: i64,
) -> Result<i64, ConfigError> {
    let parsed: i64 = parse(var, value, expected)?;
    if !(min..=max).contains(&parsed) {
        return Err(ConfigError::OutOfRange {
            var,
            value: parsed,
            min,
            max,
        });
    }
    Ok(parsed)
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
            expected: "boolean flag",
        }),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
