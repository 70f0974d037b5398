use fairplay_types::casino::DEFAULT_BET_GRANULARITY;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sizing applied on top of a game's raw max bet by the dispatch layer.
///
/// The raw max bet is divided by `safety_divisor` and then rounded down to a
/// multiple of `granularity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BetLimits {
    pub safety_divisor: u64,
    pub granularity: u64,
}

impl Default for BetLimits {
    fn default() -> Self {
        Self {
            safety_divisor: 2,
            granularity: DEFAULT_BET_GRANULARITY,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not parse bet limits: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("{field} must be > 0 (got {value})")]
    InvalidNonZero { field: &'static str, value: u64 },
}

impl BetLimits {
    /// Parse limits from YAML, filling missing fields with defaults.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let limits: Self = serde_yaml::from_str(source)?;
        limits.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.safety_divisor == 0 {
            return Err(ConfigError::InvalidNonZero {
                field: "safety_divisor",
                value: self.safety_divisor,
            });
        }
        if self.granularity == 0 {
            return Err(ConfigError::InvalidNonZero {
                field: "granularity",
                value: self.granularity,
            });
        }
        Ok(self)
    }

    /// Apply the limits to a raw max bet.
    pub fn apply(&self, raw_max_bet: u128) -> u128 {
        let divisor = self.safety_divisor.max(1) as u128;
        let granularity = self.granularity.max(1) as u128;
        let scaled = raw_max_bet / divisor;
        scaled / granularity * granularity
    }
}
