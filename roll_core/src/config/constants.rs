//! Roll engine constants

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ConfigError;

/// Tunable roll constants
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollConstants {
    #[serde(default)]
    pub limits: DiceLimits,
    #[serde(default)]
    pub log: LogConstants,
}

impl RollConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let constants: RollConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse constants from a TOML string
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let constants: RollConstants = super::parse_toml(toml)?;
        constants.validate()?;
        Ok(constants)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;
        if limits.max_dice == 0 {
            return Err(ConfigError::Validation(
                "limits.max_dice must be at least 1".to_string(),
            ));
        }
        if limits.max_sides == 0 {
            return Err(ConfigError::Validation(
                "limits.max_sides must be at least 1".to_string(),
            ));
        }
        if self.log.pool_roll_type.trim().is_empty() {
            return Err(ConfigError::Validation(
                "log.pool_roll_type must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceLimits {
    /// Most dice a single pool may roll (counted once, before advantage doubling)
    #[serde(default = "default_max_dice")]
    pub max_dice: u32,
    /// Largest die size accepted
    #[serde(default = "default_max_sides")]
    pub max_sides: u32,
}

impl Default for DiceLimits {
    fn default() -> Self {
        DiceLimits {
            max_dice: default_max_dice(),
            max_sides: default_max_sides(),
        }
    }
}

fn default_max_dice() -> u32 {
    100
}
fn default_max_sides() -> u32 {
    1000
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConstants {
    /// `roll_type` recorded for free-form pool rolls
    #[serde(default = "default_pool_roll_type")]
    pub pool_roll_type: String,
}

impl Default for LogConstants {
    fn default() -> Self {
        LogConstants {
            pool_roll_type: default_pool_roll_type(),
        }
    }
}

fn default_pool_roll_type() -> String {
    "custom".to_string()
}
