//! Simulation configuration with documented constants
//!
//! Defaults reproduce the classic behaviour: a ten-group territory and
//! hives that eat one unit of food per member per tick. Any value can be
//! overridden from a TOML file passed with `--config`.

use serde::Deserialize;
use std::path::Path;

use crate::core::error::{Result, SimError};

/// Configuration for the ant colony territory
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColonyConfig {
    /// Maximum number of groups the territory holds (`None` = unbounded)
    pub capacity: Option<usize>,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self { capacity: Some(10) }
    }
}

/// Configuration for the hive field
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HiveConfig {
    /// Maximum number of hives in the field (`None` = unbounded)
    pub capacity: Option<usize>,

    /// Food a freshly spawned hive starts with
    pub starting_food: i64,

    /// Food eaten per tick by every worker and guard
    ///
    /// Guards never forage, so with the default rates a hive loses
    /// one unit of food per guard per tick.
    pub food_per_member: u32,

    /// Food brought in per tick by every worker
    pub forage_per_worker: u32,

    /// Upper bound on `tick <qty>` so a typo can't stall the console
    pub max_ticks_per_command: u32,
}

impl Default for HiveConfig {
    fn default() -> Self {
        Self {
            capacity: None,
            starting_food: 10,
            food_per_member: 1,
            forage_per_worker: 1,
            max_ticks_per_command: 1000,
        }
    }
}

/// Top-level configuration for both simulations
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub colony: ColonyConfig,
    pub hive: HiveConfig,
}

impl SimulationConfig {
    /// Load and validate a config from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::parse_toml(&content)
    }

    /// Parse and validate a config from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: SimulationConfig =
            toml::from_str(content).map_err(|e| SimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.colony.capacity == Some(0) {
            return Err(SimError::Config("colony.capacity must be at least 1".into()));
        }
        if self.hive.capacity == Some(0) {
            return Err(SimError::Config("hive.capacity must be at least 1".into()));
        }
        if self.hive.max_ticks_per_command == 0 {
            return Err(SimError::Config(
                "hive.max_ticks_per_command must be at least 1".into(),
            ));
        }
        if self.hive.starting_food < 0 {
            return Err(SimError::Config(format!(
                "hive.starting_food ({}) must not be negative",
                self.hive.starting_food
            )));
        }
        Ok(())
    }
}
