//! Field - the registry of hives and the operations line commands map to

use serde::Serialize;

use crate::apiary::hive::{Hive, HiveUpkeep};
use crate::core::config::HiveConfig;
use crate::core::error::{Result, SimError};
use crate::core::registry::{Entity, Registry};
use crate::core::types::{Listing, Position};

/// What a `give` command hands to a hive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Food,
    Workers,
    Guards,
}

impl std::str::FromStr for Resource {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Resource::Food),
            "workers" | "worker" | "labor" => Ok(Resource::Workers),
            "guards" | "guard" | "combat" => Ok(Resource::Guards),
            _ => Err(SimError::MalformedInput(format!(
                "unknown resource '{}' (expected food, workers or guards)",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Food => f.write_str("food"),
            Resource::Workers => f.write_str("workers"),
            Resource::Guards => f.write_str("guards"),
        }
    }
}

/// Summary of one `tick` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub ticks: u32,
    pub starved: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Field {
    hives: Registry<Hive>,
    #[serde(skip)]
    config: HiveConfig,
    elapsed: u64,
}

impl Field {
    pub fn new(config: &HiveConfig) -> Self {
        Self {
            hives: Registry::with_capacity(config.capacity),
            config: config.clone(),
            elapsed: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.hives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hives.is_empty()
    }

    /// Ticks run since the field was created
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub fn hive(&self, index: usize) -> Result<&Hive> {
        self.hives.get(index)
    }

    /// Place a new hive; its name is derived from kind and index
    pub fn spawn(&mut self, x: i32, y: i32, kind: &str) -> Result<usize> {
        let name = format!("{}#{}", kind, self.hives.next_index());
        let hive = Hive::new(
            name,
            kind,
            Position::new(x, y),
            self.config.starting_food,
            HiveUpkeep::from(&self.config),
        );
        let index = self.hives.create(hive)?;
        tracing::info!(index, kind, x, y, "hive spawned");
        Ok(index)
    }

    pub fn give(&mut self, index: usize, resource: Resource, quantity: u32) -> Result<&Hive> {
        let hive = self.hives.get_mut(index)?;
        match resource {
            Resource::Food => hive.add_food(quantity),
            Resource::Workers => hive.add_resources(quantity, 0),
            Resource::Guards => hive.add_resources(0, quantity),
        }
        tracing::debug!(name = %hive.name, %resource, quantity, active = hive.is_active(), "resource given");
        Ok(hive)
    }

    /// Run `count` ticks over every hive
    pub fn tick(&mut self, count: u32) -> Result<TickReport> {
        let max = self.config.max_ticks_per_command;
        if count == 0 || count > max {
            return Err(SimError::MalformedInput(format!(
                "tick count must be between 1 and {}, got {}",
                max, count
            )));
        }

        let alive_before: Vec<bool> = self.hives.iter().map(|h| h.is_active()).collect();
        for _ in 0..count {
            self.hives.advance_all();
        }
        self.elapsed += u64::from(count);

        let starved = self
            .hives
            .iter()
            .zip(alive_before)
            .filter(|(hive, was_alive)| *was_alive && !hive.is_active())
            .map(|(hive, _)| hive.name.clone())
            .collect();

        Ok(TickReport { ticks: count, starved })
    }

    pub fn summary(&self, index: usize) -> Result<String> {
        self.hives.describe(index)
    }

    pub fn list(&self) -> Vec<Listing> {
        self.hives.list()
    }

    /// Pretty-printed JSON of every hive
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
