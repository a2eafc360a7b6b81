//! Hive - one bug colony on the field, living off its food stock

use serde::Serialize;

use crate::apiary::traits::{render_traits, traits_for_kind, BugTrait};
use crate::core::config::HiveConfig;
use crate::core::registry::Entity;
use crate::core::types::{Position, Tick, STARVATION};

/// Per-tick food rates, captured from config when the hive is spawned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiveUpkeep {
    pub food_per_member: u32,
    pub forage_per_worker: u32,
}

impl From<&HiveConfig> for HiveUpkeep {
    fn from(config: &HiveConfig) -> Self {
        Self {
            food_per_member: config.food_per_member,
            forage_per_worker: config.forage_per_worker,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Hive {
    pub name: String,
    pub kind: String,
    pub position: Position,
    traits: Vec<BugTrait>,
    workers: u32,
    guards: u32,
    food: i64,
    age: Tick,
    active: bool,
    eliminated_by: Option<String>,
    #[serde(skip)]
    upkeep: HiveUpkeep,
}

impl Hive {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        position: Position,
        starting_food: i64,
        upkeep: HiveUpkeep,
    ) -> Self {
        let kind = kind.into();
        Self {
            name: name.into(),
            traits: traits_for_kind(&kind),
            kind,
            position,
            workers: 0,
            guards: 0,
            food: starting_food,
            age: 0,
            active: true,
            eliminated_by: None,
            upkeep,
        }
    }

    pub fn workers(&self) -> u32 {
        self.workers
    }

    pub fn guards(&self) -> u32 {
        self.guards
    }

    pub fn food(&self) -> i64 {
        self.food
    }

    pub fn traits(&self) -> &[BugTrait] {
        &self.traits
    }

    pub fn add_resources(&mut self, workers: u32, guards: u32) {
        if !self.active {
            return;
        }
        self.workers = self.workers.saturating_add(workers);
        self.guards = self.guards.saturating_add(guards);
    }

    pub fn add_food(&mut self, amount: u32) {
        if !self.active {
            return;
        }
        self.food = self.food.saturating_add(i64::from(amount));
    }

    /// Food gained (or lost, if negative) over one tick, clamped to `i64`
    pub fn food_balance(&self) -> i64 {
        let members = i64::from(self.workers) + i64::from(self.guards);
        let foraged = i64::from(self.workers).saturating_mul(i64::from(self.upkeep.forage_per_worker));
        let eaten = members.saturating_mul(i64::from(self.upkeep.food_per_member));
        foraged.saturating_sub(eaten)
    }

    pub fn eliminate(&mut self, cause: impl Into<String>) {
        if !self.active {
            return;
        }
        self.active = false;
        self.eliminated_by = Some(cause.into());
    }
}

impl Entity for Hive {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &str {
        &self.kind
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn eliminated_by(&self) -> Option<&str> {
        self.eliminated_by.as_deref()
    }

    fn age(&self) -> Tick {
        self.age
    }

    fn advance_time(&mut self) {
        if !self.active {
            return;
        }
        self.age += 1;
        self.food = self.food.saturating_add(self.food_balance());
        if self.food < 0 {
            tracing::info!(name = %self.name, food = self.food, age = self.age, "hive starved");
            self.eliminate(STARVATION);
        }
    }

    fn describe(&self) -> String {
        let status = match &self.eliminated_by {
            Some(cause) if !self.active => format!("Eliminated by {}", cause),
            _ => "Active".to_string(),
        };
        format!(
            "Hive: {} ({}) at {}\n{}\nWorkers: {}\nGuards: {}\nFood: {}\nAge: {}\nStatus: {}",
            self.name,
            self.kind,
            self.position,
            render_traits(&self.traits),
            self.workers,
            self.guards,
            self.food,
            self.age,
            status
        )
    }
}
