//! AntGroup - one ant population tracked by the territory

use crate::core::registry::Entity;
use crate::core::types::Tick;

/// An ant population with workers, warriors and a record of its conquests
#[derive(Debug, Clone)]
pub struct AntGroup {
    pub name: String,
    pub kind: String,
    workers: u32,
    warriors: u32,
    victories: u64,
    conquests: Vec<String>,
    age: Tick,
    active: bool,
    eliminated_by: Option<String>,
}

impl AntGroup {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            workers: 0,
            warriors: 0,
            victories: 0,
            conquests: Vec::new(),
            age: 0,
            active: true,
            eliminated_by: None,
        }
    }

    pub fn workers(&self) -> u32 {
        self.workers
    }

    pub fn warriors(&self) -> u32 {
        self.warriors
    }

    pub fn victories(&self) -> u64 {
        self.victories
    }

    pub fn conquests(&self) -> &[String] {
        &self.conquests
    }

    /// Combined headcount, credited to whoever defeats this group
    pub fn headcount(&self) -> u64 {
        u64::from(self.workers) + u64::from(self.warriors)
    }

    pub fn add_resources(&mut self, workers: u32, warriors: u32) {
        if !self.active {
            return;
        }
        self.workers = self.workers.saturating_add(workers);
        self.warriors = self.warriors.saturating_add(warriors);
    }

    pub fn record_victories(&mut self, count: u64) {
        if !self.active {
            return;
        }
        self.victories = self.victories.saturating_add(count);
    }

    pub fn register_conquest(&mut self, name: impl Into<String>) {
        if !self.active {
            return;
        }
        self.conquests.push(name.into());
    }

    /// Mark the group as eliminated. The first cause sticks.
    pub fn eliminate(&mut self, cause: impl Into<String>) {
        if !self.active {
            return;
        }
        self.active = false;
        self.eliminated_by = Some(cause.into());
    }
}

impl Entity for AntGroup {
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
        if self.active {
            self.age += 1;
        }
    }

    fn describe(&self) -> String {
        let mut conquests = self.conquests.len().to_string();
        if !self.conquests.is_empty() {
            conquests.push_str(&format!(" ({})", self.conquests.join(", ")));
        }
        let status = match &self.eliminated_by {
            Some(cause) if !self.active => format!("Eliminated by {}", cause),
            _ => "Active".to_string(),
        };

        format!(
            "Type: {}\nWorkers: {}\nWarriors: {}\nEliminations: {}\nConquests: {}\nSurvival Time: {}\nStatus: {}",
            self.kind, self.workers, self.warriors, self.victories, conquests, self.age, status
        )
    }
}
