//! Territory - the registry of ant groups and the conflict rule between them

use crate::colony::group::AntGroup;
use crate::core::config::ColonyConfig;
use crate::core::error::{Result, SimError};
use crate::core::registry::{Entity, Registry};
use crate::core::types::Listing;

/// Result of pitting one group against another
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictOutcome {
    /// The aggressor had strictly more warriors and wiped out the defender
    Victory {
        winner: String,
        loser: String,
        spoils: u64,
    },
    /// The defender held (equal or greater warrior count)
    Repelled { defender: String },
}

impl std::fmt::Display for ConflictOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictOutcome::Victory { winner, loser, .. } => {
                write!(f, "{} defeated {}!", winner, loser)
            }
            ConflictOutcome::Repelled { defender } => {
                write!(f, "{} successfully defended.", defender)
            }
        }
    }
}

/// All ant groups sharing one territory
#[derive(Debug, Clone, Default)]
pub struct Territory {
    groups: Registry<AntGroup>,
}

impl Territory {
    pub fn new(config: &ColonyConfig) -> Self {
        Self {
            groups: Registry::with_capacity(config.capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group(&self, index: usize) -> Result<&AntGroup> {
        self.groups.get(index)
    }

    /// Found a new group with no workers or warriors
    pub fn establish(&mut self, name: &str, kind: &str) -> Result<usize> {
        let index = self.groups.create(AntGroup::new(name, kind))?;
        tracing::info!(index, name, kind, "population established");
        Ok(index)
    }

    /// Add workers and warriors to a group (ignored if it has been eliminated)
    pub fn allocate(&mut self, index: usize, workers: u32, warriors: u32) -> Result<&AntGroup> {
        let group = self.groups.get_mut(index)?;
        group.add_resources(workers, warriors);
        tracing::debug!(
            name = %group.name,
            workers,
            warriors,
            active = group.is_active(),
            "resources allocated"
        );
        Ok(group)
    }

    /// Advance every group by one tick
    pub fn progress(&mut self) {
        self.groups.advance_all();
    }

    /// Resolve an attack. Strictly more warriors wins; ties go to the defender.
    pub fn resolve_conflict(&mut self, aggressor: usize, defender: usize) -> Result<ConflictOutcome> {
        let attacker = self.groups.get(aggressor)?;
        let target = self.groups.get(defender)?;
        for side in [attacker, target] {
            if !side.is_active() {
                return Err(SimError::InactiveParticipant(side.name.clone()));
            }
        }

        if aggressor == defender || attacker.warriors() <= target.warriors() {
            tracing::info!(aggressor = %attacker.name, defender = %target.name, "attack repelled");
            return Ok(ConflictOutcome::Repelled {
                defender: target.name.clone(),
            });
        }

        let (attacker, target) = self.groups.pair_mut(aggressor, defender)?;
        let spoils = target.headcount();
        attacker.record_victories(spoils);
        attacker.register_conquest(target.name.clone());
        target.eliminate(attacker.name.clone());
        tracing::info!(winner = %attacker.name, loser = %target.name, spoils, "group eliminated");

        Ok(ConflictOutcome::Victory {
            winner: attacker.name.clone(),
            loser: target.name.clone(),
            spoils,
        })
    }

    pub fn list(&self) -> Vec<Listing> {
        self.groups.list()
    }

    pub fn describe(&self, index: usize) -> Result<String> {
        self.groups.describe(index)
    }
}
