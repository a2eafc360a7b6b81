//! Registry - an owned arena of entities addressed by stable index
//!
//! Entries are appended and never removed, so an index handed out by
//! [`Registry::create`] stays valid for the registry's whole lifetime.
//! Eliminated entities keep their slot and simply stop changing.

use ahash::AHashSet;
use serde::Serialize;

use crate::core::error::{Result, SimError};
use crate::core::types::{Listing, Tick};

/// Behaviour shared by everything a registry can hold
pub trait Entity {
    fn name(&self) -> &str;
    fn kind(&self) -> &str;
    fn is_active(&self) -> bool;
    fn eliminated_by(&self) -> Option<&str>;
    fn age(&self) -> Tick;

    /// Advance one tick. Must be a no-op once the entity is inactive.
    fn advance_time(&mut self);

    /// Multi-line, human-readable status report
    fn describe(&self) -> String;
}

/// Bounded or unbounded collection of entities
#[derive(Debug, Clone, Serialize)]
pub struct Registry<E> {
    entries: Vec<E>,
    #[serde(skip)]
    names: AHashSet<String>,
    capacity: Option<usize>,
}

impl<E: Entity> Registry<E> {
    pub fn new() -> Self {
        Self::with_capacity(None)
    }

    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            entries: Vec::new(),
            names: AHashSet::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index the next created entity will receive
    pub fn next_index(&self) -> usize {
        self.entries.len()
    }

    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.entries.len() >= cap)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Append an entity, returning its index
    pub fn create(&mut self, entity: E) -> Result<usize> {
        if let Some(capacity) = self.capacity {
            if self.entries.len() >= capacity {
                return Err(SimError::CapacityExceeded { capacity });
            }
        }
        if self.names.contains(entity.name()) {
            return Err(SimError::DuplicateName(entity.name().to_string()));
        }

        let index = self.entries.len();
        self.names.insert(entity.name().to_string());
        tracing::debug!(index, name = entity.name(), kind = entity.kind(), "registered entity");
        self.entries.push(entity);
        Ok(index)
    }

    pub fn get(&self, index: usize) -> Result<&E> {
        let count = self.entries.len();
        self.entries
            .get(index)
            .ok_or(SimError::InvalidIndex { index, count })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut E> {
        let count = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(SimError::InvalidIndex { index, count })
    }

    /// Mutable access to two distinct entries at once
    pub fn pair_mut(&mut self, first: usize, second: usize) -> Result<(&mut E, &mut E)> {
        let count = self.entries.len();
        for index in [first, second] {
            if index >= count {
                return Err(SimError::InvalidIndex { index, count });
            }
        }
        if first == second {
            return Err(SimError::MalformedInput(format!(
                "index {} cannot be paired with itself",
                first
            )));
        }

        if first < second {
            let (head, tail) = self.entries.split_at_mut(second);
            Ok((&mut head[first], &mut tail[0]))
        } else {
            let (head, tail) = self.entries.split_at_mut(first);
            Ok((&mut tail[0], &mut head[second]))
        }
    }

    /// Advance every entity by one tick; inactive ones ignore it
    pub fn advance_all(&mut self) {
        for entity in &mut self.entries {
            entity.advance_time();
        }
    }

    pub fn list(&self) -> Vec<Listing> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, e)| Listing {
                index,
                name: e.name().to_string(),
                kind: e.kind().to_string(),
                active: e.is_active(),
            })
            .collect()
    }

    pub fn describe(&self, index: usize) -> Result<String> {
        self.get(index).map(|e| e.describe())
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.iter()
    }

    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_active()).count()
    }
}

impl<E: Entity> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}
