//! Core type definitions used throughout the codebase

use serde::Serialize;

/// Simulation tick counter (one discrete time step)
pub type Tick = u64;

/// Cause recorded when a hive runs out of food
pub const STARVATION: &str = "starvation";

/// Position of a hive on the field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One row of a registry listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub index: usize,
    pub name: String,
    pub kind: String,
    pub active: bool,
}
