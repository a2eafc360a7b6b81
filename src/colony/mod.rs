//! Ant colony simulation
//!
//! Groups are founded empty, fed workers and warriors, and fight each
//! other for control of a shared territory.

pub mod group;
pub mod territory;

pub use group::AntGroup;
pub use territory::{ConflictOutcome, Territory};
