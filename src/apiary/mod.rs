//! Hive management simulation
//!
//! Hives sit on a field, are given workers, guards and food, and starve
//! once their food stock drops below zero.

pub mod field;
pub mod hive;
pub mod traits;

pub use field::{Field, Resource, TickReport};
pub use hive::{Hive, HiveUpkeep};
pub use traits::{render_traits, traits_for_kind, BugTrait};
