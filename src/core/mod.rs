pub mod config;
pub mod error;
pub mod registry;
pub mod types;

pub use config::SimulationConfig;
pub use error::{Result, SimError};
pub use registry::{Entity, Registry};
