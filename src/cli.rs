//! Flags and start-up shared by the `colony` and `hive` binaries

use clap::Args;
use std::path::PathBuf;

use crate::core::config::SimulationConfig;
use crate::core::error::Result;

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// TOML file overriding the default simulation settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum number of entries in the registry (overrides config)
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Log registry activity to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Which registry `--capacity` applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Colony,
    Hive,
}

impl CommonArgs {
    /// Defaults, then the config file, then command-line overrides
    pub fn load_config(&self, target: Target) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load_from_toml(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(capacity) = self.capacity {
            match target {
                Target::Colony => config.colony.capacity = Some(capacity),
                Target::Hive => config.hive.capacity = Some(capacity),
            }
            config.validate()?;
        }
        Ok(config)
    }

    /// Install the fmt subscriber. `RUST_LOG` wins over `--verbose`.
    pub fn init_tracing(&self) {
        let default = if self.verbose {
            "colony_sim=debug"
        } else {
            "colony_sim=warn"
        };
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SimError;

    #[test]
    fn test_capacity_override_targets_one_registry() {
        let args = CommonArgs {
            capacity: Some(3),
            ..CommonArgs::default()
        };
        let config = args.load_config(Target::Hive).unwrap();
        assert_eq!(config.hive.capacity, Some(3));
        assert_eq!(config.colony.capacity, Some(10));

        let config = args.load_config(Target::Colony).unwrap();
        assert_eq!(config.colony.capacity, Some(3));
        assert_eq!(config.hive.capacity, None);
    }

    #[test]
    fn test_zero_capacity_override_rejected() {
        let args = CommonArgs {
            capacity: Some(0),
            ..CommonArgs::default()
        };
        assert!(matches!(
            args.load_config(Target::Colony),
            Err(SimError::Config(_))
        ));
    }
}
