//! Colony Sim - ant colony entry point
//!
//! Builds the territory from config and hands it to the numbered menu
//! session, which runs until the user exits or stdin closes.

use clap::Parser;
use colony_sim::cli::{CommonArgs, Target};
use colony_sim::colony::Territory;
use colony_sim::command::MenuSession;
use colony_sim::core::error::Result;

use std::io;

/// Ant colony population simulation
#[derive(Parser, Debug)]
#[command(name = "colony")]
#[command(about = "Grow ant populations and pit them against each other")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.common.init_tracing();

    let config = args.common.load_config(Target::Colony)?;
    tracing::info!(capacity = ?config.colony.capacity, "ant colony starting");

    let territory = Territory::new(&config.colony);
    let stdin = io::stdin();
    let mut session = MenuSession::new(territory, stdin.lock(), io::stdout());
    session.run()?;

    let territory = session.territory();
    tracing::info!(groups = territory.len(), "ant colony finished");
    Ok(())
}
