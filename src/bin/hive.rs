//! Hive management console
//!
//! Reads one command per line (`spawn`, `give`, `tick`, `summary`, `list`,
//! `dump`, `quit`) and applies it to a field of hives.

use clap::Parser;
use colony_sim::apiary::Field;
use colony_sim::cli::{CommonArgs, Target};
use colony_sim::command::line::HELP;
use colony_sim::command::LineSession;
use colony_sim::core::error::Result;

use std::io;

/// Hive management simulation
#[derive(Parser, Debug)]
#[command(name = "hive")]
#[command(about = "Spawn hives, feed them, and watch which ones starve")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Skip the command overview printed at start-up
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.common.init_tracing();

    let config = args.common.load_config(Target::Hive)?;
    tracing::info!(
        capacity = ?config.hive.capacity,
        starting_food = config.hive.starting_food,
        "hive field starting"
    );

    if !args.quiet {
        println!("=== HIVE MANAGEMENT ===");
        println!("{}", HELP);
        println!();
    }

    let field = Field::new(&config.hive);
    let stdin = io::stdin();
    let mut session = LineSession::new(field, stdin.lock(), io::stdout());
    session.run()?;

    let field = session.field();
    tracing::info!(hives = field.len(), ticks = field.elapsed(), "hive field finished");
    Ok(())
}
