//! Line-command console for the hive field
//!
//! One command per line, first token selects the command:
//! `spawn x y type`, `give id resource qty`, `tick [qty]`, `summary id`,
//! `list`, `dump`, `help`, `quit`.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::apiary::{Field, Resource};
use crate::command::Flow;
use crate::core::error::{Result, SimError};
use crate::core::registry::Entity;

pub const HELP: &str = "Commands:
  spawn <x> <y> <type>        - Place a new hive
  give <id> <resource> <qty>  - Give food, workers or guards to a hive
  tick [qty]                  - Advance the field (default 1 tick)
  summary <id>                - Show a hive's status
  list                        - List all hives
  dump                        - Print every hive as JSON
  quit                        - Exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Spawn { x: i32, y: i32, kind: String },
    Give { index: usize, resource: Resource, quantity: u32 },
    Tick { count: u32 },
    Summary { index: usize },
    List,
    Dump,
    Help,
    Quit,
}

impl LineCommand {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&verb, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match verb.to_lowercase().as_str() {
            "spawn" => {
                expect_args(verb, args, 3, "spawn <x> <y> <type>")?;
                LineCommand::Spawn {
                    x: number(args[0], "x")?,
                    y: number(args[1], "y")?,
                    kind: args[2].to_string(),
                }
            }
            "give" => {
                expect_args(verb, args, 3, "give <id> <resource> <qty>")?;
                LineCommand::Give {
                    index: number(args[0], "id")?,
                    resource: args[1].parse()?,
                    quantity: number(args[2], "qty")?,
                }
            }
            "tick" => {
                if args.len() > 1 {
                    return Err(usage("tick [qty]"));
                }
                let count = match args.first() {
                    Some(qty) => number(qty, "qty")?,
                    None => 1,
                };
                LineCommand::Tick { count }
            }
            "summary" => {
                expect_args(verb, args, 1, "summary <id>")?;
                LineCommand::Summary {
                    index: number(args[0], "id")?,
                }
            }
            "list" => LineCommand::List,
            "dump" => LineCommand::Dump,
            "help" => LineCommand::Help,
            "quit" | "exit" => LineCommand::Quit,
            other => {
                return Err(SimError::MalformedInput(format!(
                    "unknown command '{}' (type 'help')",
                    other
                )))
            }
        };
        Ok(Some(command))
    }
}

fn expect_args(verb: &str, args: &[&str], count: usize, form: &str) -> Result<()> {
    if args.len() != count {
        tracing::debug!(verb, given = args.len(), expected = count, "wrong argument count");
        return Err(usage(form));
    }
    Ok(())
}

fn usage(form: &str) -> SimError {
    SimError::MalformedInput(format!("usage: {}", form))
}

fn number<T: FromStr>(token: &str, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| SimError::MalformedInput(format!("{} must be a number, got '{}'", what, token)))
}

/// Interactive line loop that owns the field it drives
pub struct LineSession<R, W> {
    field: Field,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> LineSession<R, W> {
    pub fn new(field: Field, input: R, out: W) -> Self {
        Self { field, input, out }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Run until `quit` or end of input. Only I/O failures escape.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.out)?;
                break;
            }

            match self.execute_line(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if e.is_recoverable() => {
                    tracing::warn!(error = %e, line = line.trim(), "command rejected");
                    writeln!(self.out, "error: {}", e)?;
                }
                Err(e) => return Err(e),
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        match LineCommand::parse(line)? {
            Some(command) => self.execute(command),
            None => Ok(Flow::Continue),
        }
    }

    pub fn execute(&mut self, command: LineCommand) -> Result<Flow> {
        match command {
            LineCommand::Spawn { x, y, kind } => {
                let index = self.field.spawn(x, y, &kind)?;
                let hive = self.field.hive(index)?;
                writeln!(
                    self.out,
                    "Spawned {} at {} with id {}.",
                    hive.name, hive.position, index
                )?;
            }
            LineCommand::Give { index, resource, quantity } => {
                let hive = self.field.give(index, resource, quantity)?;
                if hive.is_active() {
                    writeln!(self.out, "Gave {} {} to {}.", quantity, resource, hive.name)?;
                } else {
                    writeln!(self.out, "{} has been eliminated; nothing changed.", hive.name)?;
                }
            }
            LineCommand::Tick { count } => {
                let report = self.field.tick(count)?;
                writeln!(self.out, "Advanced {} tick(s).", report.ticks)?;
                for name in &report.starved {
                    writeln!(self.out, "{} starved.", name)?;
                }
            }
            LineCommand::Summary { index } => {
                let summary = self.field.summary(index)?;
                writeln!(self.out, "{}", summary)?;
            }
            LineCommand::List => {
                let listings = self.field.list();
                if listings.is_empty() {
                    writeln!(self.out, "No hives yet.")?;
                }
                for listing in listings {
                    let marker = if listing.active { "" } else { " - eliminated" };
                    writeln!(
                        self.out,
                        "  [{}] {} ({}){}",
                        listing.index, listing.name, listing.kind, marker
                    )?;
                }
            }
            LineCommand::Dump => {
                let json = self.field.snapshot_json()?;
                writeln!(self.out, "{}", json)?;
            }
            LineCommand::Help => writeln!(self.out, "{}", HELP)?,
            LineCommand::Quit => {
                writeln!(self.out, "Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spawn() {
        assert_eq!(
            LineCommand::parse("spawn 3 -2 bee").unwrap(),
            Some(LineCommand::Spawn { x: 3, y: -2, kind: "bee".into() })
        );
    }

    #[test]
    fn test_parse_give() {
        assert_eq!(
            LineCommand::parse("  GIVE 0 food 12 ").unwrap(),
            Some(LineCommand::Give { index: 0, resource: Resource::Food, quantity: 12 })
        );
    }

    #[test]
    fn test_parse_tick_default_and_explicit() {
        assert_eq!(LineCommand::parse("tick").unwrap(), Some(LineCommand::Tick { count: 1 }));
        assert_eq!(LineCommand::parse("tick 7").unwrap(), Some(LineCommand::Tick { count: 7 }));
        assert!(LineCommand::parse("tick 1 2").is_err());
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(LineCommand::parse("   \n").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for line in [
            "spawn 1 2",
            "spawn a 2 bee",
            "give 0 honey 3",
            "give x food 3",
            "give 0 food -3",
            "summary",
            "fly 1",
        ] {
            assert!(
                matches!(LineCommand::parse(line), Err(SimError::MalformedInput(_))),
                "expected MalformedInput for '{}'",
                line
            );
        }
    }

    #[test]
    fn test_parse_quit_aliases() {
        assert_eq!(LineCommand::parse("quit").unwrap(), Some(LineCommand::Quit));
        assert_eq!(LineCommand::parse("exit").unwrap(), Some(LineCommand::Quit));
    }
}
