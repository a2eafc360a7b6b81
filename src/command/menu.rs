//! Menu-numbered console for the ant colony
//!
//! Options 1-7 map to establish / allocate / progress / conflict / status /
//! list / exit. Groups are shown and selected 1-based; the territory itself
//! is addressed 0-based.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::colony::Territory;
use crate::command::tokens::TokenReader;
use crate::command::Flow;
use crate::core::error::{Result, SimError};
use crate::core::registry::Entity;

const MENU: &str = "
--- Ecosystem Population Simulation ---
1. Establish Population
2. Allocate Resources
3. Progress Timeline
4. Initiate Conflict
5. Display Population Status
6. List Populations
7. Exit";

/// Interactive menu loop that owns the territory it drives
pub struct MenuSession<R, W> {
    territory: Territory,
    input: TokenReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    pub fn new(territory: Territory, input: R, out: W) -> Self {
        Self {
            territory,
            input: TokenReader::new(input),
            out,
        }
    }

    pub fn territory(&self) -> &Territory {
        &self.territory
    }

    /// Run until the user exits or input ends. Only I/O failures escape.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if e.is_recoverable() => {
                    tracing::warn!(error = %e, "menu action rejected");
                    self.input.discard_pending();
                    let message = menu_message(&e);
                    writeln!(self.out, "{}", message)?;
                }
                Err(e) => return Err(e),
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Present the menu and carry out one selection
    pub fn step(&mut self) -> Result<Flow> {
        writeln!(self.out, "{}", MENU)?;
        let Some(token) = self.prompt_token("Select action: ")? else {
            return Ok(Flow::Exit);
        };

        match token.parse::<u32>() {
            Ok(1) => self.establish(),
            Ok(2) => self.allocate(),
            Ok(3) => {
                self.territory.progress();
                writeln!(self.out, "Time progression completed.")?;
                Ok(Flow::Continue)
            }
            Ok(4) => self.conflict(),
            Ok(5) => self.status(),
            Ok(6) => {
                self.print_list()?;
                Ok(Flow::Continue)
            }
            Ok(7) => {
                writeln!(self.out, "Simulation Terminating. Farewell!")?;
                Ok(Flow::Exit)
            }
            _ => {
                writeln!(self.out, "Invalid Selection. Retry.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn establish(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt_token("Population Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(kind) = self.prompt_token("Population Type: ")? else {
            return Ok(Flow::Exit);
        };

        self.territory.establish(&name, &kind)?;
        writeln!(self.out, "Population {} of type {} established.", name, kind)?;
        Ok(Flow::Continue)
    }

    fn allocate(&mut self) -> Result<Flow> {
        self.print_list()?;
        let Some(choice) = self.prompt_value::<usize>("Select Population Index: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(workers) = self.prompt_value::<u32>("Laborers Count: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(warriors) = self.prompt_value::<u32>("Fighters Count: ")? else {
            return Ok(Flow::Exit);
        };

        let index = self.slot(choice)?;
        let group = self.territory.allocate(index, workers, warriors)?;
        if group.is_active() {
            writeln!(self.out, "Resources allocated to {}.", group.name)?;
        } else {
            writeln!(self.out, "{} has been eliminated; nothing changed.", group.name)?;
        }
        Ok(Flow::Continue)
    }

    fn conflict(&mut self) -> Result<Flow> {
        self.print_list()?;
        let Some(aggressor) = self.prompt_value::<usize>("Aggressor Population Index: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(defender) = self.prompt_value::<usize>("Defender Population Index: ")? else {
            return Ok(Flow::Exit);
        };

        let (aggressor, defender) = (self.slot(aggressor)?, self.slot(defender)?);
        let outcome = self.territory.resolve_conflict(aggressor, defender)?;
        writeln!(self.out, "{}", outcome)?;
        Ok(Flow::Continue)
    }

    fn status(&mut self) -> Result<Flow> {
        self.print_list()?;
        let Some(choice) = self.prompt_value::<usize>("Population Index for Status: ")? else {
            return Ok(Flow::Exit);
        };

        let index = self.slot(choice)?;
        let report = self.territory.describe(index)?;
        writeln!(self.out, "{}", report)?;
        Ok(Flow::Continue)
    }

    fn print_list(&mut self) -> Result<()> {
        writeln!(self.out, "Current Populations:")?;
        for listing in self.territory.list() {
            writeln!(self.out, "{}. {} ({})", listing.index + 1, listing.name, listing.kind)?;
        }
        Ok(())
    }

    /// Convert an on-screen 1-based choice to a territory index
    fn slot(&self, choice: usize) -> Result<usize> {
        choice.checked_sub(1).ok_or(SimError::InvalidIndex {
            index: choice,
            count: self.territory.len(),
        })
    }

    fn prompt_token(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        self.input.next_token()
    }

    fn prompt_value<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>> {
        let Some(token) = self.prompt_token(prompt)? else {
            return Ok(None);
        };
        token
            .parse::<T>()
            .map(Some)
            .map_err(|_| SimError::MalformedInput(format!("expected a non-negative number, got '{}'", token)))
    }
}

/// Console wording for errors in the menu interface
fn menu_message(err: &SimError) -> String {
    match err {
        SimError::InvalidIndex { .. } => "Invalid group selection.".to_string(),
        SimError::CapacityExceeded { .. } => {
            "Population limit reached. Cannot create more groups.".to_string()
        }
        SimError::InactiveParticipant(_) => {
            "Both populations must be active for conflict.".to_string()
        }
        SimError::DuplicateName(name) => format!("A population named {} already exists.", name),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ColonyConfig;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Territory, String) {
        let territory = Territory::new(&ColonyConfig::default());
        let mut out = Vec::new();
        let mut session = MenuSession::new(territory, Cursor::new(script.to_string()), &mut out);
        session.run().unwrap();
        let territory = session.territory().clone();
        drop(session);
        (territory, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_establish_and_allocate() {
        let (territory, output) = run_script("1\nRed\nFire\n2\n1\n5\n3\n7\n");
        assert!(output.contains("Population Red of type Fire established."));
        assert!(output.contains("Resources allocated to Red."));
        assert!(output.contains("Simulation Terminating. Farewell!"));
        let red = territory.group(0).unwrap();
        assert_eq!(red.workers(), 5);
        assert_eq!(red.warriors(), 3);
    }

    #[test]
    fn test_invalid_selection_continues() {
        let (_, output) = run_script("9\nabc\n7\n");
        assert_eq!(output.matches("Invalid Selection. Retry.").count(), 2);
        assert!(output.contains("Farewell"));
    }

    #[test]
    fn test_zero_choice_is_invalid_group() {
        let (_, output) = run_script("1 Red Fire\n5\n0\n7\n");
        assert!(output.contains("Invalid group selection."));
    }

    #[test]
    fn test_malformed_count_reports_and_continues() {
        let (territory, output) = run_script("1 Red Fire\n2\n1\n-4\n3\n7\n");
        assert!(output.contains("Malformed input"));
        assert_eq!(territory.group(0).unwrap().workers(), 0);
        assert!(output.contains("Farewell"));
    }

    #[test]
    fn test_eof_ends_session() {
        let (territory, output) = run_script("1\nRed\n");
        assert!(territory.is_empty());
        assert!(!output.contains("Farewell"));
    }
}
