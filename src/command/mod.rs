//! Console front ends
//!
//! Two sessions read commands from any `BufRead`, apply them to the registry
//! they own, and write results to any `Write`:
//! MenuSession (ant colony, numbered menu) and LineSession (hives, line commands).

pub mod line;
pub mod menu;
pub mod tokens;

pub use line::{LineCommand, LineSession};
pub use menu::MenuSession;
pub use tokens::TokenReader;

/// Whether a session keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}
