//! Whitespace token stream over any buffered reader
//!
//! Tokens may arrive one per line or several on a line; either way they are
//! handed out in order. Used by the menu session, which prompts for values
//! one at a time.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::core::error::Result;

pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the input is exhausted
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Drop whatever is left of the current line
    pub fn discard_pending(&mut self) {
        self.pending.clear();
    }
}
