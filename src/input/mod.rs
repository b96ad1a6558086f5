use anyhow::*;
use std::io::{self, BufRead};

#[cfg(test)]
pub mod mock;

/// A source of typed lines.
pub trait AnswerInput {
    /// Blocks until the player submits a line. Returns `None` once the input is
    /// exhausted. The line terminator is left in place.
    fn read_answer(&mut self) -> Result<Option<String>>;
}

#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        TerminalInput
    }
}

impl AnswerInput for TerminalInput {
    fn read_answer(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes_read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Could not read from standard input")?;
        if bytes_read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
