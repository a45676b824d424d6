//! # Input Module
//!
//! Turns lines typed at the terminal into commands.

pub mod commands;

pub use commands::*;

use crate::DelveResult;

/// Line-oriented input handler.
///
/// A line is either one command word (`left`, `quit`) or a run of single-key
/// commands (`wwdd`), which are replayed in order.
pub struct InputHandler {
    /// Whether to accept Vi-style movement keys (hjkl)
    pub vi_keys_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Command, Direction, InputHandler};
    ///
    /// let input = InputHandler::new();
    /// let commands = input.parse_line("dds").unwrap();
    /// assert_eq!(commands.len(), 3);
    /// assert_eq!(commands[2], Command::Move(Direction::Down));
    /// ```
    pub fn new() -> Self {
        Self {
            vi_keys_enabled: true,
        }
    }

    /// Parses a whole line. Blank lines yield no commands.
    pub fn parse_line(&self, line: &str) -> DelveResult<Vec<Command>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Vec::new());
        }

        if let Ok(command) = self.parse_key(line) {
            return Ok(vec![command]);
        }

        line.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| self.parse_key(&c.to_string()))
            .collect()
    }

    fn parse_key(&self, key: &str) -> DelveResult<Command> {
        let lower = key.to_ascii_lowercase();
        if !self.vi_keys_enabled && matches!(lower.as_str(), "h" | "j" | "k" | "l") {
            return Err(crate::DelveError::InvalidCommand(key.to_string()));
        }
        Command::parse(&lower)
    }
}
