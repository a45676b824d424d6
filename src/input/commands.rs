//! # Command Definitions
//!
//! What the player can ask the terminal front-end to do.

use crate::{DelveError, DelveResult, Direction};

/// A single player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Step (or bump) in a direction
    Move(Direction),
    ToggleMinimap,
    /// Start a new game
    Restart,
    ToggleInventory,
    Help,
    Quit,
}

impl Command {
    /// Parses one key or word, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Command, Direction};
    ///
    /// assert_eq!(Command::parse("w").unwrap(), Command::Move(Direction::Up));
    /// assert_eq!(Command::parse("Left").unwrap(), Command::Move(Direction::Left));
    /// assert!(Command::parse("x").is_err());
    /// ```
    pub fn parse(input: &str) -> DelveResult<Command> {
        let command = match input.trim().to_ascii_lowercase().as_str() {
            "w" | "k" | "up" => Command::Move(Direction::Up),
            "s" | "j" | "down" => Command::Move(Direction::Down),
            "a" | "h" | "left" => Command::Move(Direction::Left),
            "d" | "l" | "right" => Command::Move(Direction::Right),
            "m" | "map" => Command::ToggleMinimap,
            "r" | "restart" => Command::Restart,
            "i" | "inventory" => Command::ToggleInventory,
            "?" | "help" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => return Err(DelveError::InvalidCommand(other.to_string())),
        };
        Ok(command)
    }
}

/// Help text listing every command.
pub const HELP_TEXT: &str = "\
Move: w/a/s/d, h/j/k/l or up/down/left/right (several keys per line are fine)
m: toggle minimap   i: toggle inventory   r: restart   ?: help   q: quit";
