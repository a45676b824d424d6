//! # Delve
//!
//! The simulation core of a grid-based dungeon crawler.
//!
//! ## Architecture Overview
//!
//! Delve is split into a few small, pure building blocks:
//!
//! - **Generation**: room-and-corridor dungeon layouts populated with enemies,
//!   items and an exit
//! - **Visibility**: a 360-ray field of view that tracks visible and explored tiles
//! - **Game State**: an immutable snapshot per turn, advanced by [`apply_move`]
//! - **Rendering / Input**: a thin ASCII front-end used by the `delve` binary
//!
//! Randomness is always injected as a [`rand::rngs::StdRng`], so every run can be
//! reproduced from a seed.
//!
//! ```
//! use delve::{apply_move, init_game, Direction, GameStatus};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let state = init_game(&mut rng);
//! let next = apply_move(&state, Direction::Up, &mut rng);
//! assert_eq!(next.status, GameStatus::Playing);
//! ```

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod utils;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

/// Core error type for the Delve engine.
///
/// The simulation core itself never fails; these errors come from the
/// surfaces around it (tile writes, configuration, commands, I/O).
#[derive(thiserror::Error, Debug)]
pub enum DelveError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A tile access fell outside the level
    #[error("Position ({}, {}) is outside the level", .0.x, .0.y)]
    InvalidPosition(Position),

    /// Generation parameters cannot produce a level
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Player input could not be understood
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// Result type used throughout the Delve codebase.
pub type DelveResult<T> = Result<T, DelveError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Dungeon width in tiles
    pub const LEVEL_WIDTH: u32 = 50;

    /// Dungeon height in tiles
    pub const LEVEL_HEIGHT: u32 = 30;

    /// Field of view radius used after every move
    pub const FOV_RADIUS: u32 = 8;

    /// Reaching the exit of this level wins the game
    pub const MAX_DUNGEON_LEVEL: u32 = 10;

    /// Player starting health
    pub const PLAYER_START_HEALTH: i32 = 100;

    /// Player starting damage
    pub const PLAYER_START_DAMAGE: i32 = 10;

    /// Cap applied by health potions
    pub const PLAYER_MAX_HEALTH: i32 = 100;

    /// Health restored by a health potion
    pub const HEALTH_POTION_HEAL: i32 = 20;

    /// Damage gained from a strength potion
    pub const STRENGTH_POTION_BONUS: i32 = 2;

    /// Health gained from a shield (not capped)
    pub const SHIELD_HEALTH_BONUS: i32 = 10;

    /// Player position used when a fresh level has no start position
    pub const FALLBACK_DESCENT_POSITION: (i32, i32) = (1, 1);

    /// Welcome message shown on a new game
    pub const WELCOME_MESSAGE: &str = "Welcome to the dungeon! Use arrow keys to move.";
}
