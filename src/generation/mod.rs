//! # Generation Module
//!
//! Procedural content generation for dungeon levels.
//!
//! A level is built in two passes. [`RoomCorridorGenerator`] lays out rooms,
//! corridors and doors; the encounter and item passes then populate the
//! accepted rooms with the player, the exit, enemies and items.

pub mod dungeon;
pub mod encounters;
pub mod items;

pub use dungeon::*;
pub use encounters::*;
pub use items::*;

use crate::config;
use crate::game::{Level, Position, TileType};
use crate::{DelveError, DelveResult};
use log::{debug, warn};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration for procedural generation.
///
/// Controls the grid size, the difficulty index and the room and population
/// parameters. [`GenerationConfig::new`] yields the reference values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Grid width in tiles
    pub width: u32,
    /// Grid height in tiles
    pub height: u32,
    /// Difficulty index; enemy stats grow with it
    pub dungeon_level: u32,
    /// Minimum number of room placement attempts
    pub min_rooms: u32,
    /// Maximum number of room placement attempts
    pub max_rooms: u32,
    /// Minimum room side length
    pub min_room_size: u32,
    /// Maximum room side length
    pub max_room_size: u32,
    /// Probability that a corridor chokepoint becomes a door (0.0 to 1.0)
    pub door_chance: f64,
    /// Names enemies are drawn from
    pub enemy_names: Vec<String>,
    /// Names items are drawn from
    pub item_names: Vec<String>,
}

impl GenerationConfig {
    /// Creates the reference configuration for a grid and difficulty.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(50, 30, 1);
    /// assert_eq!(config.min_room_size, 5);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(width: u32, height: u32, dungeon_level: u32) -> Self {
        Self {
            width,
            height,
            dungeon_level,
            min_rooms: 5,
            max_rooms: 8,
            min_room_size: 5,
            max_room_size: 10,
            door_chance: 0.2,
            enemy_names: vec!["Cat".to_string()],
            item_names: vec![
                "Health Potion".to_string(),
                "Strength Potion".to_string(),
                "Shield".to_string(),
            ],
        }
    }

    /// Standard 50x30 level at the given difficulty.
    pub fn for_dungeon_level(dungeon_level: u32) -> Self {
        Self::new(config::LEVEL_WIDTH, config::LEVEL_HEIGHT, dungeon_level)
    }

    /// Checks that these parameters can always produce a room.
    ///
    /// Generation itself never fails; a config rejected here degrades to a
    /// level without rooms.
    pub fn validate(&self) -> DelveResult<()> {
        if self.min_rooms == 0 || self.min_rooms > self.max_rooms {
            return Err(DelveError::InvalidConfig(format!(
                "room count range {}..={} is empty",
                self.min_rooms, self.max_rooms
            )));
        }
        if self.min_room_size < 3 || self.min_room_size > self.max_room_size {
            return Err(DelveError::InvalidConfig(format!(
                "room size range {}..={} is invalid",
                self.min_room_size, self.max_room_size
            )));
        }
        // A room needs a one-tile wall border on every side.
        let needed = self.max_room_size + 2;
        if self.width < needed || self.height < needed {
            return Err(DelveError::InvalidConfig(format!(
                "{}x{} grid cannot fit a {}-tile room with its border",
                self.width, self.height, self.max_room_size
            )));
        }
        if !(0.0..=1.0).contains(&self.door_chance) {
            return Err(DelveError::InvalidConfig(format!(
                "door chance {} is not a probability",
                self.door_chance
            )));
        }
        if self.enemy_names.is_empty() || self.item_names.is_empty() {
            return Err(DelveError::InvalidConfig(
                "enemy and item name tables must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::for_dungeon_level(1)
    }
}

/// A rectangular room of floor tiles.
///
/// Unlike a drawn room with walls, every tile inside the rectangle is carved
/// to floor; the surrounding walls come from the untouched grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Acceptance order, starting at 0
    pub id: u32,
    /// Top-left floor tile
    pub top_left: Position,
    pub width: u32,
    pub height: u32,
}

impl Room {
    /// Creates a new room with the given parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Room, Position};
    ///
    /// let room = Room::new(1, Position::new(5, 5), 10, 8);
    /// assert_eq!(room.center(), Position::new(10, 9));
    /// assert!(room.contains(Position::new(14, 12)));
    /// assert!(!room.contains(Position::new(15, 12)));
    /// ```
    pub fn new(id: u32, top_left: Position, width: u32, height: u32) -> Self {
        Self {
            id,
            top_left,
            width,
            height,
        }
    }

    /// Gets the bottom-right corner of the room.
    pub fn bottom_right(&self) -> Position {
        Position::new(
            self.top_left.x + self.width as i32 - 1,
            self.top_left.y + self.height as i32 - 1,
        )
    }

    /// Gets the center position of the room.
    pub fn center(&self) -> Position {
        Position::new(
            self.top_left.x + self.width as i32 / 2,
            self.top_left.y + self.height as i32 / 2,
        )
    }

    /// Gets the area of the room in tiles.
    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    /// Checks if a position is inside this room.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.top_left.x
            && pos.y >= self.top_left.y
            && pos.x < self.top_left.x + self.width as i32
            && pos.y < self.top_left.y + self.height as i32
    }

    /// Checks if a position is inside the room and at least one tile away
    /// from its edge.
    pub fn contains_inset(&self, pos: Position) -> bool {
        pos.x > self.top_left.x
            && pos.y > self.top_left.y
            && pos.x < self.top_left.x + self.width as i32 - 1
            && pos.y < self.top_left.y + self.height as i32 - 1
    }

    /// Whether this room, grown by one tile on every side, touches another
    /// grown room. Rooms that pass keep at least one wall between them.
    pub fn intersects_with_margin(&self, other: &Room) -> bool {
        let (x, y) = (self.top_left.x, self.top_left.y);
        let (w, h) = (self.width as i32, self.height as i32);
        let (ox, oy) = (other.top_left.x, other.top_left.y);
        let (ow, oh) = (other.width as i32, other.height as i32);

        x <= ox + ow + 1 && x + w + 1 >= ox && y <= oy + oh + 1 && y + h + 1 >= oy
    }

    /// Gets all floor positions within this room.
    pub fn floor_positions(&self) -> Vec<Position> {
        let mut positions = Vec::with_capacity(self.area() as usize);

        for y in self.top_left.y..(self.top_left.y + self.height as i32) {
            for x in self.top_left.x..(self.top_left.x + self.width as i32) {
                positions.push(Position::new(x, y));
            }
        }

        positions
    }
}

/// A generated grid before it is populated: the level and its rooms in
/// acceptance order.
#[derive(Debug, Clone)]
pub struct DungeonLayout {
    pub level: Level,
    pub rooms: Vec<Room>,
}

impl DungeonLayout {
    /// Rooms strictly between the first and the last.
    pub fn interior_rooms(&self) -> &[Room] {
        interior_rooms(&self.rooms)
    }
}

/// Rooms strictly between the first and the last of `rooms`. These host
/// enemies and items; the first holds the player start and the last the exit.
pub fn interior_rooms(rooms: &[Room]) -> &[Room] {
    if rooms.len() > 2 {
        &rooms[1..rooms.len() - 1]
    } else {
        &[]
    }
}

/// Trait for procedural generators.
///
/// Generators are total: they always hand back content, degrading gracefully
/// when the configuration is too tight.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> T;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> DelveResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Builds a complete level: layout, player start, exit, enemies and items.
///
/// Each call draws a fresh layout from `rng`. The returned entity list holds
/// exactly one player entity whenever at least one room was placed.
///
/// # Examples
///
/// ```
/// use delve::{generate, EntityKind};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let level = generate(50, 30, 1, &mut rng);
/// assert_eq!(level.width, 50);
/// let players = level.entities.iter().filter(|e| e.kind == EntityKind::Player).count();
/// assert_eq!(players, 1);
/// ```
pub fn generate(width: u32, height: u32, dungeon_level: u32, rng: &mut StdRng) -> Level {
    let config = GenerationConfig::new(width, height, dungeon_level);
    generate_with_config(&config, rng)
}

/// Same as [`generate`] with explicit generation parameters.
pub fn generate_with_config(config: &GenerationConfig, rng: &mut StdRng) -> Level {
    if let Err(err) = config.validate() {
        warn!("{}; the level may come out degraded", err);
    }

    let generator = RoomCorridorGenerator::new();
    let mut layout = generator.generate(config, rng);
    if let Err(err) = generator.validate(&layout, config) {
        warn!("{} rejected its layout: {}", generator.generator_type(), err);
    }

    place_encounters(&mut layout, config, rng);
    place_items(&mut layout, config, rng);

    debug!(
        "{} produced dungeon level {}: {} rooms, {} entities",
        generator.generator_type(),
        config.dungeon_level,
        layout.rooms.len(),
        layout.level.entities.len()
    );

    layout.level
}

/// Validates that a level meets basic requirements.
pub fn validate_level(level: &Level) -> DelveResult<()> {
    if level.tiles.len() != level.height as usize
        || level.tiles.iter().any(|row| row.len() != level.width as usize)
    {
        return Err(DelveError::InvalidConfig(format!(
            "tile grid does not match {}x{}",
            level.width, level.height
        )));
    }

    let floor_count = level.count_tiles(|tile| tile == TileType::Floor);
    if floor_count == 0 {
        return Err(DelveError::InvalidConfig(
            "Level has no floor tiles".to_string(),
        ));
    }

    Ok(())
}
