//! # Dungeon Generation
//!
//! Room-and-corridor layouts.
//!
//! The generator:
//! 1. Fills the grid with walls
//! 2. Tries a handful of random rooms, rejecting any that crowd an accepted one
//! 3. Joins consecutive rooms with L-shaped corridors
//! 4. Turns corridor chokepoints into closed doors at random

use crate::utils::roll;
use crate::{DelveError, DelveResult, GenerationConfig, Generator, Level, Position, Room, TileType};
use crate::{validate_level, Direction, DungeonLayout, Tile};
use log::{debug, trace, warn};
use rand::{rngs::StdRng, Rng};

/// Primary dungeon generator using a room-and-corridor algorithm.
///
/// Doors are governed by [`GenerationConfig::door_chance`]; a chance of zero
/// leaves every chokepoint open.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomCorridorGenerator;

impl RoomCorridorGenerator {
    /// Creates a new dungeon generator with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{GenerationConfig, Generator, RoomCorridorGenerator};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let generator = RoomCorridorGenerator::new();
    /// let layout = generator.generate(&GenerationConfig::new(50, 30, 1), &mut StdRng::seed_from_u64(2));
    /// assert!(!layout.rooms.is_empty());
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Places rooms, forcing a single one if every candidate was rejected.
    fn place_rooms(
        &self,
        level: &mut Level,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> Vec<Room> {
        let mut rooms: Vec<Room> = Vec::new();
        let attempts = roll(rng, config.min_rooms as i32, config.max_rooms as i32).max(0) as u32;

        for _ in 0..attempts {
            let Some(candidate) = self.generate_room_candidate(level, config, rng, rooms.len() as u32)
            else {
                continue;
            };

            if rooms
                .iter()
                .any(|existing| candidate.intersects_with_margin(existing))
            {
                trace!("Rejected room candidate at {:?}", candidate.top_left);
                continue;
            }

            self.carve_room(level, &candidate);
            rooms.push(candidate);
        }

        if rooms.is_empty() {
            // Nothing to overlap with yet.
            match self.generate_room_candidate(level, config, rng, 0) {
                Some(room) => {
                    self.carve_room(level, &room);
                    rooms.push(room);
                }
                None => warn!(
                    "{}x{} grid is too small for any room; level stays solid",
                    level.width, level.height
                ),
            }
        }

        rooms
    }

    /// Samples a room that fits inside the grid with a one-tile border.
    ///
    /// Returns None when even the smallest room cannot fit.
    fn generate_room_candidate(
        &self,
        level: &Level,
        config: &GenerationConfig,
        rng: &mut StdRng,
        room_id: u32,
    ) -> Option<Room> {
        let width = roll(rng, config.min_room_size as i32, config.max_room_size as i32);
        let height = roll(rng, config.min_room_size as i32, config.max_room_size as i32);

        let max_x = level.width as i32 - width - 1;
        let max_y = level.height as i32 - height - 1;
        if width < 1 || height < 1 || max_x < 1 || max_y < 1 {
            return None;
        }

        let x = rng.gen_range(1..=max_x);
        let y = rng.gen_range(1..=max_y);

        Some(Room::new(
            room_id,
            Position::new(x, y),
            width as u32,
            height as u32,
        ))
    }

    /// Carves out a room in the level by setting tiles to floor.
    fn carve_room(&self, level: &mut Level, room: &Room) {
        for pos in room.floor_positions() {
            carve(level, pos);
        }
    }

    /// Connects each room to the next one in acceptance order.
    fn connect_rooms(&self, level: &mut Level, rooms: &[Room]) {
        for pair in rooms.windows(2) {
            self.carve_l_corridor(level, pair[0].center(), pair[1].center());
        }
    }

    /// Carves an L-shaped corridor: a horizontal run along the start row,
    /// then a vertical run along the end column. Only ever adds floor.
    fn carve_l_corridor(&self, level: &mut Level, start: Position, end: Position) {
        for x in start.x.min(end.x)..=start.x.max(end.x) {
            carve(level, Position::new(x, start.y));
        }

        for y in start.y.min(end.y)..=start.y.max(end.y) {
            carve(level, Position::new(end.x, y));
        }
    }

    /// Whether a floor tile sits in a one-wide passage: walls on two opposite
    /// sides and open tiles on the other two.
    fn is_chokepoint(level: &Level, pos: Position) -> bool {
        let [north, south, west, east] = Direction::all().map(|dir| level.is_wall(pos.step(dir)));

        (north && south && !west && !east) || (west && east && !north && !south)
    }

    /// Turns chokepoints into closed doors, scanning row by row away from the
    /// outer border.
    fn add_doors(&self, level: &mut Level, config: &GenerationConfig, rng: &mut StdRng) -> usize {
        let mut doors = 0;

        for y in 1..(level.height as i32 - 1) {
            for x in 1..(level.width as i32 - 1) {
                let pos = Position::new(x, y);
                let is_floor = level
                    .get_tile(pos)
                    .map(|tile| tile.tile_type == TileType::Floor)
                    .unwrap_or(false);

                if is_floor && Self::is_chokepoint(level, pos) && rng.gen_bool(config.door_chance)
                {
                    if let Some(tile) = level.get_tile_mut(pos) {
                        *tile = Tile::door();
                        doors += 1;
                    }
                }
            }
        }

        doors
    }
}

/// Sets a tile to floor if it lies inside the grid.
fn carve(level: &mut Level, pos: Position) {
    if let Some(tile) = level.get_tile_mut(pos) {
        tile.tile_type = TileType::Floor;
    }
}

impl Generator<DungeonLayout> for RoomCorridorGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> DungeonLayout {
        // Create empty level (all walls)
        let mut level = Level::new(config.width, config.height);

        let rooms = self.place_rooms(&mut level, config, rng);
        self.connect_rooms(&mut level, &rooms);

        let doors = if (0.0..=1.0).contains(&config.door_chance) {
            self.add_doors(&mut level, config, rng)
        } else {
            0
        };

        debug!(
            "Laid out {} rooms and {} doors on a {}x{} grid",
            rooms.len(),
            doors,
            config.width,
            config.height
        );

        DungeonLayout { level, rooms }
    }

    fn validate(&self, layout: &DungeonLayout, config: &GenerationConfig) -> DelveResult<()> {
        validate_level(&layout.level)?;

        if layout.rooms.is_empty() {
            return Err(DelveError::InvalidConfig("no rooms were placed".to_string()));
        }

        for room in &layout.rooms {
            let inside = room.top_left.x >= 1
                && room.top_left.y >= 1
                && room.bottom_right().x <= config.width as i32 - 2
                && room.bottom_right().y <= config.height as i32 - 2;
            if !inside {
                return Err(DelveError::InvalidConfig(format!(
                    "room {} touches the outer border",
                    room.id
                )));
            }
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "RoomCorridorGenerator"
    }
}
