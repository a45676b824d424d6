//! # World Representation
//!
//! Tiles and levels. A [`Level`] owns a row-major tile grid (`tiles[y][x]`)
//! and the list of non-player entities living on it.

use crate::{DelveError, DelveResult, Entity, EntityKind, Position};
use serde::{Deserialize, Serialize};

/// The terrain kind of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileType {
    Floor,
    Wall,
    /// Doors only ever go from closed to open.
    Door { is_open: bool },
}

impl TileType {
    /// Whether the player may step onto this tile. Doors count as passable
    /// whether open or closed; bumping a closed door opens it.
    pub fn is_passable(self) -> bool {
        !matches!(self, TileType::Wall)
    }

    /// Whether this tile stops a line of sight.
    pub fn blocks_sight(self) -> bool {
        matches!(self, TileType::Wall)
    }
}

/// One grid cell.
///
/// Invariant: `visible` implies `explored`. `explored` is never reset once set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub tile_type: TileType,
    /// Currently inside the viewer's field of view
    pub visible: bool,
    /// Seen at least once
    pub explored: bool,
}

impl Tile {
    /// Creates an unseen tile of the given type.
    pub fn new(tile_type: TileType) -> Self {
        Self {
            tile_type,
            visible: false,
            explored: false,
        }
    }

    pub fn floor() -> Self {
        Self::new(TileType::Floor)
    }

    pub fn wall() -> Self {
        Self::new(TileType::Wall)
    }

    /// A closed door.
    pub fn door() -> Self {
        Self::new(TileType::Door { is_open: false })
    }

    /// Sets the visibility flag. Making a tile visible also marks it explored.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if visible {
            self.explored = true;
        }
    }

    /// Returns true for a door that has not been opened yet.
    pub fn is_closed_door(&self) -> bool {
        matches!(self.tile_type, TileType::Door { is_open: false })
    }

    /// Opens a closed door. Returns whether anything changed.
    pub fn open_door(&mut self) -> bool {
        if self.is_closed_door() {
            self.tile_type = TileType::Door { is_open: true };
            true
        } else {
            false
        }
    }
}

/// A single dungeon floor: dimensions, tile grid and entities.
///
/// Width, height and tile kinds are fixed once generated, apart from doors
/// flipping open. Visibility flags and the entity list change during play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub width: u32,
    pub height: u32,
    /// Row-major grid, indexed `tiles[y][x]`
    pub tiles: Vec<Vec<Tile>>,
    pub entities: Vec<Entity>,
}

impl Level {
    /// Creates a level filled with walls and no entities.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Level, Position, TileType};
    ///
    /// let level = Level::new(10, 8);
    /// assert_eq!(level.tiles.len(), 8);
    /// assert_eq!(level.tiles[0].len(), 10);
    /// assert!(level.is_wall(Position::new(3, 3)));
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: vec![vec![Tile::wall(); width as usize]; height as usize],
            entities: Vec::new(),
        }
    }

    /// Checks whether a position lies inside the grid.
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    pub fn get_tile(&self, pos: Position) -> Option<&Tile> {
        if !self.is_valid_position(pos) {
            return None;
        }
        self.tiles
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
    }

    pub fn get_tile_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        if !self.is_valid_position(pos) {
            return None;
        }
        self.tiles
            .get_mut(pos.y as usize)
            .and_then(|row| row.get_mut(pos.x as usize))
    }

    /// Replaces the tile at `pos`.
    pub fn set_tile(&mut self, pos: Position, tile: Tile) -> DelveResult<()> {
        let slot = self
            .get_tile_mut(pos)
            .ok_or(DelveError::InvalidPosition(pos))?;
        *slot = tile;
        Ok(())
    }

    /// Positions outside the grid count as walls.
    pub fn is_wall(&self, pos: Position) -> bool {
        self.get_tile(pos)
            .map(|tile| tile.tile_type == TileType::Wall)
            .unwrap_or(true)
    }

    /// In bounds and not a wall.
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.get_tile(pos)
            .map(|tile| tile.tile_type.is_passable())
            .unwrap_or(false)
    }

    /// Returns the entity standing at `pos`, if any.
    pub fn entity_at(&self, pos: Position) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.position == pos)
    }

    /// Whether any entity occupies `pos`.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.entity_at(pos).is_some()
    }

    /// Removes an entity by id, returning it if it was present.
    pub fn remove_entity(&mut self, id: crate::EntityId) -> Option<Entity> {
        let index = self.entities.iter().position(|entity| entity.id == id)?;
        Some(self.entities.remove(index))
    }

    /// Position of the player entity placed by the generator, if any.
    pub fn player_start(&self) -> Option<Position> {
        self.entities
            .iter()
            .find(|entity| entity.kind == EntityKind::Player)
            .map(|entity| entity.position)
    }

    /// Removes every player entity from the entity list and returns the first.
    pub fn take_player(&mut self) -> Option<Entity> {
        let mut player = None;
        self.entities.retain(|entity| {
            if entity.kind == EntityKind::Player {
                if player.is_none() {
                    player = Some(entity.clone());
                }
                false
            } else {
                true
            }
        });
        player
    }

    /// Counts tiles matching a predicate on their type.
    pub fn count_tiles<F>(&self, predicate: F) -> usize
    where
        F: Fn(TileType) -> bool,
    {
        self.tiles
            .iter()
            .flat_map(|row| row.iter())
            .filter(|tile| predicate(tile.tile_type))
            .count()
    }

    /// Iterates over every tile together with its position.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (Position, &Tile)> {
        self.tiles.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, tile)| (Position::new(x as i32, y as i32), tile))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_level_starts_as_walls() {
        let level = Level::new(12, 7);
        assert_eq!(level.count_tiles(|t| t == TileType::Wall), 84);
        assert!(level.entities.is_empty());
    }

    #[test]
    fn test_bounds_checks() {
        let level = Level::new(5, 4);
        assert!(level.is_valid_position(Position::new(0, 0)));
        assert!(level.is_valid_position(Position::new(4, 3)));
        assert!(!level.is_valid_position(Position::new(5, 3)));
        assert!(!level.is_valid_position(Position::new(-1, 0)));
        assert!(level.get_tile(Position::new(0, 4)).is_none());
        assert!(level.is_wall(Position::new(-3, 2)));
        assert!(!level.is_walkable(Position::new(-3, 2)));
    }

    #[test]
    fn test_set_tile() {
        let mut level = Level::new(5, 5);
        level.set_tile(Position::new(2, 2), Tile::floor()).unwrap();
        assert!(level.is_walkable(Position::new(2, 2)));

        let result = level.set_tile(Position::new(9, 9), Tile::floor());
        assert!(matches!(result, Err(DelveError::InvalidPosition(_))));
    }

    #[test]
    fn test_doors_are_walkable_and_open_once() {
        let mut tile = Tile::door();
        assert!(tile.tile_type.is_passable());
        assert!(tile.is_closed_door());
        assert!(tile.open_door());
        assert!(!tile.open_door());
        assert_eq!(tile.tile_type, TileType::Door { is_open: true });
    }

    #[test]
    fn test_set_visible_marks_explored() {
        let mut tile = Tile::floor();
        tile.set_visible(true);
        assert!(tile.visible && tile.explored);
        tile.set_visible(false);
        assert!(!tile.visible);
        assert!(tile.explored);
    }

    #[test]
    fn test_take_player() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut level = Level::new(10, 10);
        level.entities.push(Entity::exit(&mut rng, Position::new(5, 5)));
        level
            .entities
            .push(Entity::player(&mut rng, Position::new(2, 2)));

        assert_eq!(level.player_start(), Some(Position::new(2, 2)));
        let player = level.take_player().unwrap();
        assert_eq!(player.position, Position::new(2, 2));
        assert_eq!(level.entities.len(), 1);
        assert!(level.player_start().is_none());
        assert!(level.take_player().is_none());
    }

    #[test]
    fn test_entity_lookup_and_removal() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut level = Level::new(10, 10);
        let item = Entity::item(&mut rng, Position::new(3, 4), "Shield");
        let id = item.id;
        level.entities.push(item);

        assert!(level.is_occupied(Position::new(3, 4)));
        assert_eq!(level.entity_at(Position::new(3, 4)).map(|e| e.id), Some(id));
        assert!(level.remove_entity(id).is_some());
        assert!(level.remove_entity(id).is_none());
        assert!(!level.is_occupied(Position::new(3, 4)));
    }
}
