//! # Display Management
//!
//! ASCII map rendering around the player.

use crate::game::{Entity, EntityKind, GameState, Level, Position, Tile, TileType};
use serde::{Deserialize, Serialize};

/// Default viewport width in tiles
pub const VIEWPORT_WIDTH: u32 = 21;
/// Default viewport height in tiles
pub const VIEWPORT_HEIGHT: u32 = 15;

/// A window onto the level, centred on the player and clamped to the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Level coordinate of the top-left cell
    pub origin: Position,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Centres a `width` x `height` window on `center`, then shifts it back
    /// inside the level. A level smaller than the window is shown whole.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Level, Position, Viewport};
    ///
    /// let level = Level::new(50, 30);
    /// let view = Viewport::centered(&level, Position::new(2, 29), 21, 15);
    /// assert_eq!(view.origin, Position::new(0, 15));
    /// ```
    pub fn centered(level: &Level, center: Position, width: u32, height: u32) -> Self {
        let width = width.min(level.width);
        let height = height.min(level.height);

        Self {
            origin: Position::new(
                clamp_start(center.x, width, level.width),
                clamp_start(center.y, height, level.height),
            ),
            width,
            height,
        }
    }

    /// The default 21x15 window around the player.
    pub fn around_player(state: &GameState) -> Self {
        Self::centered(
            &state.level,
            state.player.position,
            VIEWPORT_WIDTH,
            VIEWPORT_HEIGHT,
        )
    }

    /// Whether a level position falls inside the window.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.origin.x
            && pos.y >= self.origin.y
            && pos.x < self.origin.x + self.width as i32
            && pos.y < self.origin.y + self.height as i32
    }

    /// Level positions in row-major order, one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Position>> + '_ {
        (0..self.height as i32).map(move |dy| {
            (0..self.width as i32)
                .map(|dx| Position::new(self.origin.x + dx, self.origin.y + dy))
                .collect()
        })
    }
}

fn clamp_start(center: i32, window: u32, extent: u32) -> i32 {
    let start = center - window as i32 / 2;
    let max_start = extent.saturating_sub(window) as i32;
    start.clamp(0, max_start)
}

/// Glyph for a tile. Remembered (explored but not visible) tiles use the
/// dim variant; unexplored tiles are blank.
pub fn tile_glyph(tile: &Tile) -> char {
    if !tile.explored {
        return ' ';
    }
    match (tile.tile_type, tile.visible) {
        (TileType::Wall, true) => '#',
        (TileType::Wall, false) => ':',
        (TileType::Floor, true) => '.',
        (TileType::Floor, false) => ',',
        (TileType::Door { is_open: false }, true) => '+',
        (TileType::Door { is_open: true }, true) => '\'',
        (TileType::Door { .. }, false) => '-',
    }
}

/// Glyph for an entity: enemies show their initial.
pub fn entity_glyph(entity: &Entity) -> char {
    match entity.kind {
        EntityKind::Player => '@',
        EntityKind::Enemy => entity
            .name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('E'),
        EntityKind::Item => '!',
        EntityKind::Exit => '>',
    }
}

/// Draws the map inside `viewport`, one string per row.
///
/// Entities only show on visible tiles; the player is always drawn.
pub fn render_map(state: &GameState, viewport: &Viewport) -> Vec<String> {
    let level = &state.level;

    viewport
        .rows()
        .map(|row| {
            row.into_iter()
                .map(|pos| {
                    if pos == state.player.position {
                        return entity_glyph(&state.player);
                    }
                    let Some(tile) = level.get_tile(pos) else {
                        return ' ';
                    };
                    match level.entity_at(pos) {
                        Some(entity) if tile.visible => entity_glyph(entity),
                        _ => tile_glyph(tile),
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn state_in(level: Level, at: Position) -> GameState {
        let player = Entity::player(&mut StdRng::seed_from_u64(1), at);
        GameState::from_parts(level, player, 1)
    }

    #[test]
    fn test_viewport_centres_and_clamps() {
        let level = Level::new(50, 30);
        let middle = Viewport::centered(&level, Position::new(25, 15), 21, 15);
        assert_eq!(middle.origin, Position::new(15, 8));

        let corner = Viewport::centered(&level, Position::new(49, 0), 21, 15);
        assert_eq!(corner.origin, Position::new(29, 0));
        assert!(corner.contains(Position::new(49, 14)));
        assert!(!corner.contains(Position::new(49, 15)));
    }

    #[test]
    fn test_small_level_shown_whole() {
        let level = Level::new(8, 6);
        let view = Viewport::centered(&level, Position::new(7, 5), 21, 15);
        assert_eq!(view.origin, Position::origin());
        assert_eq!((view.width, view.height), (8, 6));
    }

    #[test]
    fn test_unexplored_is_blank_and_memory_is_dim() {
        let mut level = Level::new(3, 1);
        level.tiles[0][0].set_visible(true);
        level.tiles[0][1].set_visible(true);
        level.tiles[0][1].visible = false;
        level.tiles[0][1].tile_type = TileType::Floor;

        let state = state_in(level, Position::new(5, 5));
        let rows = render_map(&state, &Viewport::centered(&state.level, Position::origin(), 3, 1));
        assert_eq!(rows, vec!["#, ".to_string()]);
    }

    #[test]
    fn test_entities_hidden_outside_sight() {
        let mut level = Level::new(3, 1);
        let mut rng = StdRng::seed_from_u64(2);
        for x in 0..3 {
            level.tiles[0][x as usize] = Tile::floor();
            level.entities.push(Entity::enemy(&mut rng, Position::new(x, 0), "cat", 5, 5));
        }
        level.tiles[0][1].set_visible(true);
        level.tiles[0][2].set_visible(true);
        level.tiles[0][2].visible = false;

        let state = state_in(level, Position::new(0, 0));
        let rows = render_map(&state, &Viewport::centered(&state.level, Position::origin(), 3, 1));
        assert_eq!(rows, vec!["@C,".to_string()]);
    }
}
