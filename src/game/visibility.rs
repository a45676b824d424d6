//! # Visibility
//!
//! Field of view by ray casting.
//!
//! One ray per whole degree is marched from the centre of the viewer's cell in
//! unit steps. Every cell a ray lands on becomes visible and explored; a wall
//! is seen and then stops the ray. The discrete angles mean thin diagonal gaps
//! can leak sight around corners and some cells near tile boundaries can be
//! skipped. That approximation is the intended behaviour.

use crate::utils::ray_direction;
use crate::{Level, Position};
use log::{trace, warn};

/// Number of rays cast per visibility pass.
pub const RAY_COUNT: u32 = 360;

/// Recomputes visible/explored flags in place.
///
/// All `visible` flags are cleared first. An out-of-bounds viewer leaves
/// every tile invisible and nothing newly explored.
pub fn update_visibility(level: &mut Level, viewer: Position, radius: u32) {
    for row in &mut level.tiles {
        for tile in row {
            tile.visible = false; // explored is left alone
        }
    }

    let Some(origin) = level.get_tile_mut(viewer) else {
        warn!(
            "Viewer at ({}, {}) is outside the {}x{} level; skipping field of view",
            viewer.x, viewer.y, level.width, level.height
        );
        return;
    };
    origin.set_visible(true);

    for angle in 0..RAY_COUNT {
        let (dx, dy) = ray_direction(angle);
        let mut x = viewer.x as f64 + 0.5;
        let mut y = viewer.y as f64 + 0.5;

        for _ in 0..radius {
            x += dx;
            y += dy;
            let cell = Position::new(x.floor() as i32, y.floor() as i32);

            let Some(tile) = level.get_tile_mut(cell) else {
                break;
            };
            tile.set_visible(true);
            if tile.tile_type.blocks_sight() {
                break;
            }
        }
    }

    trace!(
        "Field of view from ({}, {}) radius {} computed",
        viewer.x,
        viewer.y,
        radius
    );
}

/// Returns a copy of `level` with visibility recomputed from `viewer`.
///
/// The input level is left untouched; callers treat the result as the new
/// authoritative level.
///
/// # Examples
///
/// ```
/// use delve::{compute_visibility, Level, Position, Tile};
///
/// let mut level = Level::new(5, 5);
/// level.set_tile(Position::new(2, 2), Tile::floor()).unwrap();
/// let lit = compute_visibility(&level, Position::new(2, 2), 8);
/// assert!(lit.tiles[2][2].visible);
/// assert!(lit.tiles[1][2].visible); // walls are seen
/// assert!(!lit.tiles[0][2].visible); // but block what is behind them
/// ```
pub fn compute_visibility(level: &Level, viewer: Position, radius: u32) -> Level {
    let mut updated = level.clone();
    update_visibility(&mut updated, viewer, radius);
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tile;

    /// A 9x9 room of floor surrounded by a one-tile wall.
    fn open_room() -> Level {
        let mut level = Level::new(11, 11);
        for y in 1..10 {
            for x in 1..10 {
                level.set_tile(Position::new(x, y), Tile::floor()).unwrap();
            }
        }
        level
    }

    #[test]
    fn test_viewer_tile_always_visible() {
        let level = compute_visibility(&open_room(), Position::new(5, 5), 0);
        assert!(level.tiles[5][5].visible);
        assert!(level.tiles[5][5].explored);
        assert!(!level.tiles[5][6].visible);
    }

    #[test]
    fn test_radius_limits_sight() {
        let level = compute_visibility(&open_room(), Position::new(1, 5), 3);
        assert!(level.tiles[5][4].visible);
        assert!(!level.tiles[5][6].visible);
    }

    #[test]
    fn test_walls_block_sight() {
        let mut level = open_room();
        // Vertical wall at x = 6, rows 1..10
        for y in 1..10 {
            level.set_tile(Position::new(6, y), Tile::wall()).unwrap();
        }
        let lit = compute_visibility(&level, Position::new(4, 5), 8);
        assert!(lit.tiles[5][6].visible);
        assert!(!lit.tiles[5][7].visible);
        assert!(!lit.tiles[5][8].explored);
    }

    #[test]
    fn test_out_of_bounds_viewer_is_noop() {
        let lit = compute_visibility(&open_room(), Position::new(5, 5), 8);
        let after = compute_visibility(&lit, Position::new(-4, 50), 8);
        assert!(after.iter_tiles().all(|(_, tile)| !tile.visible));
        // Exploration survives
        assert!(after.tiles[5][5].explored);
        assert_eq!(after.entities, lit.entities);
    }

    #[test]
    fn test_previous_visibility_is_cleared() {
        let first = compute_visibility(&open_room(), Position::new(2, 2), 2);
        let second = compute_visibility(&first, Position::new(8, 8), 2);
        assert!(!second.tiles[2][2].visible);
        assert!(second.tiles[2][2].explored);
        assert!(second.tiles[8][8].visible);
    }

    #[test]
    fn test_input_level_untouched() {
        let level = open_room();
        let _ = compute_visibility(&level, Position::new(5, 5), 8);
        assert!(level.iter_tiles().all(|(_, tile)| !tile.explored));
    }
}
