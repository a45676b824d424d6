//! # User Interface Elements
//!
//! Status line, inventory panel and minimap.

use crate::game::{EntityKind, GameState, GameStatus, InventoryItem, Position};
use crate::{config, inventory_count, tile_glyph};

/// One-line summary: health, damage, dungeon level and the last message.
///
/// # Examples
///
/// ```
/// use delve::{init_game, status_line};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let state = init_game(&mut StdRng::seed_from_u64(1));
/// assert!(status_line(&state).starts_with("Health 100/100 | Damage 10 | Level 1/10"));
/// ```
pub fn status_line(state: &GameState) -> String {
    let health = state.player.health.unwrap_or(0);
    let damage = state.player.damage.unwrap_or(0);

    let mut line = format!(
        "Health {}/{} | Damage {} | Level {}/{} | {}",
        health,
        config::PLAYER_MAX_HEALTH,
        damage,
        state.dungeon_level,
        config::MAX_DUNGEON_LEVEL,
        state.message
    );

    match state.status {
        GameStatus::Won => line.push_str(" [VICTORY - press r to play again]"),
        GameStatus::Lost => line.push_str(" [DEFEAT - press r to try again]"),
        GameStatus::Playing => {}
    }

    line
}

/// Inventory listing, `name xN` per stack.
pub fn inventory_lines(inventory: &[InventoryItem]) -> Vec<String> {
    if inventory.is_empty() {
        return vec!["Inventory: (empty)".to_string()];
    }

    std::iter::once(format!("Inventory ({} items):", inventory_count(inventory)))
        .chain(
            inventory
                .iter()
                .map(|item| format!("  {} x{}", item.name, item.quantity)),
        )
        .collect()
}

/// Whole-level overview of everything explored so far.
///
/// Enemies and the exit only show on explored tiles; the player always shows.
/// Items are left off.
pub fn minimap(state: &GameState) -> Vec<String> {
    let level = &state.level;

    (0..level.height as i32)
        .map(|y| {
            (0..level.width as i32)
                .map(|x| {
                    let pos = Position::new(x, y);
                    if pos == state.player.position {
                        return '@';
                    }
                    let Some(tile) = level.get_tile(pos) else {
                        return ' ';
                    };
                    if !tile.explored {
                        return ' ';
                    }
                    match level.entity_at(pos).map(|entity| entity.kind) {
                        Some(EntityKind::Enemy) => 'e',
                        Some(EntityKind::Exit) => '>',
                        _ => tile_glyph(tile),
                    }
                })
                .collect()
        })
        .collect()
}
