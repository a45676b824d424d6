//! # Encounter Placement
//!
//! Puts the player, the exit and the enemies into a laid-out dungeon.
//!
//! The player starts at the centre of the first room and the exit sits at the
//! centre of the last. Enemies go one per interior room, with stats that grow
//! linearly with the dungeon level.

use crate::utils::roll;
use crate::{interior_rooms, DungeonLayout, Entity, GenerationConfig, Position, Room};
use log::trace;
use rand::Rng;

/// Base health range before level scaling.
pub const ENEMY_BASE_HEALTH: (i32, i32) = (20, 40);
/// Base damage range before level scaling.
pub const ENEMY_BASE_DAMAGE: (i32, i32) = (5, 10);
/// Extra health per dungeon level.
pub const ENEMY_HEALTH_PER_LEVEL: i32 = 5;
/// Extra damage per dungeon level.
pub const ENEMY_DAMAGE_PER_LEVEL: i32 = 1;

/// Health and damage of a generated enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyStats {
    pub health: i32,
    pub damage: i32,
}

impl EnemyStats {
    /// Applies level scaling to base rolls.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::EnemyStats;
    ///
    /// let stats = EnemyStats::scaled(30, 7, 3);
    /// assert_eq!(stats.health, 45);
    /// assert_eq!(stats.damage, 10);
    /// ```
    pub fn scaled(base_health: i32, base_damage: i32, dungeon_level: u32) -> Self {
        let level = dungeon_level as i32;
        Self {
            health: base_health + ENEMY_HEALTH_PER_LEVEL * level,
            damage: base_damage + ENEMY_DAMAGE_PER_LEVEL * level,
        }
    }

    /// Rolls base stats and scales them for the dungeon level.
    pub fn roll<R: Rng>(rng: &mut R, dungeon_level: u32) -> Self {
        let base_health = roll(rng, ENEMY_BASE_HEALTH.0, ENEMY_BASE_HEALTH.1);
        let base_damage = roll(rng, ENEMY_BASE_DAMAGE.0, ENEMY_BASE_DAMAGE.1);
        Self::scaled(base_health, base_damage, dungeon_level)
    }
}

/// Picks a random tile at least one step in from the room's edge.
pub fn random_inset_position<R: Rng>(rng: &mut R, room: &Room) -> Position {
    let x = room.top_left.x + roll(rng, 1, room.width as i32 - 2);
    let y = room.top_left.y + roll(rng, 1, room.height as i32 - 2);
    Position::new(x, y)
}

/// Places the player, the exit and enemies.
///
/// Enemy count targets a roll in `3..=5 + dungeon_level`; placement stops
/// once the entity list (player and exit included) reaches that target plus
/// two, or the interior rooms run out.
pub fn place_encounters<R: Rng>(layout: &mut DungeonLayout, config: &GenerationConfig, rng: &mut R) {
    let rooms = &layout.rooms;
    let entities = &mut layout.level.entities;

    if let Some(first) = rooms.first() {
        entities.push(Entity::player(rng, first.center()));
    }

    if rooms.len() > 1 {
        if let Some(last) = rooms.last() {
            entities.push(Entity::exit(rng, last.center()));
        }
    }

    let target = roll(rng, 3, 5 + config.dungeon_level as i32).max(0) as usize;
    let mut placed = 0;

    for room in interior_rooms(rooms) {
        if entities.len() >= target + 2 {
            break;
        }

        let position = random_inset_position(rng, room);
        let name = pick_name(rng, &config.enemy_names).unwrap_or("Cat");
        let stats = EnemyStats::roll(rng, config.dungeon_level);

        entities.push(Entity::enemy(rng, position, name, stats.health, stats.damage));
        placed += 1;
    }

    trace!("Placed {} enemies (target {})", placed, target);
}

/// Draws a name uniformly from a table.
pub fn pick_name<'a, R: Rng>(rng: &mut R, names: &'a [String]) -> Option<&'a str> {
    if names.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..names.len());
    names.get(index).map(String::as_str)
}
