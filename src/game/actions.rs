//! # Actions
//!
//! Resolution of what happens when the player bumps into something.
//!
//! Each resolver works on a scratch copy of the state owned by
//! [`apply_move`](crate::apply_move), writes the outcome message and returns
//! the events it produced. Statistics are folded from those events by the
//! caller.

use crate::{
    add_to_inventory, compute_visibility, config, generate, EntityId, GameState, GameStatus,
    ItemEffect, Level, Position,
};
use log::{debug, warn};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Something that happened during a single turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The move was blocked by a wall or the level edge
    Idle,
    /// The player stepped onto an empty tile
    Moved { from: Position, to: Position },
    /// A closed door swung open
    DoorOpened { position: Position },
    /// The player hit an enemy that survived
    EnemyDamaged {
        name: String,
        damage: i32,
        remaining_health: i32,
    },
    /// The player's blow killed an enemy
    EnemyDefeated { name: String, damage: i32 },
    /// An enemy hit back and the player survived
    PlayerDamaged {
        attacker: String,
        damage: i32,
        remaining_health: i32,
    },
    /// An enemy's counterattack ended the game
    PlayerDied { killer: String, damage: i32 },
    ItemPickedUp { name: String },
    /// The player took the exit to a fresh level
    Descended { dungeon_level: u32 },
    /// The player took the exit of the deepest level
    DungeonCompleted,
}

/// One exchange of blows between the player and an enemy.
///
/// The player strikes first. A surviving enemy strikes back once. The
/// player never moves onto the enemy's tile.
pub fn resolve_combat(state: &mut GameState, enemy_id: EntityId) -> Vec<GameEvent> {
    let Some(index) = state.level.entities.iter().position(|e| e.id == enemy_id) else {
        warn!("Combat target {} is not on the level", enemy_id);
        return Vec::new();
    };

    let enemy = &state.level.entities[index];
    let (Some((enemy_health, enemy_damage)), Some((player_health, player_damage))) =
        (enemy.combat_stats(), state.player.combat_stats())
    else {
        warn!(
            "Combat with {} skipped: missing health or damage",
            enemy.name
        );
        return Vec::new();
    };
    let name = enemy.name.clone();

    let enemy_health = enemy_health - player_damage;
    if enemy_health <= 0 {
        state.level.entities.remove(index);
        state.message = format!("You defeated the {}!", name);
        return vec![GameEvent::EnemyDefeated {
            name,
            damage: player_damage,
        }];
    }

    let player_health = player_health - enemy_damage;
    if player_health <= 0 {
        state.player.health = Some(0);
        state.status = GameStatus::Lost;
        state.message = format!("You were defeated by the {}. Game over!", name);
        debug!("Player killed by {} on turn {}", name, state.turn_number);
        return vec![
            GameEvent::EnemyDamaged {
                name: name.clone(),
                damage: player_damage,
                remaining_health: enemy_health,
            },
            GameEvent::PlayerDied {
                killer: name,
                damage: enemy_damage,
            },
        ];
    }

    state.level.entities[index].health = Some(enemy_health);
    state.player.health = Some(player_health);
    state.message = format!(
        "You hit the {} for {} damage. It hits you back for {} damage.",
        name, player_damage, enemy_damage
    );

    vec![
        GameEvent::EnemyDamaged {
            name: name.clone(),
            damage: player_damage,
            remaining_health: enemy_health,
        },
        GameEvent::PlayerDamaged {
            attacker: name,
            damage: enemy_damage,
            remaining_health: player_health,
        },
    ]
}

/// Takes an item off the level, stacks it into the inventory and applies
/// its effect. The player stays where they were.
pub fn resolve_pickup(state: &mut GameState, item_id: EntityId) -> Vec<GameEvent> {
    let Some(item) = state.level.remove_entity(item_id) else {
        warn!("Item {} is not on the level", item_id);
        return Vec::new();
    };

    add_to_inventory(&mut state.inventory, &item);
    let effect = ItemEffect::for_item(&item.name).apply(&mut state.player);
    state.message = format!("You picked up a {}.{}", item.name, effect);

    vec![GameEvent::ItemPickedUp { name: item.name }]
}

/// Takes the exit.
///
/// Past the deepest level the game is won and the dungeon level, level,
/// player and inventory are left as they were. Otherwise a fresh level is
/// generated one level deeper and the player carries their stats and
/// inventory into it.
pub fn resolve_descent(state: &mut GameState, rng: &mut StdRng) -> Vec<GameEvent> {
    let next_level = state.dungeon_level + 1;

    if next_level > config::MAX_DUNGEON_LEVEL {
        state.status = GameStatus::Won;
        state.message =
            "Congratulations! You have completed all levels of the dungeon!".to_string();
        debug!("Dungeon completed on turn {}", state.turn_number);
        return vec![GameEvent::DungeonCompleted];
    }

    let level = generate(config::LEVEL_WIDTH, config::LEVEL_HEIGHT, next_level, rng);
    enter_level(state, level, next_level)
}

/// Moves the player onto a freshly generated level.
///
/// The player keeps their stats and inventory. A level without a player start
/// puts them at (1, 1).
pub fn enter_level(state: &mut GameState, mut level: Level, dungeon_level: u32) -> Vec<GameEvent> {
    let start = level.player_start().unwrap_or_else(|| {
        let fallback = Position::from(config::FALLBACK_DESCENT_POSITION);
        warn!(
            "Dungeon level {} has no player start; using ({}, {})",
            dungeon_level, fallback.x, fallback.y
        );
        fallback
    });
    level.take_player();

    state.player.position = start;
    state.level = compute_visibility(&level, start, config::FOV_RADIUS);
    state.dungeon_level = dungeon_level;
    state.message = format!(
        "You descended to dungeon level {} of {}!",
        dungeon_level,
        config::MAX_DUNGEON_LEVEL
    );

    debug!("Descended to dungeon level {}", dungeon_level);
    vec![GameEvent::Descended { dungeon_level }]
}
