//! # Game State Module
//!
//! The complete game as one value, and the single transition that advances it.
//!
//! [`apply_move`] never touches the state it is given. It works on a clone
//! and returns that clone as the next snapshot, so a caller holding an older
//! snapshot can never observe later turns.

use crate::{
    config, generate, resolve_combat, resolve_descent, resolve_pickup, update_visibility,
    DelveResult, Direction, Entity, EntityKind, GameEvent, InventoryItem, Level, Position,
};
use log::{debug, trace, warn};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Whether the game is still accepting moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    /// Left the deepest level through its exit
    Won,
    /// Health reached zero
    Lost,
}

/// Game statistics tracking player progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Number of enemies defeated
    pub enemies_defeated: u32,
    /// Number of items collected
    pub items_collected: u32,
    /// Total damage dealt
    pub damage_dealt: u64,
    /// Total damage taken
    pub damage_taken: u64,
    /// Total steps taken
    pub steps_taken: u64,
    pub doors_opened: u32,
    /// Deepest dungeon level reached
    pub max_depth_reached: u32,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self {
            enemies_defeated: 0,
            items_collected: 0,
            damage_dealt: 0,
            damage_taken: 0,
            steps_taken: 0,
            doors_opened: 0,
            max_depth_reached: 1,
        }
    }

    /// Updates statistics based on a game event.
    pub fn update_from_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Moved { .. } => {
                self.steps_taken += 1;
            }
            GameEvent::DoorOpened { .. } => {
                self.doors_opened += 1;
            }
            GameEvent::EnemyDamaged { damage, .. } => {
                self.damage_dealt += *damage as u64;
            }
            GameEvent::EnemyDefeated { damage, .. } => {
                self.damage_dealt += *damage as u64;
                self.enemies_defeated += 1;
            }
            GameEvent::PlayerDamaged { damage, .. } | GameEvent::PlayerDied { damage, .. } => {
                self.damage_taken += *damage as u64;
            }
            GameEvent::ItemPickedUp { .. } => {
                self.items_collected += 1;
            }
            GameEvent::Descended { dungeon_level } => {
                self.max_depth_reached = self.max_depth_reached.max(*dungeon_level);
            }
            GameEvent::Idle | GameEvent::DungeonCompleted => {}
        }
    }
}

impl Default for GameStatistics {
    fn default() -> Self {
        Self::new()
    }
}

/// One snapshot of the game.
///
/// The player is tracked here, not in `level.entities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub level: Level,
    pub player: Entity,
    pub status: GameStatus,
    /// Text shown to the player after the latest turn
    pub message: String,
    /// Current dungeon level, 1 to [`config::MAX_DUNGEON_LEVEL`]
    pub dungeon_level: u32,
    pub inventory: Vec<InventoryItem>,
    /// Number of moves processed while playing
    pub turn_number: u64,
    pub statistics: GameStatistics,
    /// Events produced by the latest turn
    pub last_events: Vec<GameEvent>,
}

impl GameState {
    /// Starts a fresh game. Same as [`init_game`].
    pub fn new(rng: &mut StdRng) -> Self {
        init_game(rng)
    }

    /// Assembles a playing state from a level and a player, as is.
    ///
    /// Visibility is not recomputed; the level's flags are kept.
    pub fn from_parts(level: Level, player: Entity, dungeon_level: u32) -> Self {
        let mut statistics = GameStatistics::new();
        statistics.max_depth_reached = dungeon_level;

        Self {
            level,
            player,
            status: GameStatus::Playing,
            message: config::WELCOME_MESSAGE.to_string(),
            dungeon_level,
            inventory: Vec::new(),
            turn_number: 0,
            statistics,
            last_events: Vec::new(),
        }
    }

    /// Throws this game away and starts over on a new level 1.
    pub fn restart(&self, rng: &mut StdRng) -> Self {
        debug!(
            "Restarting after {} turns ({:?})",
            self.turn_number, self.status
        );
        init_game(rng)
    }

    /// Checks if the game has ended (won or lost).
    pub fn is_game_ended(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Advances the game by one move. See [`apply_move`].
    pub fn apply_move(&self, direction: Direction, rng: &mut StdRng) -> Self {
        apply_move(self, direction, rng)
    }

    /// Pretty JSON snapshot for external front-ends.
    pub fn to_json(&self) -> DelveResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolves a move on this (scratch) state and returns its events.
    fn resolve_move(&mut self, direction: Direction, rng: &mut StdRng) -> Vec<GameEvent> {
        let from = self.player.position;
        let target = from.step(direction);

        // Doors count as walkable whether open or not.
        if !self.level.is_walkable(target) {
            self.message = "You are idle.".to_string();
            return vec![GameEvent::Idle];
        }

        let mut events = Vec::new();
        let occupant = self.level.entity_at(target).map(|entity| (entity.id, entity.kind));

        // An exit replaces or freezes the level, so its tile is left alone.
        let takes_exit = matches!(occupant, Some((_, EntityKind::Exit)));
        if !takes_exit {
            if let Some(tile) = self.level.get_tile_mut(target) {
                if tile.open_door() {
                    self.message = "You open the door.".to_string();
                    events.push(GameEvent::DoorOpened { position: target });
                }
            }
        }

        match occupant {
            Some((id, EntityKind::Enemy)) => events.extend(resolve_combat(self, id)),
            Some((id, EntityKind::Item)) => events.extend(resolve_pickup(self, id)),
            Some((_, EntityKind::Exit)) => events.extend(resolve_descent(self, rng)),
            Some((_, EntityKind::Player)) | None => {
                self.player.position = target;
                update_visibility(&mut self.level, target, config::FOV_RADIUS);
                if events.is_empty() {
                    self.message = "You are moving.".to_string();
                }
                events.push(GameEvent::Moved { from, to: target });
            }
        }

        events
    }
}

/// Starts a new game on dungeon level 1.
///
/// Generates a 50x30 level, lifts the generated player out of the entity
/// list and computes the first field of view. If generation produced no
/// player, a default one is created at (0, 0).
///
/// # Examples
///
/// ```
/// use delve::{init_game, GameStatus, EntityKind};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let state = init_game(&mut StdRng::seed_from_u64(3));
/// assert_eq!(state.status, GameStatus::Playing);
/// assert_eq!(state.dungeon_level, 1);
/// assert!(state.inventory.is_empty());
/// assert!(state.level.entities.iter().all(|e| e.kind != EntityKind::Player));
/// ```
pub fn init_game(rng: &mut StdRng) -> GameState {
    let level = generate(config::LEVEL_WIDTH, config::LEVEL_HEIGHT, 1, rng);
    start_game(level, rng)
}

/// Starts a first-level game on an already generated level.
///
/// The generated player is lifted out of the entity list. A level without one
/// gets a default player at (0, 0).
pub fn start_game(mut level: Level, rng: &mut StdRng) -> GameState {
    let player = match level.take_player() {
        Some(player) => player,
        None => {
            warn!("Generated level has no player; starting at the origin");
            Entity::player(rng, Position::origin())
        }
    };

    update_visibility(&mut level, player.position, config::FOV_RADIUS);
    debug!(
        "New game: player at ({}, {}), {} entities",
        player.position.x,
        player.position.y,
        level.entities.len()
    );

    GameState::from_parts(level, player, 1)
}

/// Advances the game by one move and returns the next snapshot.
///
/// Once the game is won or lost the state is returned unchanged. A blocked
/// move only changes the message (plus the turn counter and statistics).
/// `rng` is only drawn from when the player takes an exit.
pub fn apply_move(state: &GameState, direction: Direction, rng: &mut StdRng) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }

    let mut next = state.clone();
    next.turn_number += 1;

    let events = next.resolve_move(direction, rng);
    for event in &events {
        next.statistics.update_from_event(event);
    }
    trace!("Turn {} {:?}: {:?}", next.turn_number, direction, events);
    next.last_events = events;

    next
}
