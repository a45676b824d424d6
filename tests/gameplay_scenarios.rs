//! Turn-by-turn scenarios on hand-built levels.

use delve::{
    apply_move, compute_visibility, config, Direction, Entity, GameEvent, GameState, GameStatus,
    Level, Position, Tile, TileType,
};
use rand::{rngs::StdRng, SeedableRng};

/// A 10x8 level with an open 8x6 room and the player at (3, 1), so the
/// tile to the north is wall.
fn room_state() -> GameState {
    let mut level = Level::new(10, 8);
    for y in 1..7 {
        for x in 1..9 {
            level.set_tile(Position::new(x, y), Tile::floor()).unwrap();
        }
    }
    let player = Entity::player(&mut StdRng::seed_from_u64(1), Position::new(3, 1));
    let level = compute_visibility(&level, player.position, config::FOV_RADIUS);
    GameState::from_parts(level, player, 1)
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

#[test]
fn test_wall_to_the_north_means_idle() {
    let state = room_state();
    let next = apply_move(&state, Direction::Up, &mut rng());

    assert_eq!(next.player.position, state.player.position);
    assert_eq!(next.message, "You are idle.");
    assert_eq!(next.level, state.level);
    assert_eq!(next.status, GameStatus::Playing);
}

#[test]
fn test_walking_off_the_grid_is_idle() {
    let mut state = room_state();
    state.level.set_tile(Position::new(3, 0), Tile::floor()).unwrap();
    state.player.position = Position::new(3, 0);

    let next = apply_move(&state, Direction::Up, &mut rng());
    assert_eq!(next.player.position, Position::new(3, 0));
    assert_eq!(next.message, "You are idle.");
}

#[test]
fn test_one_blow_kills_weak_enemy() {
    let mut state = room_state();
    let cat = Entity::enemy(&mut rng(), Position::new(3, 2), "Cat", 5, 8);
    state.level.entities.push(cat);

    let next = apply_move(&state, Direction::Down, &mut rng());

    assert!(next.level.entities.is_empty());
    assert_eq!(next.message, "You defeated the Cat!");
    assert_eq!(next.player.position, Position::new(3, 1));
    assert_eq!(next.player.health, Some(100));
    assert_eq!(next.statistics.enemies_defeated, 1);
}

#[test]
fn test_health_potion_at_full_health() {
    let mut state = room_state();
    let potion = Entity::item(&mut rng(), Position::new(4, 1), "Health Potion");
    state.level.entities.push(potion);

    let next = apply_move(&state, Direction::Right, &mut rng());

    assert_eq!(next.player.health, Some(100));
    assert!(next.level.entities.is_empty());
    assert_eq!(next.inventory.len(), 1);
    assert_eq!(next.inventory[0].name, "Health Potion");
    assert_eq!(next.inventory[0].quantity, 1);
    assert_eq!(
        next.message,
        "You picked up a Health Potion. You restored 20 health."
    );
    assert_eq!(next.player.position, Position::new(3, 1));
}

#[test]
fn test_shield_goes_past_the_cap() {
    let mut state = room_state();
    let shield = Entity::item(&mut rng(), Position::new(4, 1), "Shield");
    state.level.entities.push(shield);

    let next = apply_move(&state, Direction::Right, &mut rng());
    assert_eq!(next.player.health, Some(110));
    assert_eq!(
        next.message,
        "You picked up a Shield. Your maximum health increased by 10."
    );
}

#[test]
fn test_same_name_items_stack() {
    let mut state = room_state();
    let mut ids = StdRng::seed_from_u64(8);
    state.level.entities.push(Entity::item(&mut ids, Position::new(4, 1), "Shield"));
    state.level.entities.push(Entity::item(&mut ids, Position::new(5, 1), "Shield"));

    let state = apply_move(&state, Direction::Right, &mut rng());
    let state = apply_move(&state, Direction::Right, &mut rng());
    let state = apply_move(&state, Direction::Right, &mut rng());

    assert_eq!(state.inventory.len(), 1);
    assert_eq!(state.inventory[0].quantity, 2);
    assert_eq!(state.player.position, Position::new(4, 1));
}

#[test]
fn test_fight_to_the_death() {
    let mut state = room_state();
    state.player.health = Some(12);
    let bear = Entity::enemy(&mut rng(), Position::new(4, 1), "Bear", 100, 7);
    state.level.entities.push(bear);

    let first = apply_move(&state, Direction::Right, &mut rng());
    assert_eq!(first.player.health, Some(5));
    assert_eq!(first.level.entities[0].health, Some(90));
    assert_eq!(
        first.message,
        "You hit the Bear for 10 damage. It hits you back for 7 damage."
    );

    let second = apply_move(&first, Direction::Right, &mut rng());
    assert_eq!(second.player.health, Some(0));
    assert_eq!(second.status, GameStatus::Lost);
    assert_eq!(second.message, "You were defeated by the Bear. Game over!");
    assert_eq!(second.statistics.damage_taken, 14);

    let third = apply_move(&second, Direction::Left, &mut rng());
    assert_eq!(third, second);
}

#[test]
fn test_door_then_walk_through() {
    let mut state = room_state();
    state.level.set_tile(Position::new(4, 1), Tile::door()).unwrap();

    let opened = apply_move(&state, Direction::Right, &mut rng());
    assert_eq!(opened.message, "You open the door.");
    assert_eq!(
        opened.level.get_tile(Position::new(4, 1)).unwrap().tile_type,
        TileType::Door { is_open: true }
    );
    assert_eq!(
        opened.last_events[0],
        GameEvent::DoorOpened {
            position: Position::new(4, 1)
        }
    );

    // Closed doors block nothing but the old snapshot still shows them shut.
    assert!(state.level.get_tile(Position::new(4, 1)).unwrap().is_closed_door());
}

#[test]
fn test_moving_lights_new_tiles() {
    let mut level = Level::new(30, 3);
    for x in 1..29 {
        level.set_tile(Position::new(x, 1), Tile::floor()).unwrap();
    }
    let player = Entity::player(&mut rng(), Position::new(1, 1));
    let level = compute_visibility(&level, player.position, config::FOV_RADIUS);
    let state = GameState::from_parts(level, player, 1);

    let far = Position::new(15, 1);
    assert!(!state.level.get_tile(far).unwrap().explored);

    let mut current = state;
    for _ in 0..10 {
        current = apply_move(&current, Direction::Right, &mut rng());
    }

    assert_eq!(current.player.position, Position::new(11, 1));
    assert!(current.level.get_tile(far).unwrap().visible);
    // Tiles behind the player stay explored once out of sight.
    let start = current.level.get_tile(Position::new(1, 1)).unwrap();
    assert!(start.explored && !start.visible);
    assert_eq!(current.statistics.steps_taken, 10);
    assert_eq!(current.turn_number, 10);
}
