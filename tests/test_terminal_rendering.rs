//! Integration test for the terminal rendering and input layers.

use delve::{
    apply_move, init_game, minimap, render_map, status_line, Command, DelveResult, Direction,
    GameStatus, InputHandler, Renderer, Viewport, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn test_viewport_follows_player() {
    let state = init_game(&mut StdRng::seed_from_u64(12345));
    let viewport = Viewport::around_player(&state);

    assert!(viewport.contains(state.player.position));
    assert_eq!(viewport.width, VIEWPORT_WIDTH);
    assert_eq!(viewport.height, VIEWPORT_HEIGHT);
    assert!(viewport.origin.x >= 0 && viewport.origin.y >= 0);
    assert!(viewport.origin.x + viewport.width as i32 <= state.level.width as i32);
    assert!(viewport.origin.y + viewport.height as i32 <= state.level.height as i32);

    let rows = render_map(&state, &viewport);
    let player_row = (state.player.position.y - viewport.origin.y) as usize;
    let player_col = (state.player.position.x - viewport.origin.x) as usize;
    assert_eq!(rows[player_row].chars().nth(player_col), Some('@'));
}

#[test]
fn test_minimap_only_shows_explored() {
    let state = init_game(&mut StdRng::seed_from_u64(3));
    let rows = minimap(&state);

    assert_eq!(rows.len(), state.level.height as usize);
    for (y, row) in rows.iter().enumerate() {
        for (x, glyph) in row.chars().enumerate() {
            let tile = state.level.tiles[y][x];
            if !tile.explored {
                assert_eq!(glyph, ' ', "unexplored tile drawn at ({x}, {y})");
            }
        }
    }
}

#[test]
fn test_input_handler_drives_game() -> DelveResult<()> {
    let input = InputHandler::new();
    let mut rng = StdRng::seed_from_u64(21);
    let mut state = init_game(&mut rng);

    for command in input.parse_line("ddssaaww")? {
        if let Command::Move(direction) = command {
            state = apply_move(&state, direction, &mut rng);
        }
    }

    assert_eq!(state.turn_number, 8);
    assert!(status_line(&state).contains(&state.message));
    Ok(())
}

#[test]
fn test_rendering_does_not_change_state() {
    let mut rng = StdRng::seed_from_u64(4);
    let state = apply_move(&init_game(&mut rng), Direction::Left, &mut rng);
    let before = state.clone();

    let frame = Renderer::new().render_frame(&state);

    assert!(frame.ends_with('\n'));
    assert_eq!(state, before);
    assert_eq!(state.status, GameStatus::Playing);
}
