//! # Rendering Module
//!
//! Plain-text presentation of a [`GameState`] for the terminal front-end.
//! Nothing here changes the game.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;

use crate::GameState;

/// Composes full frames from the map, status line and optional panels.
#[derive(Debug, Clone)]
pub struct Renderer {
    pub show_minimap: bool,
    pub show_inventory: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Creates a new renderer instance.
    pub fn new() -> Self {
        Self {
            show_minimap: true,
            show_inventory: false,
        }
    }

    /// Renders one frame as a single string ending in a newline.
    pub fn render_frame(&self, state: &GameState) -> String {
        let viewport = Viewport::around_player(state);
        let mut lines = render_map(state, &viewport);

        lines.push(String::new());
        lines.push(status_line(state));

        if self.show_inventory {
            lines.extend(inventory_lines(&state.inventory));
        }

        if self.show_minimap {
            lines.push(String::new());
            lines.extend(minimap(state));
        }

        let mut frame = lines.join("\n");
        frame.push('\n');
        frame
    }
}
