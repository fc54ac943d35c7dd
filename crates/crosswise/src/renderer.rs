//! Presentation layers.

use crosswise_core::{Coord, Game};

/// Overlay screen gating the start of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Overlay {
    /// Shown before the first game.
    #[strum(to_string = "PLAY")]
    Start,
    /// Shown after a game ends.
    #[strum(to_string = "PLAY AGAIN")]
    PlayAgain,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    /// Game whose grid is drawn.
    pub game: &'a Game,
    /// Status line; empty for none.
    pub status: &'a str,
    /// Highlighted square, for keyboard navigation.
    pub cursor: Option<Coord>,
    /// Screen drawn over the grid, if any.
    pub overlay: Option<Overlay>,
}

impl<'a> Scene<'a> {
    /// A bare view of the grid.
    pub fn of(game: &'a Game) -> Self {
        Self {
            game,
            status: "",
            cursor: None,
            overlay: None,
        }
    }
}

/// Displays game state. Renderers only read the game.
pub trait Renderer {
    /// Draws one frame.
    fn render(&mut self, scene: &Scene<'_>) -> anyhow::Result<()>;
}
