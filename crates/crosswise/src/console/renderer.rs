//! Plain-text renderer.

use crate::renderer::{Renderer, Scene};
use std::io::Write;

/// Prints the grid as text, followed by the status line when set.
pub struct ConsoleRenderer<W> {
    output: W,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Creates a renderer writing to `output`.
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, scene: &Scene<'_>) -> anyhow::Result<()> {
        writeln!(self.output, "{}\n", scene.game.grid())?;
        if !scene.status.is_empty() {
            writeln!(self.output, "{}", scene.status)?;
        }
        self.output.flush()?;
        Ok(())
    }
}
