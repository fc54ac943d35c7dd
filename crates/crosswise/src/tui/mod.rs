//! Terminal UI: keyboard and mouse play against an AI.

mod app;
mod input;
mod ui;

pub use app::App;

use crate::config::GameConfig;
use crate::renderer::{Renderer, Scene};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Renderer drawing scenes onto a ratatui terminal.
pub struct GraphicalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> GraphicalRenderer<B> {
    /// Wraps an already configured terminal.
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    /// Current screen area, used to map mouse clicks onto squares.
    pub fn area(&self) -> Result<Rect> {
        let size = self
            .terminal
            .size()
            .map_err(|e| anyhow::anyhow!("failed to query terminal size: {:?}", e))?;
        Ok(Rect::new(0, 0, size.width, size.height))
    }

    /// Gives the terminal back.
    pub fn into_inner(self) -> Terminal<B> {
        self.terminal
    }
}

impl<B: Backend> Renderer for GraphicalRenderer<B> {
    fn render(&mut self, scene: &Scene<'_>) -> Result<()> {
        self.terminal
            .draw(|frame| ui::draw(frame, scene))
            .map_err(|e| anyhow::anyhow!("failed to draw frame: {:?}", e))?;
        Ok(())
    }
}

/// Runs the terminal UI until the user quits.
#[instrument(skip(config))]
pub fn run(config: &GameConfig) -> Result<()> {
    info!("Starting terminal UI");
    let mut app = App::new(config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut renderer = GraphicalRenderer::new(Terminal::new(CrosstermBackend::new(stdout))?);

    let res = event_loop(&mut renderer, &mut app);

    let mut terminal = renderer.into_inner();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Terminal UI loop failed");
    }
    res
}

fn event_loop<B: Backend>(renderer: &mut GraphicalRenderer<B>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        renderer.render(&app.scene())?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let screen = renderer.area()?;
                app.handle_click(screen, mouse.column, mouse.row);
            }
            other => debug!(?other, "Ignored event"),
        }
    }
    info!("Terminal UI closed");
    Ok(())
}
