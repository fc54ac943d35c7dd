//! Application state and logic.

use super::input::{clicked_overlay, clicked_square, digit_square, move_cursor};
use crate::config::GameConfig;
use crate::renderer::{Overlay, Scene};
use crosswise_core::{Coord, Game, Mark, Player, PlayerKind, Strategy};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tracing::{debug, info, instrument, warn};

const DEFAULT_PLAYER_NAME: &str = "Player";
const DEFAULT_OPPONENT_NAME: &str = "Computer";
const CENTRE: Coord = Coord { x: 1, y: 1 };

/// Main application state: a human in seat 1 against an AI in seat 2.
pub struct App {
    game: Game,
    human: Player,
    ai: Player,
    strategy: Box<dyn Strategy>,
    cursor: Coord,
    status: String,
    overlay: Option<Overlay>,
    quit: bool,
}

impl App {
    /// Creates the application behind the start overlay, with the
    /// configured AI tier answering the human.
    pub fn new(config: &GameConfig) -> anyhow::Result<Self> {
        Self::with_strategy(config, Box::new(config.difficulty().strategy()))
    }

    /// Creates the application with `strategy` choosing the AI's moves.
    #[instrument(skip(config, strategy))]
    pub fn with_strategy(
        config: &GameConfig,
        strategy: Box<dyn Strategy>,
    ) -> anyhow::Result<Self> {
        let mark = config.player_mark().unwrap_or(Mark::X);
        let name = config
            .player_name()
            .clone()
            .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string());
        let opponent = config
            .opponent_name()
            .clone()
            .unwrap_or_else(|| DEFAULT_OPPONENT_NAME.to_string());

        let mut game = Game::new();
        let human = game.add_player(PlayerKind::Manual, mark, name)?;
        let ai = game.add_player(
            PlayerKind::Ai(*config.difficulty()),
            mark.opponent(),
            opponent,
        )?;
        info!(human = %human, ai = %ai, "TUI players registered");

        Ok(Self {
            game,
            human,
            ai,
            strategy,
            cursor: CENTRE,
            status: "Press Enter to start".to_string(),
            overlay: Some(Overlay::Start),
            quit: false,
        })
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Overlay currently shown, if any.
    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    /// Highlighted square.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Frame contents for the renderer.
    pub fn scene(&self) -> Scene<'_> {
        Scene {
            game: &self.game,
            status: &self.status,
            cursor: self.overlay.is_none().then_some(self.cursor),
            overlay: self.overlay,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.quit = true;
            }
            KeyCode::Enter | KeyCode::Char(' ') if self.overlay.is_some() => self.start(),
            _ if self.overlay.is_some() => {}
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char('r') => self.start(),
            KeyCode::Char(c) => {
                if let Some(coord) = digit_square(c) {
                    self.cursor = coord;
                    self.play(coord);
                }
            }
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    /// Handles a left click at terminal cell (`column`, `row`) on `screen`.
    ///
    /// While an overlay is up only clicks on its popup count.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, screen: Rect, column: u16, row: u16) {
        if self.overlay.is_some() {
            if clicked_overlay(screen, column, row) {
                self.start();
            }
            return;
        }
        if let Some(coord) = clicked_square(screen, column, row) {
            self.cursor = coord;
            self.play(coord);
        }
    }

    /// Clears the board and hands the first move to the human.
    fn start(&mut self) {
        debug!("Starting game");
        self.game.reset();
        self.overlay = None;
        self.cursor = CENTRE;
        self.status = format!("Your move, {}", self.human.name());
    }

    /// Places the human's mark, then lets the AI answer.
    fn play(&mut self, coord: Coord) {
        if self.game.game_over() {
            return;
        }
        if !self.game.grid().is_open(coord) {
            debug!(%coord, "Square not open");
            self.status = "Invalid move.".to_string();
            return;
        }

        match self.game.place(coord.x, coord.y) {
            Ok(true) => {}
            Ok(false) | Err(_) => {
                warn!(%coord, "Placement refused");
                self.status = "Invalid move.".to_string();
                return;
            }
        }

        if self.game.game_over() {
            self.finish();
            return;
        }
        self.ai_turn();
    }

    fn ai_turn(&mut self) {
        let choice = self
            .strategy
            .choose_move(self.game.grid(), &self.ai, *self.human.mark())
            .ok()
            .filter(|coord| self.game.grid().is_open(*coord));

        let Some(coord) = choice else {
            warn!(ai = %self.ai.name(), "AI picked an invalid move");
            self.status = format!(
                "An AI player picked an invalid move! {} wins!",
                self.human.name()
            );
            self.overlay = Some(Overlay::PlayAgain);
            return;
        };

        if let Ok(true) = self.game.place(coord.x, coord.y) {
            self.status = format!("{} plays {}", self.ai.name(), coord);
        }
        if self.game.game_over() {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.status = match self.game.winner() {
            Some(winner) => format!("{} wins!", winner.name()),
            None => "Stalemate!".to_string(),
        };
        info!(status = %self.status, "Game over");
        self.overlay = Some(Overlay::PlayAgain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::ui::{board_cells, overlay_area};
    use crosswise_core::{Difficulty, Square};

    fn app(difficulty: Difficulty) -> App {
        let config: GameConfig = toml::from_str(&format!(
            "player_name = \"Ann\"\nopponent_name = \"Bot\"\ndifficulty = \"{}\"\n",
            difficulty.to_string().to_lowercase()
        ))
        .unwrap();
        App::new(&config).unwrap()
    }

    #[test]
    fn test_starts_behind_overlay() {
        let mut app = app(Difficulty::Easy);
        assert_eq!(app.overlay(), Some(Overlay::Start));

        // Moves are ignored until the game starts.
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(*app.game().grid(), crosswise_core::Board::new());

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.overlay(), None);
        assert_eq!(app.status(), "Your move, Ann");
    }

    #[test]
    fn test_human_move_gets_ai_reply() {
        let mut app = app(Difficulty::Easy);
        app.handle_key(KeyCode::Enter);

        app.handle_key(KeyCode::Char('5'));

        let grid = app.game().grid();
        assert_eq!(grid.get(Coord::new(1, 1)), Some(Square::Occupied(Mark::X)));
        assert_eq!(grid.get(Coord::new(0, 0)), Some(Square::Occupied(Mark::O)));
        assert_eq!(app.status(), "Bot plays (0, 0)");
    }

    #[test]
    fn test_occupied_square_keeps_turn() {
        let mut app = app(Difficulty::Easy);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('1'));

        assert_eq!(app.status(), "Invalid move.");
        assert_eq!(app.game().grid().count(Mark::X), 1);
        assert_eq!(app.game().next_player().map(|p| *p.mark()), Some(Mark::X));
    }

    #[test]
    fn test_cursor_and_enter_place_mark() {
        let mut app = app(Difficulty::Easy);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.cursor(), Coord::new(2, 2));

        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.game().grid().get(Coord::new(2, 2)),
            Some(Square::Occupied(Mark::X))
        );
    }

    #[test]
    fn test_win_shows_play_again_and_restart_clears() {
        let mut app = app(Difficulty::Easy);
        app.handle_key(KeyCode::Enter);

        // Easy fills row 0 left to right, so column 2 stays free for us.
        for digit in ['6', '9', '3'] {
            app.handle_key(KeyCode::Char(digit));
        }
        assert_eq!(app.game().winner().map(|p| p.name().as_str()), Some("Ann"));
        assert_eq!(app.status(), "Ann wins!");
        assert_eq!(app.overlay(), Some(Overlay::PlayAgain));

        app.handle_key(KeyCode::Char(' '));
        assert_eq!(app.overlay(), None);
        assert_eq!(*app.game().grid(), crosswise_core::Board::new());
    }

    #[test]
    fn test_click_starts_only_on_overlay() {
        let mut app = app(Difficulty::Easy);
        let screen = Rect::new(0, 0, 80, 24);

        app.handle_click(screen, 0, 0);
        assert_eq!(app.overlay(), Some(Overlay::Start));

        let popup = overlay_area(screen);
        app.handle_click(screen, popup.x + 2, popup.y + 2);
        assert_eq!(app.overlay(), None);
        assert_eq!(app.status(), "Your move, Ann");
    }

    #[test]
    fn test_click_on_square_places_mark() {
        let mut app = app(Difficulty::Easy);
        let screen = Rect::new(0, 0, 80, 24);
        app.handle_key(KeyCode::Enter);

        let cell = board_cells(screen)[2][0];
        app.handle_click(screen, cell.x + 1, cell.y + 1);

        assert_eq!(
            app.game().grid().get(Coord::new(0, 2)),
            Some(Square::Occupied(Mark::X))
        );
    }

    /// Always answers with the top-left square, taken or not.
    struct TopLeftOnly;

    impl Strategy for TopLeftOnly {
        fn choose_move(
            &mut self,
            _grid: &crosswise_core::Board,
            _me: &Player,
            _opponent: Mark,
        ) -> Result<Coord, crosswise_core::StrategyError> {
            Ok(Coord::new(0, 0))
        }
    }

    #[test]
    fn test_ai_on_occupied_square_forfeits() {
        let config: GameConfig =
            toml::from_str("player_name = \"Ann\"\nopponent_name = \"Bot\"\n").unwrap();
        let mut app = App::with_strategy(&config, Box::new(TopLeftOnly)).unwrap();
        app.handle_key(KeyCode::Enter);

        app.handle_key(KeyCode::Char('1'));

        assert_eq!(app.status(), "An AI player picked an invalid move! Ann wins!");
        assert_eq!(app.overlay(), Some(Overlay::PlayAgain));
        assert_eq!(app.game().grid().count(Mark::O), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = app(Difficulty::Hard);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
