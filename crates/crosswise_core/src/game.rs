//! Game orchestration: players, turn order and placement.

use crate::player::{Ordinal, Player, PlayerKind};
use crate::rules::{check_winner, is_full};
use crate::types::{Board, Coord, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Operation invoked in a state that forbids it.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidStateError {
    /// `place` called before both players joined.
    #[display("not enough players")]
    NotEnoughPlayers,

    /// `place` called after a line was completed.
    #[display("winner already declared, reset required")]
    WinnerDeclared,

    /// `add_player` called with both seats taken.
    #[display("game already has {} players", PLAYER_COUNT)]
    TooManyPlayers,

    /// `add_player` called with a mark another player holds.
    #[display("mark {} is already taken", _0)]
    DuplicateMark(Mark),
}

impl std::error::Error for InvalidStateError {}

/// Where a game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Fewer than two players registered.
    Setup,
    /// Accepting moves.
    InProgress,
    /// A line was completed by this mark.
    Won(Mark),
    /// Board full with no completed line.
    Stalemate,
}

/// Tic-tac-toe game engine.
///
/// Owns the board and the two players. The board is only ever written
/// through [`Game::place`].
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
    current: Option<usize>,
}

impl Game {
    /// Creates a game with an empty board and no players.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the next player.
    ///
    /// # Errors
    ///
    /// [`InvalidStateError::TooManyPlayers`] when both seats are taken and
    /// [`InvalidStateError::DuplicateMark`] when `mark` is already in use.
    #[instrument(skip(self, name), fields(name = %name.as_ref()))]
    pub fn add_player(
        &mut self,
        kind: PlayerKind,
        mark: Mark,
        name: impl AsRef<str>,
    ) -> Result<Player, InvalidStateError> {
        let ordinal = Ordinal::from_index(self.players.len()).ok_or_else(|| {
            warn!("Game already has two players");
            InvalidStateError::TooManyPlayers
        })?;

        if self.players.iter().any(|p| *p.mark() == mark) {
            warn!(%mark, "Mark already taken");
            return Err(InvalidStateError::DuplicateMark(mark));
        }

        let player = Player::new(ordinal, mark, name.as_ref(), kind);
        info!(%ordinal, %mark, %kind, "Player registered");
        self.players.push(player.clone());
        Ok(player)
    }

    /// Places the next player's mark at column `x`, row `y`.
    ///
    /// The turn passes to the next player before the coordinates are
    /// checked, so a rejected placement still uses up that player's turn.
    /// Returns `Ok(false)` and leaves the board untouched when the square is
    /// off the grid or occupied.
    ///
    /// # Errors
    ///
    /// [`InvalidStateError::NotEnoughPlayers`] before both players joined and
    /// [`InvalidStateError::WinnerDeclared`] once a line is complete.
    #[instrument(skip(self))]
    pub fn place(&mut self, x: i32, y: i32) -> Result<bool, InvalidStateError> {
        if self.players.len() < PLAYER_COUNT {
            warn!("Placement before both players joined");
            return Err(InvalidStateError::NotEnoughPlayers);
        }
        if self.winner().is_some() {
            warn!("Placement after the game was won");
            return Err(InvalidStateError::WinnerDeclared);
        }

        let index = self.next_index();
        self.current = Some(index);
        let mark = *self.players[index].mark();

        let coord = Coord::new(x, y);
        if !self.board.set(coord, mark) {
            warn!(%coord, %mark, "Rejected placement");
            return Ok(false);
        }

        debug!(%coord, %mark, "Mark placed");
        match self.status() {
            GameStatus::Won(winner) => info!(%winner, "Line completed"),
            GameStatus::Stalemate => info!("Board full, stalemate"),
            _ => {}
        }
        Ok(true)
    }

    /// Clears the board for a fresh game.
    ///
    /// Players stay registered and the turn order rewinds, so the first
    /// player opens the next game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting board");
        self.board = Board::new();
        self.current = None;
    }

    /// The player holding a completed line, if any.
    pub fn winner(&self) -> Option<&Player> {
        let mark = check_winner(&self.board)?;
        self.player_with(mark)
    }

    /// True once somebody has won or the board is full.
    pub fn game_over(&self) -> bool {
        self.winner().is_some() || is_full(&self.board)
    }

    /// Current lifecycle state.
    pub fn status(&self) -> GameStatus {
        if self.players.len() < PLAYER_COUNT {
            return GameStatus::Setup;
        }
        match self.winner() {
            Some(player) => GameStatus::Won(*player.mark()),
            None if is_full(&self.board) => GameStatus::Stalemate,
            None => GameStatus::InProgress,
        }
    }

    /// Read-only grid view.
    pub fn grid(&self) -> &Board {
        &self.board
    }

    /// Registered players in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Player whose turn the last `place` call used.
    pub fn current_player(&self) -> Option<&Player> {
        self.current.and_then(|i| self.players.get(i))
    }

    /// Player whose mark the next `place` call will write.
    pub fn next_player(&self) -> Option<&Player> {
        self.players.get(self.next_index())
    }

    /// Player using `mark`.
    pub fn player_with(&self, mark: Mark) -> Option<&Player> {
        self.players.iter().find(|p| *p.mark() == mark)
    }

    fn next_index(&self) -> usize {
        match self.current {
            None => 0,
            Some(i) => (i + 1) % self.players.len().max(1),
        }
    }
}
