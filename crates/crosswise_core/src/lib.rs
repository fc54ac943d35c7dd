//! Crosswise core - tic-tac-toe rules and AI players.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Mark`], [`Square`], [`Coord`]
//! - **Rules**: win, stalemate and line-completion checks over a board
//! - **Game**: the orchestrator owning the board, two players and turn order
//! - **Strategy**: one [`Strategy`] capability implemented by the manual
//!   player and by AI tiers built from ordered [`Tactic`] lists
//!
//! # Example
//!
//! ```
//! use crosswise_core::{Difficulty, Game, Mark, PlayerKind, Strategy};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new();
//! game.add_player(PlayerKind::Ai(Difficulty::Hard), Mark::X, "Hal")?;
//! game.add_player(PlayerKind::Ai(Difficulty::Easy), Mark::O, "Eve")?;
//!
//! let hal = game.players()[0].clone();
//! let coord = Difficulty::Hard.strategy().choose_move(game.grid(), &hal, Mark::O)?;
//! assert!(game.place(coord.x, coord.y)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod player;
pub mod rules;
pub mod strategy;
mod types;

pub use game::{Game, GameStatus, InvalidStateError, PLAYER_COUNT};
pub use player::{Ordinal, Player, PlayerKind};
pub use strategy::{Difficulty, ManualPlayer, Strategy, StrategyError, Tactic, TacticalAi};
pub use types::{Board, BoardParseError, Coord, GRID_SIZE, Mark, Square};
