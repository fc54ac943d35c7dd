//! Move-choosing strategies.
//!
//! Every player, human or AI, sits behind the one [`Strategy`] capability.
//! AI tiers are ordered lists of [`Tactic`]s rather than a class hierarchy:
//! the first tactic that proposes a move decides.

mod manual;
mod opening;
mod tactic;

pub use manual::{ManualPlayer, parse_move};
pub use opening::opening_move;
pub use tactic::{Tactic, first_empty};

use crate::player::Player;
use crate::types::{Board, Coord, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Chooses moves for one player.
pub trait Strategy {
    /// Picks the next move for `me` on `grid`, given the opponent's mark.
    ///
    /// The returned coordinate is expected to be open; callers treat an AI
    /// that returns anything else as forfeiting.
    fn choose_move(&mut self, grid: &Board, me: &Player, opponent: Mark)
    -> Result<Coord, StrategyError>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn choose_move(
        &mut self,
        grid: &Board,
        me: &Player,
        opponent: Mark,
    ) -> Result<Coord, StrategyError> {
        (**self).choose_move(grid, me, opponent)
    }
}

/// Why a strategy produced no move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StrategyError {
    /// The board has no empty square.
    #[display("No valid moves available")]
    NoMoveAvailable,

    /// The input source ended before a move was entered.
    #[display("Input closed before a move was entered")]
    InputClosed,

    /// Reading input or writing a prompt failed.
    #[display("I/O error: {}", _0)]
    Io(String),
}

impl std::error::Error for StrategyError {}

impl From<std::io::Error> for StrategyError {
    fn from(err: std::io::Error) -> Self {
        StrategyError::Io(err.to_string())
    }
}

/// AI tier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// First empty square.
    Easy,
    /// Win, then block, then first empty square.
    Medium,
    /// Win, then block, then the opening book, then first empty square.
    #[default]
    Hard,
}

impl Difficulty {
    /// Tactics tried in order for this tier.
    pub fn tactics(self) -> &'static [Tactic] {
        match self {
            Difficulty::Easy => &[Tactic::FirstEmpty],
            Difficulty::Medium => &[Tactic::Win, Tactic::Block, Tactic::FirstEmpty],
            Difficulty::Hard => &[
                Tactic::Win,
                Tactic::Block,
                Tactic::OpeningBook,
                Tactic::FirstEmpty,
            ],
        }
    }

    /// Builds the strategy for this tier.
    pub fn strategy(self) -> TacticalAi {
        TacticalAi::new(self.tactics())
    }
}

/// AI player composed from an ordered list of tactics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TacticalAi {
    tactics: Vec<Tactic>,
}

impl TacticalAi {
    /// Creates an AI that tries `tactics` in order.
    pub fn new(tactics: impl Into<Vec<Tactic>>) -> Self {
        Self {
            tactics: tactics.into(),
        }
    }
}

impl Strategy for TacticalAi {
    #[instrument(skip(self, grid, me), fields(player = %me.name(), mark = %me.mark()))]
    fn choose_move(
        &mut self,
        grid: &Board,
        me: &Player,
        opponent: Mark,
    ) -> Result<Coord, StrategyError> {
        for tactic in &self.tactics {
            if let Some(coord) = tactic.propose(grid, me, opponent) {
                debug!(?tactic, %coord, "Tactic chose move");
                return Ok(coord);
            }
        }
        debug!("No tactic produced a move");
        Err(StrategyError::NoMoveAvailable)
    }
}
