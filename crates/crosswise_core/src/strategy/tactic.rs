//! Single-purpose move heuristics.

use super::opening::opening_move;
use crate::player::Player;
use crate::rules::completing_move;
use crate::types::{Board, Coord, Mark, Square};

/// One step of an AI's decision list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tactic {
    /// Complete a line of our own.
    Win,
    /// Fill the gap in a line the opponent is about to complete.
    Block,
    /// Scripted opening play keyed by seat and move count.
    OpeningBook,
    /// First empty square in row-major order.
    FirstEmpty,
}

impl Tactic {
    /// Proposes a move, or `None` to defer to the next tactic.
    pub fn propose(self, grid: &Board, me: &Player, opponent: Mark) -> Option<Coord> {
        match self {
            Tactic::Win => completing_move(grid, *me.mark()),
            Tactic::Block => completing_move(grid, opponent),
            Tactic::OpeningBook => opening_move(grid, me),
            Tactic::FirstEmpty => first_empty(grid),
        }
    }
}

/// First empty square scanning rows top to bottom, cells left to right.
pub fn first_empty(grid: &Board) -> Option<Coord> {
    grid.cells()
        .find(|(_, square)| *square == Square::Empty)
        .map(|(coord, _)| coord)
}
