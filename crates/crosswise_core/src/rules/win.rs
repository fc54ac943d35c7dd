//! Win detection logic for tic-tac-toe.

use super::line::Line;
use crate::types::{Board, Coord, Mark, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a row, column or diagonal is filled by one mark.
/// Lines are scanned in [`Line::WIN_SCAN`] order and the first match wins.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    Line::WIN_SCAN.iter().find_map(|line| match line.squares(board) {
        [Square::Occupied(a), Square::Occupied(b), Square::Occupied(c)] if a == b && b == c => {
            Some(a)
        }
        _ => None,
    })
}

/// Finds the square that would complete a line for `mark`.
///
/// A line qualifies when it holds two of `mark` and one empty square. Lines
/// are scanned in [`Line::TACTIC_SCAN`] order; the first qualifying line's
/// empty square is returned.
#[instrument(skip(board))]
pub fn completing_move(board: &Board, mark: Mark) -> Option<Coord> {
    Line::TACTIC_SCAN.iter().find_map(|line| {
        let squares = line.squares(board);
        let ours = squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count();
        let empty = squares.iter().position(|s| *s == Square::Empty);
        let empties = squares.iter().filter(|s| **s == Square::Empty).count();
        match (ours, empties, empty) {
            (2, 1, Some(i)) => Some(line.coords()[i]),
            _ => None,
        }
    })
}
