//! Rows, columns and diagonals.

use crate::types::{Board, Coord, GRID_SIZE, Square};

/// A line of three squares that wins when filled by one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Row by index, top to bottom.
    Row(usize),
    /// Column by index, left to right.
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Bottom-left to top-right: column `i` paired with row `2 - i`.
    AntiDiagonal,
}

impl Line {
    /// Order used by win detection: each row followed by the column of the
    /// same index, then both diagonals.
    pub const WIN_SCAN: [Line; 8] = [
        Line::Row(0),
        Line::Column(0),
        Line::Row(1),
        Line::Column(1),
        Line::Row(2),
        Line::Column(2),
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// Order used by the tactics: all rows, all columns, then both diagonals.
    pub const TACTIC_SCAN: [Line; 8] = [
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// Coordinates of the line, in scan order.
    pub fn coords(self) -> [Coord; GRID_SIZE] {
        std::array::from_fn(|i| match self {
            Line::Row(row) => Coord::from_cell(row, i),
            Line::Column(col) => Coord::from_cell(i, col),
            Line::Diagonal => Coord::from_cell(i, i),
            Line::AntiDiagonal => Coord::from_cell(GRID_SIZE - i - 1, i),
        })
    }

    /// Squares of the line on `board`.
    pub fn squares(self, board: &Board) -> [Square; GRID_SIZE] {
        self.coords()
            .map(|coord| board.get(coord).unwrap_or_default())
    }
}
