//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the grid.
pub const GRID_SIZE: usize = 3;

/// Mark a player places on the grid.
///
/// Parsing is case-insensitive; display is always upper case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// The X mark.
    #[serde(alias = "x")]
    X,
    /// The O mark.
    #[serde(alias = "o")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Square claimed by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// Grid coordinate: `x` selects the column, `y` the row.
///
/// Components are signed so that off-grid input can be represented and
/// rejected by the board rather than by the parser.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, derive_new::new,
)]
#[display("({x}, {y})")]
pub struct Coord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coord {
    /// Row and column indices, or `None` when the coordinate is off the grid.
    pub fn to_cell(self) -> Option<(usize, usize)> {
        let col = usize::try_from(self.x).ok().filter(|c| *c < GRID_SIZE)?;
        let row = usize::try_from(self.y).ok().filter(|r| *r < GRID_SIZE)?;
        Some((row, col))
    }

    /// Builds a coordinate from row and column indices.
    pub(crate) fn from_cell(row: usize, col: usize) -> Self {
        Self::new(col as i32, row as i32)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A cell in a textual grid that is neither empty nor a mark.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognised cell {cell:?} at {at}")]
pub struct BoardParseError {
    /// The offending text.
    pub cell: String,
    /// Where it was found.
    pub at: Coord,
}

/// 3x3 tic-tac-toe board, addressed `squares[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a row-major textual grid.
    ///
    /// Empty strings are empty squares; `"x"`/`"o"` in either case are marks.
    #[instrument]
    pub fn from_rows(rows: [[&str; GRID_SIZE]; GRID_SIZE]) -> Result<Self, BoardParseError> {
        let mut board = Self::new();
        for (row, cells) in rows.iter().enumerate() {
            for (col, text) in cells.iter().enumerate() {
                if text.is_empty() {
                    continue;
                }
                let mark = Mark::from_str(text).map_err(|_| BoardParseError {
                    cell: (*text).to_string(),
                    at: Coord::from_cell(row, col),
                })?;
                board.squares[row][col] = Square::Occupied(mark);
            }
        }
        Ok(board)
    }

    /// Gets the square at `coord`, or `None` when it is off the grid.
    pub fn get(&self, coord: Coord) -> Option<Square> {
        coord.to_cell().map(|(row, col)| self.squares[row][col])
    }

    /// True when `coord` is on the grid and nobody has played there.
    pub fn is_open(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Square::Empty)
    }

    /// Writes `mark` at `coord`. Callers check [`Board::is_open`] first.
    pub(crate) fn set(&mut self, coord: Coord, mark: Mark) -> bool {
        match coord.to_cell() {
            Some((row, col)) if self.squares[row][col] == Square::Empty => {
                self.squares[row][col] = Square::Occupied(mark);
                true
            }
            _ => false,
        }
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// True when every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().flatten().all(|s| *s != Square::Empty)
    }

    /// All squares in row-major order with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Square)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, square)| (Coord::from_cell(row, col), *square))
        })
    }

    /// Read-only grid view, row-major.
    pub fn rows(&self) -> &[[Square; GRID_SIZE]; GRID_SIZE] {
        &self.squares
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            let line = cells
                .iter()
                .map(|square| match square {
                    Square::Empty => " ".to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                })
                .collect::<Vec<_>>()
                .join("|");
            f.write_str(&line)?;
            if row + 1 < GRID_SIZE {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
