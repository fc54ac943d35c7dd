//! Opening book for the hard AI.
//!
//! A fixed table keyed by seat and by how many of our marks are already on
//! the board. It is not a search and leaves many positions uncovered; those
//! fall through to the next tactic.

use crate::player::{Ordinal, Player};
use crate::types::{Board, Coord};
use tracing::{debug, instrument};

const TOP_LEFT: Coord = Coord { x: 0, y: 0 };
const TOP_CENTER: Coord = Coord { x: 1, y: 0 };
const TOP_RIGHT: Coord = Coord { x: 2, y: 0 };
const MIDDLE_LEFT: Coord = Coord { x: 0, y: 1 };
const CENTER: Coord = Coord { x: 1, y: 1 };
const BOTTOM_LEFT: Coord = Coord { x: 0, y: 2 };
const BOTTOM_RIGHT: Coord = Coord { x: 2, y: 2 };

/// Book move for `me`, if the table covers this position.
#[instrument(skip(grid, me), fields(ordinal = %me.ordinal(), mark = %me.mark()))]
pub fn opening_move(grid: &Board, me: &Player) -> Option<Coord> {
    let count = grid.count(*me.mark());
    let open = |coord: Coord| grid.is_open(coord).then_some(coord);

    let proposal = match (*me.ordinal(), count) {
        // Offence: take a corner, then corners sharing its row or column.
        (Ordinal::First, 0) => open(TOP_LEFT),
        (Ordinal::First, 1) => {
            if grid.is_open(TOP_RIGHT) && grid.is_open(TOP_CENTER) {
                Some(TOP_RIGHT)
            } else {
                open(BOTTOM_LEFT)
            }
        }
        (Ordinal::First, 2) => open(TOP_RIGHT)
            .or_else(|| open(BOTTOM_LEFT))
            .or_else(|| open(BOTTOM_RIGHT)),
        // Defence: hold the centre, else an edge.
        (Ordinal::Second, 0) => open(CENTER).or_else(|| open(MIDDLE_LEFT)),
        _ => None,
    };

    debug!(count, ?proposal, "Opening book lookup");
    proposal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerKind;
    use crate::strategy::Difficulty;
    use crate::types::Mark;

    fn hard(ordinal: Ordinal, mark: Mark) -> Player {
        Player::new(ordinal, mark, "AI", PlayerKind::Ai(Difficulty::Hard))
    }

    fn board(rows: [[&str; 3]; 3]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_first_seat_opens_in_corner() {
        assert_eq!(opening_move(&Board::new(), &hard(Ordinal::First, Mark::X)), Some(TOP_LEFT));
    }

    #[test]
    fn test_first_seat_second_move_same_row() {
        let grid = board([["x", "", ""], ["", "o", ""], ["", "", ""]]);
        assert_eq!(opening_move(&grid, &hard(Ordinal::First, Mark::X)), Some(TOP_RIGHT));
    }

    #[test]
    fn test_first_seat_second_move_row_contested() {
        let grid = board([["x", "o", ""], ["", "", ""], ["", "", ""]]);
        assert_eq!(opening_move(&grid, &hard(Ordinal::First, Mark::X)), Some(BOTTOM_LEFT));
    }

    #[test]
    fn test_first_seat_third_move_takes_remaining_corner() {
        let grid = board([["x", "o", "o"], ["", "o", ""], ["x", "", "x"]]);
        // Three of our marks already: outside the table.
        assert_eq!(opening_move(&grid, &hard(Ordinal::First, Mark::X)), None);

        let grid = board([["x", "o", "o"], ["", "o", ""], ["x", "", ""]]);
        assert_eq!(opening_move(&grid, &hard(Ordinal::First, Mark::X)), Some(BOTTOM_RIGHT));
    }

    #[test]
    fn test_second_seat_takes_centre_or_edge() {
        let grid = board([["x", "", ""], ["", "", ""], ["", "", ""]]);
        assert_eq!(opening_move(&grid, &hard(Ordinal::Second, Mark::O)), Some(CENTER));

        let grid = board([["", "", ""], ["", "x", ""], ["", "", ""]]);
        assert_eq!(opening_move(&grid, &hard(Ordinal::Second, Mark::O)), Some(MIDDLE_LEFT));
    }

    #[test]
    fn test_book_never_proposes_occupied_square() {
        let grid = board([["o", "", ""], ["", "", ""], ["", "", ""]]);
        assert_eq!(opening_move(&grid, &hard(Ordinal::First, Mark::X)), None);
    }

    #[test]
    fn test_second_seat_later_moves_uncovered() {
        let grid = board([["x", "", ""], ["", "o", ""], ["", "", "x"]]);
        assert_eq!(opening_move(&grid, &hard(Ordinal::Second, Mark::O)), None);
    }
}
