//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_stalemate(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_stalemate_detection() {
        let board = Board::from_rows([["o", "x", "o"], ["x", "x", "o"], ["x", "o", "x"]]).unwrap();
        assert!(is_full(&board));
        assert!(is_stalemate(&board));
    }

    #[test]
    fn test_not_stalemate_if_winner() {
        let board = Board::from_rows([["x", "x", "x"], ["o", "o", "x"], ["x", "o", "o"]]).unwrap();
        assert!(is_full(&board));
        assert!(!is_stalemate(&board));
    }
}
