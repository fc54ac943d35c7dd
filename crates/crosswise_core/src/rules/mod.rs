//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the game and the AI tactics share one definition of a line.

pub mod draw;
pub mod line;
pub mod win;

pub use draw::{is_full, is_stalemate};
pub use line::Line;
pub use win::{check_winner, completing_move};
