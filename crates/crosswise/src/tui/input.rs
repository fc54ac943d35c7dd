//! Keyboard and mouse mapping onto grid squares.

use super::ui::{board_cells, overlay_area};
use crosswise_core::{Coord, GRID_SIZE};
use crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};

/// Moves the cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let last = GRID_SIZE as i32 - 1;
    let (dx, dy) = match key {
        KeyCode::Left => (-1, 0),
        KeyCode::Right => (1, 0),
        KeyCode::Up => (0, -1),
        KeyCode::Down => (0, 1),
        _ => (0, 0),
    };
    Coord::new(
        (cursor.x + dx).clamp(0, last),
        (cursor.y + dy).clamp(0, last),
    )
}

/// Square for a digit key, 1-9 counting row-major from the top left.
pub fn digit_square(c: char) -> Option<Coord> {
    let digit = c.to_digit(10)? as i32;
    (1..=9)
        .contains(&digit)
        .then(|| Coord::new((digit - 1) % 3, (digit - 1) / 3))
}

/// Square under a mouse click at terminal cell (`column`, `row`).
pub fn clicked_square(screen: Rect, column: u16, row: u16) -> Option<Coord> {
    let point = Position::new(column, row);
    board_cells(screen)
        .iter()
        .enumerate()
        .find_map(|(y, cells)| {
            cells
                .iter()
                .position(|cell| cell.contains(point))
                .map(|x| Coord::new(x as i32, y as i32))
        })
}

/// True when a click at terminal cell (`column`, `row`) lands on the overlay popup.
pub fn clicked_overlay(screen: Rect, column: u16, row: u16) -> bool {
    overlay_area(screen).contains(Position::new(column, row))
}
