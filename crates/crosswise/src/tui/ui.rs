//! Stateless UI rendering for the grid.

use crate::renderer::{Overlay, Scene};
use crosswise_core::{Coord, GRID_SIZE, Mark, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const BOARD_WIDTH: u16 = 40;
const BOARD_HEIGHT: u16 = 11;
const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const OVERLAY_WIDTH: u16 = 38;
const OVERLAY_HEIGHT: u16 = 7;

/// Renders title, board, status line and any overlay.
pub fn draw(frame: &mut Frame, scene: &Scene<'_>) {
    let [title_area, board_area, status_area] = screen_areas(frame.area());

    let title = Paragraph::new("Crosswise - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    draw_board(frame, board_area, scene);

    let status = Paragraph::new(scene.status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);

    if let Some(overlay) = scene.overlay {
        draw_overlay(frame, overlay_area(frame.area()), overlay);
    }
}

/// Screen area of the start and play-again popup.
pub fn overlay_area(screen: Rect) -> Rect {
    let [_, board_area, _] = screen_areas(screen);
    center_rect(board_area, OVERLAY_WIDTH, OVERLAY_HEIGHT)
}

/// Screen areas for each square, indexed `[row][col]`.
pub fn board_cells(screen: Rect) -> [[Rect; GRID_SIZE]; GRID_SIZE] {
    let [_, board_area, _] = screen_areas(screen);
    let board = center_rect(board_area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board);

    std::array::from_fn(|row| {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);
        std::array::from_fn(|col| cols[col * 2])
    })
}

fn screen_areas(screen: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
        ])
        .split(screen);
    [chunks[0], chunks[1], chunks[2]]
}

fn draw_board(frame: &mut Frame, area: Rect, scene: &Scene<'_>) {
    let cells = board_cells(frame.area());
    let board = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    for (row, cell_row) in cells.iter().enumerate() {
        for (col, cell) in cell_row.iter().enumerate() {
            draw_cell(frame, *cell, scene, Coord::new(col as i32, row as i32));
        }
    }

    // Grid lines between the squares
    for row in 0..GRID_SIZE - 1 {
        let y = cells[row][0].bottom();
        let line = Rect::new(board.x, y, board.width, 1).intersection(area);
        let sep = Paragraph::new("─".repeat(line.width as usize))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, line);
    }
    for col in 0..GRID_SIZE - 1 {
        for cell_row in &cells {
            let x = cell_row[col].right();
            let bar = Rect::new(x, cell_row[col].y, 1, CELL_HEIGHT).intersection(area);
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, bar);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, scene: &Scene<'_>, coord: Coord) {
    let square = scene.game.grid().get(coord).unwrap_or_default();

    let (symbol, base_style) = match square {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if scene.cursor == Some(coord) {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_overlay(frame: &mut Frame, popup: Rect, overlay: Overlay) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            overlay.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Enter or click to play, q to quit"),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
