//! Stateless UI rendering for the board screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use xmixdrix_tictactoe::{Cell, Player, Position, rules};

use super::app::App;
use crate::status::status_line;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const HINTS: &str = "arrows move · enter/1-9/click play · n New Game · q quit";

/// Screen regions, top to bottom.
struct Regions {
    title: Rect,
    board: Rect,
    status: Rect,
    hints: Rect,
}

fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Status
            Constraint::Length(1),         // Hints
        ])
        .split(area);

    Regions {
        title: chunks[0],
        board: center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT),
        status: chunks[2],
        hints: chunks[3],
    }
}

/// Areas of the 9 cells, by board index, for a frame of size `area`.
pub fn board_cells(area: Rect) -> [Rect; 9] {
    let board = regions(area).board;
    let mut cells = [Rect::default(); 9];
    for pos in Position::ALL {
        let x = board.x + pos.column() as u16 * (CELL_WIDTH + 1);
        let y = board.y + pos.row() as u16 * (CELL_HEIGHT + 1);
        cells[pos.to_index()] = Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(board);
    }
    cells
}

/// Board index of the cell containing the terminal coordinate, if any.
pub fn cell_at(cells: &[Rect; 9], column: u16, row: u16) -> Option<usize> {
    cells.iter().position(|cell| {
        column >= cell.x && column < cell.right() && row >= cell.y && row < cell.bottom()
    })
}

/// Renders the whole screen and returns the cell areas used for hit testing.
pub fn draw(frame: &mut Frame, app: &App) -> [Rect; 9] {
    let area = frame.area();
    let regions = regions(area);
    let cells = board_cells(area);

    let title = Paragraph::new(app.config().title().as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, regions.title);

    draw_grid(frame, regions.board);
    let in_progress = !app.state().outcome().is_decided();
    let winning = rules::winning_line(app.state().board());
    let playable = if in_progress {
        Position::valid_moves(app.state().board())
    } else {
        Vec::new()
    };
    for pos in Position::ALL {
        let highlight = if winning.is_some_and(|line| line.contains(&pos)) {
            Highlight::Winning
        } else if pos == app.cursor() && in_progress {
            Highlight::Cursor
        } else if playable.contains(&pos) {
            Highlight::Playable
        } else {
            Highlight::None
        };
        draw_cell(frame, cells[pos.to_index()], app, pos, highlight);
    }

    let status = Paragraph::new(status_line(app.state()))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, regions.status);

    let hints = Paragraph::new(HINTS)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hints, regions.hints);

    cells
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Highlight {
    None,
    Playable,
    Cursor,
    Winning,
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, highlight: Highlight) {
    let (symbol, base_style) = match app.state().board().at(pos) {
        Cell::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(player) => {
            let color = match player {
                Player::X => Color::Blue,
                Player::O => Color::Red,
            };
            (
                app.config().mark(player).to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };

    let style = match highlight {
        Highlight::None => base_style,
        Highlight::Playable => base_style.fg(Color::Cyan),
        Highlight::Cursor => base_style.bg(Color::White).fg(Color::Black),
        Highlight::Winning => base_style.bg(Color::Green).fg(Color::Black),
    };

    // Middle line of the cell carries the mark.
    let text = Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
    ]);
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(match highlight {
            Highlight::None | Highlight::Playable => Style::default(),
            _ => Style::default().bg(style.bg.unwrap_or(Color::Reset)),
        });
    frame.render_widget(paragraph, area);
}

fn draw_grid(frame: &mut Frame, board: Rect) {
    let style = Style::default().fg(Color::DarkGray);
    for row in 1..3u16 {
        let y = board.y + row * (CELL_HEIGHT + 1) - 1;
        let line = Rect::new(board.x, y, board.width, 1).intersection(board);
        frame.render_widget(Paragraph::new("─".repeat(board.width as usize)).style(style), line);
    }
    for column in 1..3u16 {
        let x = board.x + column * (CELL_WIDTH + 1) - 1;
        let line = Rect::new(x, board.y, 1, board.height).intersection(board);
        let bars: Vec<Line> = (0..board.height).map(|_| Line::from("│")).collect();
        frame.render_widget(Paragraph::new(bars).style(style), line);
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
