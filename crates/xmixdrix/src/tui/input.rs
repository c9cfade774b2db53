//! Keyboard mapping onto board positions.

use crossterm::event::KeyCode;
use xmixdrix_tictactoe::Position;

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let target = match key {
        KeyCode::Up => Position::from_row_column(row.wrapping_sub(1), column),
        KeyCode::Down => Position::from_row_column(row + 1, column),
        KeyCode::Left => Position::from_row_column(row, column.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_column(row, column + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Maps digit keys 1-9 to cell indices 0-8.
pub fn digit_index(c: char) -> Option<usize> {
    match c.to_digit(10)? {
        0 => None,
        digit => Some(digit as usize - 1),
    }
}
