//! Tests for rule evaluation and valid move listing.

use xmixdrix_tictactoe::rules::{WINNING_LINES, check_winner, evaluate};
use xmixdrix_tictactoe::{Board, Cell, Outcome, Player, Position, apply_move, reset};

const X: Cell = Cell::Occupied(Player::X);
const O: Cell = Cell::Occupied(Player::O);
const E: Cell = Cell::Empty;

#[test]
fn test_alternating_fill_board_has_no_line() {
    let board = Board::from_cells([X, O, X, O, X, O, O, X, O]);
    assert_eq!(check_winner(&board), None);
    assert_eq!(evaluate(&board), Outcome::Draw);
}

#[test]
fn test_lines_are_rows_then_columns_then_diagonals() {
    let indices: Vec<[usize; 3]> = WINNING_LINES
        .iter()
        .map(|line| line.map(Position::to_index))
        .collect();
    assert_eq!(
        indices,
        vec![
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}

#[test]
fn test_anti_diagonal_win() {
    let board = Board::from_cells([E, X, O, X, O, E, O, X, E]);
    assert_eq!(evaluate(&board), Outcome::Win(Player::O));
}

#[test]
fn test_position_index_round_trip_bounds() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let state = apply_move(&apply_move(&reset(), 0), 4);
    let valid = Position::valid_moves(state.board());
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert_eq!(valid.first(), Some(&Position::TopCenter));
}
