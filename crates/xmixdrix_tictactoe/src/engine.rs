//! State transitions for tic-tac-toe.
//!
//! The engine owns no state. Callers hold a [`GameState`] and replace it with
//! whatever these functions return.

use super::error::MoveError;
use super::invariants::{EngineInvariants, InvariantSet};
use super::rules;
use super::{GameState, Outcome, Player, Position};
use tracing::{debug, info, instrument};

/// Returns a fresh game: empty board, X to move, in progress.
#[instrument]
pub fn reset() -> GameState {
    GameState::new()
}

/// Plays the current player's mark at `index`.
///
/// Moves after the game is decided, onto an occupied cell, or outside the
/// board leave the state untouched and are returned as-is.
#[instrument(skip(state), fields(player = %state.current_player()))]
pub fn apply_move(state: &GameState, index: usize) -> GameState {
    try_apply_move(state, index).unwrap_or_else(|e| {
        debug!(error = %e, "Move ignored");
        state.clone()
    })
}

/// Plays the current player's mark at `index`, reporting why it was refused.
///
/// # Errors
///
/// - [`MoveError::GameOver`] once the outcome is decided
/// - [`MoveError::OutOfBounds`] for an index above 8
/// - [`MoveError::CellOccupied`] when the cell already holds a mark
#[instrument(skip(state), fields(player = %state.current_player()))]
pub fn try_apply_move(state: &GameState, index: usize) -> Result<GameState, MoveError> {
    if state.outcome().is_decided() {
        return Err(MoveError::GameOver);
    }
    let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
    if !state.board().is_empty(index) {
        return Err(MoveError::CellOccupied(pos));
    }

    let player = state.current_player();
    let mut next = state.clone();
    next.board_mut().place(pos, player);

    let outcome = rules::evaluate(next.board());
    next.set_outcome(outcome);
    match outcome {
        Outcome::InProgress => next.set_current_player(player.opponent()),
        decided => info!(outcome = ?decided, "Game decided"),
    }

    debug_assert_eq!(EngineInvariants::check_all(state, &next), Ok(()));
    debug!(position = %pos, "Move applied");
    Ok(next)
}

/// Status text for the outcome; empty while the game is running.
pub fn display_message(state: &GameState) -> &'static str {
    match state.outcome() {
        Outcome::Win(Player::X) => "The winner is X!",
        Outcome::Win(Player::O) => "The winner is O!",
        Outcome::Draw => "Tie!",
        Outcome::InProgress => "",
    }
}
