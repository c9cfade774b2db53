//! Board invariant: one empty cell gains the mover's mark, nothing else changes.

use super::TransitionInvariant;
use crate::{Cell, GameState};

/// Invariant: a transition changes at most one cell, from empty to the mark
/// of the player who was to move.
pub struct SingleCellChange;

impl TransitionInvariant<GameState> for SingleCellChange {
    fn holds(before: &GameState, after: &GameState) -> bool {
        let changed: Vec<_> = before
            .board()
            .cells()
            .iter()
            .zip(after.board().cells())
            .filter(|(b, a)| b != a)
            .collect();

        match changed.as_slice() {
            [] => before == after,
            [(old, new)] => {
                **old == Cell::Empty && **new == Cell::Occupied(before.current_player())
            }
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Exactly one empty cell receives the current player's mark"
    }
}
