//! Turn invariant: players alternate X, O, X, O, ... until the game is decided.

use super::TransitionInvariant;
use crate::GameState;

/// Invariant: a move hands the turn to the opponent, unless it decided the
/// game, in which case the mover stays current. A rejected move keeps the turn.
pub struct AlternatingTurn;

impl TransitionInvariant<GameState> for AlternatingTurn {
    fn holds(before: &GameState, after: &GameState) -> bool {
        if before.board() == after.board() {
            return before.current_player() == after.current_player();
        }
        let expected = if after.outcome().is_decided() {
            before.current_player()
        } else {
            before.current_player().opponent()
        };
        after.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...) while the game is in progress"
    }
}
