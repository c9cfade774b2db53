//! Outcome invariant: a decided game stays decided and frozen.

use super::TransitionInvariant;
use crate::GameState;

/// Invariant: once the outcome is `Win` or `Draw`, transitions leave the
/// state unchanged.
pub struct MonotonicOutcome;

impl TransitionInvariant<GameState> for MonotonicOutcome {
    fn holds(before: &GameState, after: &GameState) -> bool {
        !before.outcome().is_decided() || before == after
    }

    fn description() -> &'static str {
        "A decided game accepts no further moves"
    }
}
