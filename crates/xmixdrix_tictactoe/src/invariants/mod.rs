//! Transition invariants for tic-tac-toe.
//!
//! Each invariant relates a state to the state a move produced from it. The
//! engine checks the whole set in debug builds, and tests can check them
//! against any pair of states.

mod alternating_turn;
mod monotonic_outcome;
mod single_cell_change;

pub use alternating_turn::AlternatingTurn;
pub use monotonic_outcome::MonotonicOutcome;
pub use single_cell_change::SingleCellChange;

use super::GameState;

/// A property every transition `before -> after` must satisfy.
pub trait TransitionInvariant<S> {
    /// Checks the invariant for one transition.
    fn holds(before: &S, after: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of [`TransitionInvariant`]s.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: TransitionInvariant<S>>(
    before: &S,
    after: &S,
    violations: &mut Vec<InvariantViolation>,
) {
    if !I::holds(before, after) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: TransitionInvariant<S>,
    I2: TransitionInvariant<S>,
{
    fn check_all(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(before, after, &mut violations);
        check_one::<S, I2>(before, after, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: TransitionInvariant<S>,
    I2: TransitionInvariant<S>,
    I3: TransitionInvariant<S>,
{
    fn check_all(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(before, after, &mut violations);
        check_one::<S, I2>(before, after, &mut violations);
        check_one::<S, I3>(before, after, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant the engine maintains.
pub type EngineInvariants = (SingleCellChange, AlternatingTurn, MonotonicOutcome);

/// Checks [`EngineInvariants`] for one transition of a [`GameState`].
pub fn check_transition(
    before: &GameState,
    after: &GameState,
) -> Result<(), Vec<InvariantViolation>> {
    EngineInvariants::check_all(before, after)
}
