//! Move rejection reasons.

use super::Position;
use derive_more::{Display, Error};

/// Why a move was not applied.
///
/// [`crate::apply_move`] swallows these; [`crate::try_apply_move`] hands
/// them to callers that want to log or show the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Index does not name a cell.
    #[display("Index {} is outside the board (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The game has already been decided.
    #[display("Game is already over")]
    GameOver,
}
