//! Pure tic-tac-toe rules for X Mix Drix.
//!
//! The engine is a set of functions from `(GameState, input)` to the next
//! `GameState`. It holds no state of its own; the front end owns the single
//! live [`GameState`] and swaps it for whatever [`apply_move`] or [`reset`]
//! return.
//!
//! ```
//! use xmixdrix_tictactoe::{Outcome, Player, apply_move, display_message, reset};
//!
//! let state = [0, 3, 1, 4, 2]
//!     .into_iter()
//!     .fold(reset(), |state, index| apply_move(&state, index));
//!
//! assert_eq!(state.outcome(), Outcome::Win(Player::X));
//! assert_eq!(display_message(&state), "The winner is X!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use engine::{apply_move, display_message, reset, try_apply_move};
pub use error::MoveError;
pub use position::Position;
pub use types::{Board, Cell, GameState, Outcome, Player};
