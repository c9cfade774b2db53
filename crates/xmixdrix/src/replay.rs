//! Headless replay: feed a move list through the engine and print the result.

use std::io::Write;

use anyhow::Result;
use tracing::{info, instrument};
use xmixdrix_tictactoe::{Board, Cell, GameState, apply_move, reset};

use crate::config::Config;
use crate::status::status_line;

/// Plays `moves` from a fresh game. Rejected moves are no-ops, exactly as a
/// stray tap would be.
#[instrument]
pub fn replay(moves: &[usize]) -> GameState {
    moves
        .iter()
        .fold(reset(), |state, &index| apply_move(&state, index))
}

/// Formats the board with the configured marks, empty cells numbered 1-9.
pub fn format_board(board: &Board, config: &Config) -> String {
    let mut result = String::new();
    for (i, cell) in board.cells().iter().enumerate() {
        if i % 3 == 0 && i > 0 {
            result.push_str("\n---+---+---\n");
        }
        match cell {
            Cell::Occupied(player) => result.push_str(&format!(" {} ", config.mark(*player))),
            Cell::Empty => result.push_str(&format!(" {} ", i + 1)),
        }
        if i % 3 < 2 {
            result.push('|');
        }
    }
    result
}

/// Runs the replay command, writing text or JSON to `out`.
#[instrument(skip(config, out))]
pub fn run(moves: &[usize], json: bool, config: &Config, out: &mut impl Write) -> Result<()> {
    let state = replay(moves);
    info!(outcome = ?state.outcome(), "Replay finished");

    if json {
        serde_json::to_writer_pretty(&mut *out, &state)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", format_board(state.board(), config))?;
        writeln!(out)?;
        writeln!(out, "{}", status_line(&state))?;
    }
    Ok(())
}
