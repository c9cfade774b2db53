//! Status line text shared by the TUI and the replay printer.

use xmixdrix_tictactoe::{GameState, Outcome, display_message};

/// Whose turn it is while the game runs, the result message afterwards.
pub fn status_line(state: &GameState) -> String {
    match state.outcome() {
        Outcome::InProgress => format!("Player {}'s turn", state.current_player()),
        Outcome::Win(_) | Outcome::Draw => display_message(state).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xmixdrix_tictactoe::{apply_move, reset};

    #[test]
    fn test_status_follows_turn_then_result() {
        let mut state = reset();
        assert_eq!(status_line(&state), "Player X's turn");
        state = apply_move(&state, 0);
        assert_eq!(status_line(&state), "Player O's turn");
        for index in [3, 1, 4, 2] {
            state = apply_move(&state, index);
        }
        assert_eq!(status_line(&state), "The winner is X!");
    }
}
