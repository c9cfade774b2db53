//! End-to-end checks of the headless replay command.

use xmixdrix::Config;
use xmixdrix::replay::{replay, run};
use xmixdrix_tictactoe::{Outcome, Player};

fn run_text(moves: &[usize]) -> String {
    let mut out = Vec::new();
    run(moves, false, &Config::default(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_draw_reports_tie() {
    let text = run_text(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert!(text.ends_with("Tie!\n"));
}

#[test]
fn test_unfinished_game_reports_turn() {
    let text = run_text(&[4, 0]);
    assert!(text.ends_with("Player X's turn\n"));
}

#[test]
fn test_moves_after_win_ignored() {
    let state = replay(&[0, 3, 1, 4, 2, 5, 8]);
    assert_eq!(state.outcome(), Outcome::Win(Player::X));
    assert!(state.board().is_empty(5));
    assert!(state.board().is_empty(8));
}

#[test]
fn test_json_shape() {
    let mut out = Vec::new();
    run(&[4], true, &Config::default(), &mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["current_player"], "O");
    assert_eq!(json["board"]["cells"][0], "Empty");
    assert_eq!(json["board"]["cells"][4]["Occupied"], "X");
}
