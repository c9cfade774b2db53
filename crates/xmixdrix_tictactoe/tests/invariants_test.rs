//! Every transition of a played-out game keeps the engine invariants.

use xmixdrix_tictactoe::invariants::check_transition;
use xmixdrix_tictactoe::{apply_move, reset};

#[test]
fn test_invariants_hold_through_whole_games() {
    let games: [&[usize]; 4] = [
        &[0, 3, 1, 4, 2, 5, 6],
        &[0, 1, 2, 4, 3, 5, 7, 6, 8, 0],
        &[4, 4, 9, 0, 8, 2, 6, 3, 5, 1, 7],
        &[8, 7, 6, 5, 4, 3, 2, 1, 0],
    ];

    for moves in games {
        let mut state = reset();
        for &index in moves {
            let next = apply_move(&state, index);
            assert_eq!(check_transition(&state, &next), Ok(()), "moves {:?}", moves);
            state = next;
        }
    }
}
