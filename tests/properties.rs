//! Property tests over boards reached by arbitrary move sequences

use noughts::{
    Minimax,
    minimax::{LOSS_SCORE, WIN_SCORE},
    tictactoe::{BoardState, Cell, LineAnalyzer, Outcome, Player},
};
use proptest::prelude::*;

/// Play `positions` alternately from X, skipping rejected ones and stopping
/// once the game is over.
fn replay(positions: &[usize]) -> BoardState {
    let mut state = BoardState::new();
    let mut player = Player::X;
    for &position in positions {
        if state.is_terminal() {
            break;
        }
        if state.place_mark(position, player).is_ok() {
            player = player.opponent();
        }
    }
    state
}

fn positions() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..=10, 0..16)
}

proptest! {
    #[test]
    fn empty_positions_complement_move_count(moves in positions()) {
        let state = replay(&moves);
        let empty = state.empty_positions();
        prop_assert_eq!(empty.len(), 9 - state.move_count());
        prop_assert!(empty.windows(2).all(|w| w[0] < w[1]));
        for position in empty {
            prop_assert_eq!(state.get(position), Some(Cell::Empty));
        }
    }

    #[test]
    fn rejected_placement_leaves_board_unchanged(moves in positions(), position in 0usize..=10) {
        let state = replay(&moves);
        let mut attempt = state;
        if attempt.place_mark(position, Player::O).is_err() {
            prop_assert_eq!(attempt, state);
        } else {
            prop_assert_eq!(attempt.move_count(), state.move_count() + 1);
        }
    }

    #[test]
    fn draw_means_full_board_without_line(moves in positions()) {
        let state = replay(&moves);
        let no_line = LineAnalyzer::line_winner(state.cells()).is_none();
        prop_assert_eq!(
            state.evaluate_outcome() == Outcome::Draw,
            state.is_full() && no_line
        );
    }

    #[test]
    fn mutating_a_copy_keeps_the_original(moves in positions()) {
        let original = replay(&moves);
        let snapshot = original.encode();
        let mut copy = original;
        if let Some(&position) = copy.empty_positions().first() {
            copy.place_mark(position, Player::X).unwrap();
        }
        prop_assert_eq!(original.encode(), snapshot);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn best_move_is_legal_and_scores_bounded(moves in prop::collection::vec(1usize..=9, 3..9)) {
        let state = replay(&moves);
        prop_assume!(!state.is_terminal());
        let mut search = Minimax::new(Player::X);
        let best = search.best_move(&state).unwrap();
        prop_assert_eq!(state.get(best), Some(Cell::Empty));
        for (_, score) in search.evaluate_moves(&state).unwrap() {
            prop_assert!((LOSS_SCORE..=WIN_SCORE).contains(&score));
        }
    }
}
