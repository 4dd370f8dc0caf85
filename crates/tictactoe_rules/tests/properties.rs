//! Property tests for the rules engine.

use proptest::prelude::*;
use strum::IntoEnumIterator;
use tictactoe_rules::{
    GameState, GameStatus, InvariantSet, Player, Position, TicTacToeInvariants, apply_move,
    classify, initial_state, legal_moves, reset, try_apply_move,
};

/// Raw move requests, including some off the board.
fn requests() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..5, 0usize..5), 0..20)
}

/// Orders in which all nine cells could be requested.
fn cell_orders() -> impl Strategy<Value = Vec<Position>> {
    Just(Position::ALL.to_vec()).prop_shuffle()
}

fn states_along(moves: &[(usize, usize)]) -> Vec<GameState> {
    let mut states = vec![initial_state()];
    for &(row, col) in moves {
        let last = *states.last().expect("at least the initial state");
        states.push(apply_move(last, row, col));
    }
    states
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Accepted moves alternate X, O, X, ... until the game ends.
    #[test]
    fn turns_alternate(order in cell_orders()) {
        let mut state = initial_state();
        let mut expected = Player::X;
        for pos in order {
            if state.status().is_terminal() {
                break;
            }
            prop_assert_eq!(state.current_player(), expected);
            let next = apply_move(state, pos.row(), pos.col());
            prop_assert_eq!(next.board().get(pos).player(), Some(expected));
            state = next;
            expected = expected.opponent();
        }
        prop_assert!(state.status().is_terminal());
    }

    /// Invalid requests hand back the input state.
    #[test]
    fn invalid_requests_are_noops(moves in requests(), row in 0usize..8, col in 0usize..8) {
        let state = states_along(&moves).pop().expect("non-empty");
        let occupied = Position::from_coords(row, col)
            .map(|pos| !state.board().is_empty(pos))
            .unwrap_or(false);
        let invalid = row > 2 || col > 2 || occupied || state.status().is_terminal();

        let after = apply_move(state, row, col);
        if invalid {
            prop_assert_eq!(after, state);
            prop_assert!(try_apply_move(state, row, col).is_err());
        } else {
            prop_assert_ne!(after, state);
        }
    }

    /// Every reachable state satisfies the invariant set.
    #[test]
    fn invariants_hold_on_every_reachable_state(moves in requests()) {
        for state in states_along(&moves) {
            prop_assert!(TicTacToeInvariants::check_all(&state).is_ok());
        }
    }

    /// Terminal states stay terminal.
    #[test]
    fn terminal_status_never_reverts(moves in requests()) {
        let states = states_along(&moves);
        for pair in states.windows(2) {
            if pair[0].status().is_terminal() {
                prop_assert_eq!(pair[1], pair[0]);
            }
        }
    }

    /// A ninth mark that completes a line is a win, never a draw.
    #[test]
    fn full_board_outcome_prefers_win(order in cell_orders()) {
        let state = order
            .iter()
            .fold(initial_state(), |state, pos| apply_move(state, pos.row(), pos.col()));
        if state.board().is_full() {
            prop_assert_eq!(
                state.status() == GameStatus::Draw,
                tictactoe_rules::winner(state.board()).is_none()
            );
        }
    }

    /// Classification is a pure function of its arguments.
    #[test]
    fn classify_is_repeatable(moves in requests()) {
        let board = *states_along(&moves).pop().expect("non-empty").board();
        for player in Player::iter() {
            prop_assert_eq!(classify(&board, player), classify(&board, player));
        }
    }

    /// Reset ignores whatever came before.
    #[test]
    fn reset_is_initial_state(moves in requests()) {
        let _ = states_along(&moves);
        prop_assert_eq!(reset(), initial_state());
        prop_assert_eq!(legal_moves(&reset()).len(), 9);
    }
}
