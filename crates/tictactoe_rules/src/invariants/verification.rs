//! Bounded model checking of the engine with Kani.
//!
//! These harnesses check that invariants hold for every state reachable
//! through arbitrary (including out-of-range) move requests.

#[cfg(kani)]
mod proofs {
    use crate::{InvariantSet, TicTacToeInvariants, apply_move, initial_state};

    /// Any two move requests from the start leave a consistent state.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_invariants_after_two_requests() {
        let mut state = initial_state();
        for _ in 0..2 {
            let row: usize = kani::any();
            let col: usize = kani::any();
            state = apply_move(state, row, col);
        }

        assert!(
            TicTacToeInvariants::check_all(&state).is_ok(),
            "TicTacToeInvariants violated"
        );
    }

    /// Rejected requests never change the state.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_out_of_range_is_noop() {
        let row: usize = kani::any();
        let col: usize = kani::any();
        kani::assume(row > 2 || col > 2);

        let state = initial_state();
        assert_eq!(apply_move(state, row, col), state);
    }
}
