//! Mark balance invariant: X leads O by zero or one mark.

use super::super::{GameState, Player};
use super::Invariant;
use tracing::warn;

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X always moves first and turns strictly alternate.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Player::X);
        let o_count = state.board().count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}
