//! Turn parity invariant: the player to move follows from the mark counts.

use super::super::{GameState, Player};
use super::Invariant;
use tracing::warn;

/// Invariant: `current_player` agrees with the board.
///
/// While ongoing, X is to move exactly when both players have the same number
/// of marks. Once terminal, `current_player` is frozen at the last mover, who
/// is X exactly when X has more marks.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Player::X);
        let o_count = state.board().count(Player::O);

        let expected = if state.status().is_terminal() {
            if x_count > o_count { Player::X } else { Player::O }
        } else if x_count == o_count {
            Player::X
        } else {
            Player::O
        };

        let valid = state.current_player() == expected;
        if !valid {
            warn!(
                ?expected,
                actual = ?state.current_player(),
                "Turn parity violated"
            );
        }
        valid
    }

    fn description() -> &'static str {
        "Player to move (or last mover, once over) matches the mark counts"
    }
}
