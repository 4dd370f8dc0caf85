//! Status consistency invariant: the stored status matches a full rescan.

use super::super::rules::{has_line, winner};
use super::super::{GameState, GameStatus};
use super::Invariant;
use tracing::warn;

/// Invariant: the status agrees with the board.
///
/// - `Won(p)`: `p` holds a line and the opponent does not.
/// - `Draw`: board full, no line for anyone.
/// - `Ongoing`: no line for anyone, at least one empty cell.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let valid = match state.status() {
            GameStatus::Won(player) => {
                has_line(board, player) && !has_line(board, player.opponent())
            }
            GameStatus::Draw => board.is_full() && winner(board).is_none(),
            GameStatus::Ongoing => !board.is_full() && winner(board).is_none(),
        };
        if !valid {
            warn!(status = ?state.status(), "Status inconsistent with board");
        }
        valid
    }

    fn description() -> &'static str {
        "Status agrees with the lines and fill level of the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player, Position, apply_move, initial_state};

    #[test]
    fn test_initial_state_holds() {
        assert!(StatusConsistentInvariant::holds(&initial_state()));
    }

    #[test]
    fn test_draw_holds() {
        let state = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ]
        .into_iter()
        .fold(initial_state(), |state, (row, col)| apply_move(state, row, col));
        assert_eq!(state.status(), GameStatus::Draw);
        assert!(StatusConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_missed_win_violates() {
        let board = Board::new()
            .with_move(Position::TopLeft, Player::X)
            .with_move(Position::TopCenter, Player::X)
            .with_move(Position::TopRight, Player::X);
        let state = GameState::from_parts(board, Player::O, GameStatus::Ongoing);
        assert!(!StatusConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_phantom_winner_violates() {
        let board = Board::new().with_move(Position::Center, Player::X);
        let state = GameState::from_parts(board, Player::X, GameStatus::Won(Player::X));
        assert!(!StatusConsistentInvariant::holds(&state));
    }
}
