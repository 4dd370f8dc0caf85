//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts state correctness as preconditions and postconditions in the
//! Hoare style: `{P} action {Q}`.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::{GameState, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions relating the states before and after the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not ended.
pub struct GameOngoing;

impl GameOngoing {
    /// Rejects terminal states.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.status().is_terminal() {
            Err(MoveError::GameOver(state.status()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the requested coordinates name a cell on the board.
pub struct InBounds;

impl InBounds {
    /// Converts raw coordinates into a [`Position`].
    #[instrument]
    pub fn check(row: usize, col: usize) -> Result<Position, MoveError> {
        Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto a taken cell.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.position))
        }
    }
}

/// Composite precondition for a raw `(row, col)` request.
///
/// Checks, in order: game ongoing, coordinates in bounds, then the
/// [`MoveContract`] preconditions for the current player's move. On success
/// returns that move.
pub struct LegalMove;

impl LegalMove {
    /// Validates a request and builds the corresponding move.
    #[instrument(skip(state))]
    pub fn check(state: &GameState, row: usize, col: usize) -> Result<Move, MoveError> {
        GameOngoing::check(state)?;
        let position = InBounds::check(row, col)?;
        let mov = Move::new(state.current_player(), position);
        MoveContract::pre(state, &mov)?;
        Ok(mov)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is ongoing
/// - Cell is empty
///
/// Postconditions:
/// - Exactly one cell changed, from empty to the mover's mark
/// - All [`TicTacToeInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        GameOngoing::check(state)?;
        CellIsEmpty::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let changed: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|pos| before.board().get(*pos) != after.board().get(*pos))
            .collect();

        let monotonic = match changed.as_slice() {
            [pos] => {
                before.board().is_empty(*pos)
                    && after.board().get(*pos).player() == Some(before.current_player())
            }
            _ => false,
        };
        if !monotonic {
            warn!(?changed, "Move did not place exactly one new mark");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move must place exactly one mark on an empty cell"
                    .to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameStatus, Player, apply_move, initial_state};

    #[test]
    fn test_precondition_empty_cell() {
        let state = initial_state();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&state, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let state = apply_move(initial_state(), 1, 1);
        let action = Move::new(Player::O, Position::Center);
        assert!(matches!(
            MoveContract::pre(&state, &action),
            Err(MoveError::CellOccupied(Position::Center))
        ));
    }

    #[test]
    fn test_precondition_finished_game() {
        let won = [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]
            .into_iter()
            .fold(initial_state(), |state, (row, col)| apply_move(state, row, col));
        let action = Move::new(Player::O, Position::BottomLeft);
        assert_eq!(
            MoveContract::pre(&won, &action),
            Err(MoveError::GameOver(GameStatus::Won(Player::X)))
        );
    }

    #[test]
    fn test_legal_move_goes_through_move_contract() {
        // An occupied cell is caught by the contract's precondition.
        let state = apply_move(initial_state(), 0, 0);
        assert_eq!(
            LegalMove::check(&state, 0, 0),
            Err(MoveError::CellOccupied(Position::TopLeft))
        );
        let mov = LegalMove::check(&state, 2, 2).expect("legal move");
        assert_eq!(mov.player, Player::O);
        assert_eq!(MoveContract::pre(&state, &mov), Ok(()));
    }

    #[test]
    fn test_legal_move_check_order() {
        let over = GameState::from_parts(Board::new(), Player::X, GameStatus::Draw);
        // Game over is reported before bounds.
        assert!(matches!(
            LegalMove::check(&over, 7, 7),
            Err(MoveError::GameOver(GameStatus::Draw))
        ));
        assert_eq!(
            LegalMove::check(&initial_state(), 3, 1),
            Err(MoveError::OutOfBounds { row: 3, col: 1 })
        );
        assert_eq!(
            LegalMove::check(&initial_state(), 2, 0),
            Ok(Move::new(Player::X, Position::BottomLeft))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = initial_state();
        let after = apply_move(before, 1, 1);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let before = apply_move(initial_state(), 1, 1);
        let board = Board::new().with_move(Position::Center, Player::O);
        let after = GameState::from_parts(board, Player::X, GameStatus::Ongoing);
        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_skipped_turn() {
        let before = initial_state();
        let board = Board::new().with_move(Position::Center, Player::X);
        let after = GameState::from_parts(board, Player::X, GameStatus::Ongoing);
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
