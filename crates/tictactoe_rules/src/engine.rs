//! State transitions for tic-tac-toe.
//!
//! Every function here is pure: states and boards go in by value and new ones
//! come out. Invalid requests never fail loudly; [`apply_move`] hands the input
//! back unchanged and [`try_apply_move`] says why.

use super::action::MoveError;
use super::contracts::LegalMove;
use super::rules::classify;
use super::{Board, GameState, Player, Position};
use tracing::{debug, instrument};

#[cfg(debug_assertions)]
use super::contracts::{Contract, MoveContract};

/// Returns a 3x3 board of empty cells.
pub fn empty_board() -> Board {
    Board::new()
}

/// Returns `board` with `player`'s mark at `(row, col)`.
///
/// The caller guarantees the cell is empty. Coordinates off the board leave
/// the board unchanged.
#[must_use]
pub fn with_move(board: Board, row: usize, col: usize, player: Player) -> Board {
    match Position::from_coords(row, col) {
        Some(pos) => board.with_move(pos, player),
        None => board,
    }
}

/// Returns the starting state: empty board, X to move, ongoing.
pub fn initial_state() -> GameState {
    GameState::new()
}

/// Returns a fresh starting state, discarding whatever came before.
#[instrument]
pub fn reset() -> GameState {
    debug!("Resetting game");
    initial_state()
}

/// Applies the current player's mark at `(row, col)`.
///
/// # Errors
///
/// - [`MoveError::GameOver`] if the game has already ended
/// - [`MoveError::OutOfBounds`] if `row` or `col` is not in `0..3`
/// - [`MoveError::CellOccupied`] if the cell is taken
/// - [`MoveError::InvariantViolation`] if a postcondition fails (debug builds)
#[instrument(skip(state), fields(player = ?state.current_player(), status = ?state.status()))]
pub fn try_apply_move(state: GameState, row: usize, col: usize) -> Result<GameState, MoveError> {
    let action = LegalMove::check(&state, row, col)?;
    let mover = action.player;

    let board = state.board().with_move(action.position, mover);
    let status = classify(&board, mover);
    let next_player = if status.is_terminal() {
        mover
    } else {
        mover.opponent()
    };
    let next = GameState::from_parts(board, next_player, status);

    #[cfg(debug_assertions)]
    MoveContract::post(&state, &next)?;

    debug!(%action, ?status, "Move applied");
    Ok(next)
}

/// Applies the current player's mark at `(row, col)`, or returns `state`
/// unchanged if the move is not allowed.
///
/// A rejected move is indistinguishable from the input state; use
/// [`try_apply_move`] to learn the reason.
#[instrument(skip(state))]
pub fn apply_move(state: GameState, row: usize, col: usize) -> GameState {
    try_apply_move(state, row, col).unwrap_or_else(|error| {
        debug!(%error, "Move rejected");
        state
    })
}

/// Empty positions the current player may take; none once the game is over.
#[instrument(skip(state))]
pub fn legal_moves(state: &GameState) -> Vec<Position> {
    if state.status().is_terminal() {
        Vec::new()
    } else {
        state.board().empty_positions()
    }
}
