//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (all cells taken).
///
/// A full board with no line for the last mover is a draw.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
