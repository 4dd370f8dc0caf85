//! Win detection and outcome classification for tic-tac-toe.

use super::super::{Board, GameStatus, Occupant, Player, Position};
use super::draw::is_full;
use tracing::{instrument, trace};

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if `player` holds every cell of some line.
pub fn has_line(board: &Board, player: Player) -> bool {
    let mark = Occupant::Taken(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Classifies the board right after `last_mover` placed a mark.
///
/// Only `last_mover`'s lines are examined: a single new mark cannot complete
/// a line for the other player. A win takes precedence over a full board.
#[instrument(level = "trace", skip(board))]
pub fn classify(board: &Board, last_mover: Player) -> GameStatus {
    let status = if has_line(board, last_mover) {
        GameStatus::Won(last_mover)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::Ongoing
    };
    trace!(?status, "Classified board");
    status
}

/// Scans all lines for both players.
///
/// Returns `Some(player)` for the first player found holding a complete line.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let occ = board.get(a);
        if occ == board.get(b) && occ == board.get(c) {
            if let Some(player) = occ.player() {
                return Some(player);
            }
        }
    }
    None
}
