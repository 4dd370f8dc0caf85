//! First-class move types for tic-tac-toe.
//!
//! A move is the intent of a player to mark a cell. It can be validated
//! independently of being applied.

use super::{GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Why a move request was not applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column outside `0..3`.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell at the position is already taken.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already ended.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MoveError::OutOfBounds { row: 3, col: 0 };
        assert_eq!(err.to_string(), "Cell (3, 0) is off the board");

        let err = MoveError::CellOccupied(Position::Center);
        assert!(err.to_string().contains("occupied"));

        let err = MoveError::GameOver(GameStatus::Won(Player::X));
        assert_eq!(err.to_string(), "Game is already over (X wins)");
    }

    #[test]
    fn test_move_display() {
        let mov = Move::new(Player::O, Position::TopLeft);
        assert_eq!(mov.to_string(), "O -> Top-left (0, 0)");
    }
}
