//! Tic-tac-toe rules engine.
//!
//! Pure value types for the board and game state, and pure functions that
//! classify outcomes and compute the next state. Nothing here renders a board
//! or asks a player for input; an interaction layer calls in and draws what
//! comes back.
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{GameStatus, Player, apply_move, initial_state};
//!
//! let mut state = initial_state();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     state = apply_move(state, row, col);
//! }
//! assert_eq!(state.status(), GameStatus::Won(Player::X));
//!
//! // Further moves are ignored.
//! assert_eq!(apply_move(state, 2, 0), state);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod game;
mod invariants;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{CellIsEmpty, Contract, GameOngoing, InBounds, LegalMove, MoveContract};
pub use engine::{
    apply_move, empty_board, initial_state, legal_moves, reset, try_apply_move, with_move,
};
pub use game::Game;
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant, StatusConsistentInvariant,
    TicTacToeInvariants, TurnParityInvariant,
};
pub use position::Position;
pub use rules::{LINES, classify, has_line, is_full, winner};
pub use types::{Board, GameState, GameStatus, Occupant, Player};
