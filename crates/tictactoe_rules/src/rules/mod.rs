//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from board
//! storage so the engine and the invariant checks can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, classify, has_line, winner};
