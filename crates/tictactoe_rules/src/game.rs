//! Owned game handle for interaction layers.

use super::engine::{apply_move, legal_moves, reset};
use super::{GameState, Position};
use tracing::instrument;

/// Tic-tac-toe game: the single place a caller keeps its [`GameState`].
///
/// The state only ever changes by being replaced with the result of
/// [`apply_move`] or [`reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Requests a move at `(row, col)` for the player to move.
    ///
    /// Returns `true` if the move was accepted and the state replaced.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: usize, col: usize) -> bool {
        let next = apply_move(self.state, row, col);
        let accepted = next != self.state;
        self.state = next;
        accepted
    }

    /// Requests a move at a named position.
    pub fn play_at(&mut self, pos: Position) -> bool {
        self.play(pos.row(), pos.col())
    }

    /// Starts over from the initial state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = reset();
    }

    /// Positions the player to move may take.
    pub fn legal_moves(&self) -> Vec<Position> {
        legal_moves(&self.state)
    }
}
