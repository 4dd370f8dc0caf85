//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of a single cell.
///
/// Kept apart from [`Player`] so that an "empty" player can never be the one
/// to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Occupant {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds this player's mark.
    Taken(Player),
}

impl Occupant {
    /// Returns the player holding the cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Occupant::Empty => None,
            Occupant::Taken(player) => Some(player),
        }
    }

    /// Checks if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Occupant::Empty
    }

    /// Glyph for rendering: `"X"`, `"O"`, or the empty string.
    pub fn glyph(self) -> &'static str {
        match self {
            Occupant::Empty => "",
            Occupant::Taken(Player::X) => "X",
            Occupant::Taken(Player::O) => "O",
        }
    }
}

impl std::fmt::Display for Occupant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// 3x3 tic-tac-toe board.
///
/// A `Copy` value: placing a mark produces a new board and leaves the
/// original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Occupant; 9],
}

impl Board {
    /// Side length of the board.
    pub const SIZE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Occupant::Empty; 9],
        }
    }

    /// Gets the occupant at the given position.
    pub fn get(&self, pos: Position) -> Occupant {
        self.cells[pos.to_index()]
    }

    /// Gets the occupant at `(row, col)`, or `None` when off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Occupant> {
        Position::from_coords(row, col).map(|pos| self.get(pos))
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    ///
    /// Does not check that the cell was empty; the engine validates that
    /// before calling.
    #[must_use]
    pub fn with_move(mut self, pos: Position, player: Player) -> Self {
        self.cells[pos.to_index()] = Occupant::Taken(player);
        self
    }

    /// Returns all cells as a slice in row-major order.
    pub fn cells(&self) -> &[Occupant; 9] {
        &self.cells
    }

    /// Iterates over the three rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = [Occupant; 3]> + '_ {
        self.cells
            .chunks_exact(Self::SIZE)
            .map(|row| [row[0], row[1], row[2]])
    }

    /// Checks if every cell is taken.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Occupant::Taken(player))
            .count()
    }

    /// Positions that are still empty, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            let glyphs: Vec<&str> = row
                .iter()
                .map(|cell| if cell.is_empty() { " " } else { cell.glyph() })
                .collect();
            write!(f, "{}", glyphs.join("|"))?;
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    Ongoing,
    /// Game ended with this player completing a line.
    Won(Player),
    /// Board filled with no line.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::Ongoing | GameStatus::Draw => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "in progress"),
            GameStatus::Won(player) => write!(f, "{} wins", player),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

/// Complete game state.
///
/// Replaced wholesale on every accepted move; never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move while ongoing; the last mover once the game is over.
    current_player: Player,
    /// Game status.
    status: GameStatus,
}

impl GameState {
    /// Creates the initial state: empty board, X to move, ongoing.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::Ongoing,
        }
    }

    /// Assembles a state from its parts without checking consistency.
    pub(crate) fn from_parts(board: Board, current_player: Player, status: GameStatus) -> Self {
        Self {
            board,
            current_player,
            status,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// One-line summary for a status bar.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::Won(player) => format!("{} Wins!", player),
            GameStatus::Draw => "Draw!".to_string(),
            GameStatus::Ongoing => format!("Current Player: {}", self.current_player),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
