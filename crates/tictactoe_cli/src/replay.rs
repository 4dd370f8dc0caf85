//! Replays a move script against the engine and reports each step.

use crate::script::MoveScript;
use serde::{Deserialize, Serialize};
use tictactoe_rules::{GameState, GameStatus, Player, initial_state, try_apply_move};
use tracing::{debug, instrument};

/// Outcome of one move request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Player to move when the request was made.
    pub player: Player,
    /// Why the request was rejected, if it was.
    pub rejected: Option<String>,
    /// Status after the request.
    pub status: GameStatus,
}

impl Step {
    /// True if the engine accepted the move.
    pub fn accepted(&self) -> bool {
        self.rejected.is_none()
    }
}

/// Full record of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    /// One entry per request handled.
    pub steps: Vec<Step>,
    /// State after the last handled request.
    pub state: GameState,
}

impl Replay {
    /// Feeds every request in `script` to the engine in order.
    ///
    /// With `strict`, stops after the first rejected request.
    #[instrument(skip(script), fields(moves = script.moves().len()))]
    pub fn run(script: &MoveScript, strict: bool) -> Self {
        let mut state = initial_state();
        let mut steps = Vec::with_capacity(script.moves().len());

        for &(row, col) in script.moves() {
            let player = state.current_player();
            let rejected = match try_apply_move(state, row, col) {
                Ok(next) => {
                    state = next;
                    None
                }
                Err(error) => {
                    debug!(row, col, %error, "Request rejected");
                    Some(error.to_string())
                }
            };
            let stop = strict && rejected.is_some();
            steps.push(Step {
                row,
                col,
                player,
                rejected,
                status: state.status(),
            });
            if stop {
                break;
            }
        }

        Self { steps, state }
    }

    /// First rejected step, if any.
    pub fn first_rejection(&self) -> Option<(usize, &Step)> {
        self.steps
            .iter()
            .enumerate()
            .find(|(_, step)| !step.accepted())
            .map(|(i, step)| (i + 1, step))
    }

    /// Move log, board and status line as plain text.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (i, step) in self.steps.iter().enumerate() {
            let verdict = match &step.rejected {
                None => "ok".to_string(),
                Some(reason) => format!("rejected: {}", reason),
            };
            out.push_str(&format!(
                "{}. {} -> ({}, {}): {}\n",
                i + 1,
                step.player,
                step.row,
                step.col,
                verdict
            ));
        }
        out.push('\n');
        out.push_str(&self.state.board().to_string());
        out.push_str("\n\n");
        out.push_str(&self.state.status_line());
        out
    }
}
