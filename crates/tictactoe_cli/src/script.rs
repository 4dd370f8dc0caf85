//! Move scripts: the list of requests to replay.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_rules::Position;
use tracing::{debug, info, instrument};

/// Error loading or parsing a move script, with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Ordered move requests as raw `(row, col)` pairs.
///
/// Requests are not validated here; the engine decides what to accept.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveScript {
    /// Requests in play order.
    moves: Vec<(usize, usize)>,
}

impl MoveScript {
    /// Creates a script from coordinate pairs.
    pub fn new(moves: Vec<(usize, usize)>) -> Self {
        Self { moves }
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        debug!("Loading move script");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::new(format!("Failed to read script: {}", e)))?;

        let script: Self = toml::from_str(&content)
            .map_err(|e| ScriptError::new(format!("Failed to parse script: {}", e)))?;

        info!(moves = script.moves.len(), "Script loaded");
        Ok(script)
    }

    /// Builds a script from command-line tokens.
    #[instrument]
    pub fn from_tokens(tokens: &[String]) -> Result<Self, ScriptError> {
        let moves = tokens
            .iter()
            .map(|token| parse_move(token))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(moves))
    }
}

/// Parses `ROW,COL` or a cell label into raw coordinates.
///
/// Coordinates outside the board are passed through so the engine can
/// reject them.
#[instrument]
pub fn parse_move(token: &str) -> Result<(usize, usize), ScriptError> {
    if let Some(pos) = Position::from_label(token) {
        return Ok((pos.row(), pos.col()));
    }

    let (row, col) = token.split_once(',').ok_or_else(|| {
        ScriptError::new(format!(
            "Expected ROW,COL or a cell label, got '{}'",
            token
        ))
    })?;

    let parse = |part: &str| {
        part.trim().parse::<usize>().map_err(|e| {
            ScriptError::new(format!(
                "Invalid coordinate '{}' in '{}': {}",
                part, token, e
            ))
        })
    };

    Ok((parse(row)?, parse(col)?))
}
