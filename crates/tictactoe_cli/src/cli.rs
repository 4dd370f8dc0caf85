//! Command-line interface for the tic-tac-toe replay driver.

use clap::{Parser, Subcommand, ValueEnum};

/// Replays tic-tac-toe moves against the rules engine
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Replay tic-tac-toe moves and report the resulting state", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Stop at the first rejected move and exit with an error
    #[arg(long, global = true)]
    pub strict: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay moves given on the command line
    Play {
        /// Moves as `ROW,COL` (0-2 each) or a cell label such as `center`
        #[arg(required = true)]
        moves: Vec<String>,
    },

    /// Replay moves from a TOML script
    Script {
        /// Path to a file containing `moves = [[row, col], ...]`
        path: std::path::PathBuf,
    },
}

/// How the replay report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Move log, board and status line
    Text,
    /// Pretty-printed JSON
    Json,
}
