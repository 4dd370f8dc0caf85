//! Tic-tac-toe replay driver.
//!
//! Feeds move requests to the rules engine one at a time and prints what
//! happened.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod replay;
mod script;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use replay::Replay;
use script::MoveScript;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let script = match &cli.command {
        Command::Play { moves } => MoveScript::from_tokens(moves)?,
        Command::Script { path } => MoveScript::from_file(path)?,
    };

    run(&script, cli.format, cli.strict)
}

/// Replays the script and prints the report in the chosen format.
#[instrument(skip(script))]
fn run(script: &MoveScript, format: OutputFormat, strict: bool) -> Result<()> {
    let replay = Replay::run(script, strict);
    info!(steps = replay.steps.len(), status = ?replay.state.status(), "Replay finished");

    match format {
        OutputFormat::Text => println!("{}", replay.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&replay)?),
    }

    if strict && let Some((index, step)) = replay.first_rejection() {
        bail!(
            "Move {} ({}, {}) rejected: {}",
            index,
            step.row,
            step.col,
            step.rejected.as_deref().unwrap_or_default()
        );
    }

    Ok(())
}
