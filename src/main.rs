//! Strictly River - CLI entry point.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, DEFAULT_CONFIG};
use std::path::PathBuf;
use strictly_river::{evaluate_occupants, Entity, Occupants, Puzzle, PuzzleConfig, SOLUTION};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        None => run_play(PathBuf::from(DEFAULT_CONFIG)),
        Some(Command::Play { config }) => run_play(config),
        Some(Command::Solve { json }) => run_solve(json),
        Some(Command::Evaluate { entities }) => run_evaluate(entities),
    }
}

/// Headless commands log to stderr.
fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive terminal puzzle
fn run_play(config_path: PathBuf) -> Result<()> {
    let config = PuzzleConfig::load_or_default(&config_path)?;
    tui::run_tui(config)
}

/// Replay the scripted solution and print the outcome
#[instrument]
fn run_solve(json: bool) -> Result<()> {
    init_stderr_tracing();
    info!("Replaying scripted solution");

    let puzzle = Puzzle::replay(&SOLUTION)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&puzzle)?);
    } else {
        for record in puzzle.log().records() {
            println!("{}", record);
        }
        println!("{}", puzzle.outcome());
    }

    Ok(())
}

/// Judge one bank and print the verdict
#[instrument]
fn run_evaluate(entities: Vec<Entity>) -> Result<()> {
    init_stderr_tracing();

    let occupants: Occupants = entities.into_iter().collect();
    let status = evaluate_occupants(occupants);
    info!(%occupants, safe = status.is_safe(), "Bank evaluated");

    let verdict = if status.is_safe() { "safe" } else { "UNSAFE" };
    println!("{}: {} ({})", occupants, verdict, status);

    Ok(())
}
