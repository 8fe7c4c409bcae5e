//! Command-line interface for strictly_river.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_river::Entity;

/// Default location of the front-end configuration file.
pub const DEFAULT_CONFIG: &str = "strictly_river.toml";

/// Strictly River - the farmer's river-crossing puzzle
#[derive(Parser, Debug)]
#[command(name = "strictly_river")]
#[command(about = "Ferry a tiger, sheep, snake, chicken and apple across the river", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the puzzle in the terminal
    Play {
        /// Path to the configuration file (defaults are used if it doesn't exist)
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },

    /// Run the scripted solution and print the crossing history
    Solve {
        /// Print the final puzzle as JSON instead of the history
        #[arg(long)]
        json: bool,
    },

    /// Judge a bank holding the given entities
    Evaluate {
        /// Entities on the bank (farmer, tiger, sheep, snake, chicken, apple)
        #[arg(required = true)]
        entities: Vec<Entity>,
    },
}
