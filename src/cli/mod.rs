//! CLI interface for commit-intent

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod classify;

/// commit-intent: classify git commit messages
#[derive(Parser)]
#[command(name = "commit-intent")]
#[command(about = "Classify git commit messages with a pre-trained model", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories
#[derive(Subcommand)]
pub enum Commands {
    /// Commit message classification
    Classify(classify::ClassifyCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Classify(classify_cmd) => classify_cmd.execute(),
        }
    }
}
