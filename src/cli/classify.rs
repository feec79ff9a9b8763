//! Classification CLI commands.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::classify::{self, ClassifierConfig};
use crate::data::{self, ClassificationReport};

/// Classification operations.
#[derive(Parser)]
pub struct ClassifyCommand {
    /// Classification subcommand to execute.
    #[command(subcommand)]
    pub command: ClassifySubcommands,
}

/// Classification subcommands.
#[derive(Subcommand)]
pub enum ClassifySubcommands {
    /// Classifies commits selected by commit date and outputs a YAML report.
    Date(DateCommand),
    /// Classifies commits selected by tag range and outputs a YAML report.
    Tag(TagCommand),
    /// Classifies a single commit message and prints the label.
    Message(MessageCommand),
}

/// Date range classification options.
#[derive(Parser)]
pub struct DateCommand {
    /// Path to the repository working directory.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,
    /// Earliest commit date to include (YYYY-MM-DD, exclusive).
    #[arg(long)]
    pub start: Option<String>,
    /// Latest commit date to include (YYYY-MM-DD, exclusive).
    #[arg(long)]
    pub end: Option<String>,
    /// Path to a serialized classification model.
    #[arg(long)]
    pub model: Option<PathBuf>,
}

/// Tag range classification options.
#[derive(Parser)]
pub struct TagCommand {
    /// Tag that opens the range (exclusive).
    #[arg(value_name = "START_TAG")]
    pub start_tag: String,
    /// Tag that closes the range; defaults to the main branch head.
    #[arg(value_name = "END_TAG")]
    pub end_tag: Option<String>,
    /// Path to the repository working directory.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,
    /// Path to a serialized classification model.
    #[arg(long)]
    pub model: Option<PathBuf>,
}

/// Single message classification options.
#[derive(Parser)]
pub struct MessageCommand {
    /// The commit message to classify.
    #[arg(value_name = "MESSAGE")]
    pub message: String,
    /// Path to a serialized classification model.
    #[arg(long)]
    pub model: Option<PathBuf>,
}

impl ClassifyCommand {
    /// Executes the classify command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            ClassifySubcommands::Date(date_cmd) => date_cmd.execute(),
            ClassifySubcommands::Tag(tag_cmd) => tag_cmd.execute(),
            ClassifySubcommands::Message(message_cmd) => message_cmd.execute(),
        }
    }
}

impl DateCommand {
    /// Executes the date range classification command.
    pub fn execute(self) -> Result<()> {
        let config = ClassifierConfig::from_environment()?;

        let results = classify::classify_by_date(
            &self.repo,
            self.start.as_deref(),
            self.end.as_deref(),
            self.model.as_deref(),
            &config,
        )?;

        print_report(results)
    }
}

impl TagCommand {
    /// Executes the tag range classification command.
    pub fn execute(self) -> Result<()> {
        let config = ClassifierConfig::from_environment()?;

        let results = classify::classify_by_tag(
            &self.repo,
            &self.start_tag,
            self.end_tag.as_deref(),
            self.model.as_deref(),
            &config,
        )?;

        print_report(results)
    }
}

impl MessageCommand {
    /// Executes the single message classification command.
    pub fn execute(self) -> Result<()> {
        let config = ClassifierConfig::from_environment()?;

        if let Some(label) =
            classify::classify_message(&self.message, self.model.as_deref(), &config)?
        {
            println!("{label}");
        }

        Ok(())
    }
}

/// Prints classification results as a YAML report, or nothing when the
/// selection was empty.
fn print_report(results: Option<Vec<crate::data::ClassifiedMessage>>) -> Result<()> {
    if let Some(commits) = results {
        let report = ClassificationReport::new(commits);
        let yaml_output = data::to_yaml(&report)?;
        println!("{yaml_output}");
    }

    Ok(())
}
