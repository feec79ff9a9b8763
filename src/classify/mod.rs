//! Commit message classification.
//!
//! Entry operations for scoring commit messages with a pre-trained
//! text classification model. Range operations extract messages from a
//! repository first; the batch and single operations classify directly.

use std::path::Path;

use anyhow::Result;
use tracing::{error, info};

pub mod config;
pub mod error;
pub mod model;

pub use config::ClassifierConfig;
pub use error::ClassifyError;
pub use model::IntentModel;

use crate::data::ClassifiedMessage;
use crate::git::{DateRange, GitRepository};

/// Classifies commit messages selected by commit date.
///
/// `start` and `end` are optional `YYYY-MM-DD` strings; commits are
/// retained when their timestamp is strictly between the bounds.
/// Returns `None` when the range selects no commits.
pub fn classify_by_date(
    repo_path: &Path,
    start: Option<&str>,
    end: Option<&str>,
    model: Option<&Path>,
    config: &ClassifierConfig,
) -> Result<Option<Vec<ClassifiedMessage>>> {
    let range = DateRange::from_bounds(start, end)?;
    let repo = GitRepository::open_at(repo_path)?;
    let messages = repo.messages_in_date_range(&range)?;

    classify_messages(messages, model, config)
}

/// Classifies commit messages selected by tag range.
///
/// Selects commits reachable from `end_tag` (or the main branch head
/// when absent) but not from `start_tag`. Returns `None` when the
/// range selects no commits.
pub fn classify_by_tag(
    repo_path: &Path,
    start_tag: &str,
    end_tag: Option<&str>,
    model: Option<&Path>,
    config: &ClassifierConfig,
) -> Result<Option<Vec<ClassifiedMessage>>> {
    let repo = GitRepository::open_at(repo_path)?;
    let messages = repo.messages_between_tags(start_tag, end_tag)?;

    classify_messages(messages, model, config)
}

/// Classifies an ordered batch of commit messages.
///
/// Newlines are removed from each message before scoring. An explicit
/// model path that does not exist falls back to the configured default.
/// Returns one record per input message, in input order, or `None` for
/// an empty batch.
pub fn classify_messages(
    messages: Vec<String>,
    model: Option<&Path>,
    config: &ClassifierConfig,
) -> Result<Option<Vec<ClassifiedMessage>>> {
    if messages.is_empty() {
        error!("No commits found!");
        return Ok(None);
    }

    let commits: Vec<String> = messages.into_iter().map(|m| strip_newlines(&m)).collect();

    let model_path = config.resolve_or_default(model);
    info!("Model path: {}", model_path.display());
    let classifier = IntentModel::load(&model_path)?;

    let mut results = Vec::with_capacity(commits.len());
    for message in commits {
        let label = classifier.predict_raw(&message)?;
        results.push(ClassifiedMessage { message, label });
    }

    info!("{} commits classified", results.len());
    Ok(Some(results))
}

/// Classifies a single commit message, returning the plain label.
///
/// The message is lowercased before scoring and the model's internal
/// label prefix is stripped from the result. Unlike the batch path, an
/// explicit model path that does not exist is a hard failure
/// ([`ClassifyError::ModelNotFound`]). Returns `None` for an empty
/// message.
pub fn classify_message(
    message: &str,
    model: Option<&Path>,
    config: &ClassifierConfig,
) -> Result<Option<String>> {
    if message.is_empty() {
        error!("Please enter a commit message");
        return Ok(None);
    }

    let model_path = config.resolve_strict(model)?;
    info!("Model path: {}", model_path.display());
    let classifier = IntentModel::load(&model_path)?;

    let label = classifier.predict_label(&message.to_lowercase())?;
    info!("Label: {label}");

    Ok(Some(label))
}

/// Removes newline characters from a message.
pub(crate) fn strip_newlines(message: &str) -> String {
    message.replace('\n', "")
}
