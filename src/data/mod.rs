//! Data processing and serialization.

use serde::{Deserialize, Serialize};

pub mod yaml;

pub use yaml::{from_yaml, to_yaml};

/// A classified commit message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedMessage {
    /// The normalized commit message that was scored.
    pub message: String,
    /// The top-1 label the model assigned to the message.
    #[serde(rename = "labels_predicted")]
    pub label: String,
}

/// Complete classification report output structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Version information for the commit-intent tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<VersionInfo>,
    /// Classified commit messages in traversal order, newest-first.
    pub commits: Vec<ClassifiedMessage>,
}

/// Version information for tools and environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Version of the commit-intent tool.
    pub commit_intent: String,
}

impl ClassificationReport {
    /// Builds a report for the given classification results.
    pub fn new(commits: Vec<ClassifiedMessage>) -> Self {
        Self {
            versions: Some(VersionInfo {
                commit_intent: crate::VERSION.to_string(),
            }),
            commits,
        }
    }
}
