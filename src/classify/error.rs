//! Classification-specific error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Classification-specific errors.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// An explicitly requested model file does not exist.
    #[error("classification model not found at {}", .0.display())]
    ModelNotFound(PathBuf),
}

// Note: anyhow already has a blanket impl for thiserror::Error types
