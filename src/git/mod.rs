//! Git repository access and commit message extraction.

use std::path::PathBuf;

use thiserror::Error;

pub mod range;
pub mod repository;

pub use range::DateRange;
pub use repository::GitRepository;

/// Git-specific errors.
#[derive(Error, Debug)]
pub enum GitError {
    /// The target path does not contain a `.git` directory.
    #[error("no git repository found at {}", .0.display())]
    RepositoryNotFound(PathBuf),
}

// Note: anyhow already has a blanket impl for thiserror::Error types
