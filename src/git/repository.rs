//! Git repository operations

use std::path::Path;

use anyhow::{Context, Result};
use git2::{Repository, Sort};

use crate::git::{DateRange, GitError};

/// Git repository wrapper
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Opens the repository at the given working directory.
    ///
    /// The directory must contain a `.git` subdirectory; otherwise this
    /// fails with [`GitError::RepositoryNotFound`].
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.join(".git").exists() {
            return Err(GitError::RepositoryNotFound(path.to_path_buf()).into());
        }

        let repo = Repository::open(path).context("Failed to open git repository")?;

        Ok(Self { repo })
    }

    /// Collects lowercased commit messages whose timestamps fall strictly
    /// inside the range.
    ///
    /// Walks every commit reachable from HEAD in topological order, so
    /// the result is newest-first.
    pub fn messages_in_date_range(&self, range: &DateRange) -> Result<Vec<String>> {
        let mut walker = self.repo.revwalk().context("Failed to create revwalk")?;
        walker
            .set_sorting(Sort::TOPOLOGICAL)
            .context("Failed to set topological sorting")?;
        walker.push_head().context("Failed to push HEAD")?;

        let mut messages = Vec::new();
        for oid in walker {
            let oid = oid.context("Failed to get commit OID from walker")?;
            let commit = self
                .repo
                .find_commit(oid)
                .context("Failed to find commit")?;

            if range.contains(commit.time().seconds()) {
                messages.push(commit.message().unwrap_or("").to_lowercase());
            }
        }

        Ok(messages)
    }

    /// Collects lowercased messages for commits reachable from `end_tag`
    /// but not from `start_tag`, newest-first.
    ///
    /// When `end_tag` is absent the walk ends at the main branch head.
    /// An unknown tag name is fatal.
    pub fn messages_between_tags(
        &self,
        start_tag: &str,
        end_tag: Option<&str>,
    ) -> Result<Vec<String>> {
        let start = self
            .resolve_tag(start_tag)
            .with_context(|| format!("Failed to resolve tag '{start_tag}'"))?;

        let end = match end_tag {
            Some(tag) => self
                .resolve_tag(tag)
                .with_context(|| format!("Failed to resolve tag '{tag}'"))?,
            None => self.main_branch_head()?,
        };

        let mut walker = self.repo.revwalk().context("Failed to create revwalk")?;
        walker
            .set_sorting(Sort::TOPOLOGICAL)
            .context("Failed to set topological sorting")?;
        walker.push(end).context("Failed to push end commit")?;
        walker.hide(start).context("Failed to hide start commit")?;

        let mut messages = Vec::new();
        for oid in walker {
            let oid = oid.context("Failed to get commit OID from walker")?;
            let commit = self
                .repo
                .find_commit(oid)
                .context("Failed to find commit")?;

            messages.push(commit.message().unwrap_or("").to_lowercase());
        }

        Ok(messages)
    }

    /// Resolves a tag name to the commit it points at.
    fn resolve_tag(&self, tag: &str) -> Result<git2::Oid> {
        let object = self.repo.revparse_single(&format!("refs/tags/{tag}"))?;
        let commit = object
            .peel_to_commit()
            .context("Failed to peel tag to commit")?;

        Ok(commit.id())
    }

    /// Resolves the main branch head, trying `main` then `master`.
    fn main_branch_head(&self) -> Result<git2::Oid> {
        let object = self
            .repo
            .revparse_single("refs/heads/main")
            .or_else(|_| self.repo.revparse_single("refs/heads/master"))
            .context("Failed to resolve main branch head")?;
        let commit = object
            .peel_to_commit()
            .context("Failed to peel branch head to commit")?;

        Ok(commit.id())
    }
}
