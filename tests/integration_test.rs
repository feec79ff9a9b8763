use anyhow::Result;
use commit_intent::classify::{self, ClassifierConfig, ClassifyError};
use commit_intent::git::{DateRange, GitError, GitRepository};
use git2::{Repository, RepositoryInitOptions, Signature, Time};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Epoch seconds at UTC midnight for the fixture commits.
const T_2019_06_01: i64 = 1_559_347_200;
const T_2020_01_01: i64 = 1_577_836_800;
const T_2020_06_15: i64 = 1_592_179_200;
const T_2020_09_01: i64 = 1_598_918_400;
const T_2021_02_01: i64 = 1_612_137_600;

/// Test setup that creates a temporary git repository with commits at
/// controlled timestamps.
struct TestRepo {
    _temp_dir: TempDir,
    repo_path: PathBuf,
    repo: Repository,
    commits: Vec<git2::Oid>,
}

impl TestRepo {
    fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let repo_path = temp_dir.path().to_path_buf();

        // Pin the initial branch name so tag-range tests are independent
        // of any init.defaultBranch configuration on the host
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head("master");
        let repo = Repository::init_opts(&repo_path, &opts)?;

        let mut config = repo.config()?;
        config.set_str("user.name", "Test User")?;
        config.set_str("user.email", "test@example.com")?;

        Ok(TestRepo {
            _temp_dir: temp_dir,
            repo_path,
            repo,
            commits: Vec::new(),
        })
    }

    fn add_commit(&mut self, message: &str, timestamp: i64) -> Result<git2::Oid> {
        // Vary the file content per commit so every commit has a distinct tree
        let file_path = self.repo_path.join("test.txt");
        fs::write(&file_path, format!("{message}\n{timestamp}\n"))?;

        let mut index = self.repo.index()?;
        index.add_path(Path::new("test.txt"))?;
        index.write()?;

        let signature =
            Signature::new("Test User", "test@example.com", &Time::new(timestamp, 0))?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let parent_commit = if let Some(last_commit_id) = self.commits.last() {
            Some(self.repo.find_commit(*last_commit_id)?)
        } else {
            None
        };

        let parents: Vec<&git2::Commit> = if let Some(ref parent) = parent_commit {
            vec![parent]
        } else {
            vec![]
        };

        let commit_id = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;

        self.commits.push(commit_id);
        Ok(commit_id)
    }

    fn tag(&self, name: &str, commit: git2::Oid) -> Result<()> {
        let object = self.repo.find_object(commit, None)?;
        self.repo.tag_lightweight(name, &object, false)?;
        Ok(())
    }
}

fn test_config() -> ClassifierConfig {
    ClassifierConfig::new(PathBuf::from("/nonexistent/default-model.bin"))
}

#[test]
fn date_range_selects_only_commits_strictly_inside() -> Result<()> {
    let mut test_repo = TestRepo::new()?;
    test_repo.add_commit("Old release prep", T_2019_06_01)?;
    test_repo.add_commit("Fix Parser Crash", T_2020_06_15)?;
    test_repo.add_commit("Later cleanup", T_2021_02_01)?;

    let repo = GitRepository::open_at(&test_repo.repo_path)?;
    let range = DateRange::from_bounds(Some("2020-01-01"), Some("2020-12-31"))?;
    let messages = repo.messages_in_date_range(&range)?;

    assert_eq!(messages, vec!["fix parser crash".to_string()]);
    Ok(())
}

#[test]
fn date_range_bounds_are_exclusive() -> Result<()> {
    let mut test_repo = TestRepo::new()?;
    test_repo.add_commit("Commit exactly on the boundary", T_2020_01_01)?;
    test_repo.add_commit("Commit just inside", T_2020_01_01 + 1)?;

    let repo = GitRepository::open_at(&test_repo.repo_path)?;
    let range = DateRange::from_bounds(Some("2020-01-01"), Some("2020-12-31"))?;
    let messages = repo.messages_in_date_range(&range)?;

    assert_eq!(messages, vec!["commit just inside".to_string()]);
    Ok(())
}

#[test]
fn date_range_returns_messages_newest_first() -> Result<()> {
    let mut test_repo = TestRepo::new()?;
    test_repo.add_commit("First change", T_2020_06_15)?;
    test_repo.add_commit("Second change", T_2020_09_01)?;

    let repo = GitRepository::open_at(&test_repo.repo_path)?;
    let range = DateRange::from_bounds(None, None)?;
    let messages = repo.messages_in_date_range(&range)?;

    assert_eq!(
        messages,
        vec!["second change".to_string(), "first change".to_string()]
    );
    Ok(())
}

#[test]
fn tag_range_excludes_commits_reachable_from_start() -> Result<()> {
    let mut test_repo = TestRepo::new()?;
    test_repo.add_commit("Initial commit", T_2019_06_01)?;
    let tagged = test_repo.add_commit("Release v1.0", T_2020_01_01 + 60)?;
    test_repo.add_commit("Add Feature Flag", T_2020_06_15)?;
    test_repo.add_commit("Fix feature flag", T_2020_09_01)?;
    test_repo.tag("v1.0", tagged)?;

    let repo = GitRepository::open_at(&test_repo.repo_path)?;
    let messages = repo.messages_between_tags("v1.0", None)?;

    assert_eq!(
        messages,
        vec![
            "fix feature flag".to_string(),
            "add feature flag".to_string()
        ]
    );
    Ok(())
}

#[test]
fn tag_range_honors_explicit_end_tag() -> Result<()> {
    let mut test_repo = TestRepo::new()?;
    test_repo.add_commit("Initial commit", T_2019_06_01)?;
    let start = test_repo.add_commit("Release v1.0", T_2020_01_01 + 60)?;
    let end = test_repo.add_commit("Patch the release", T_2020_06_15)?;
    test_repo.add_commit("Unreleased work", T_2021_02_01)?;
    test_repo.tag("v1.0", start)?;
    test_repo.tag("v1.1", end)?;

    let repo = GitRepository::open_at(&test_repo.repo_path)?;
    let messages = repo.messages_between_tags("v1.0", Some("v1.1"))?;

    assert_eq!(messages, vec!["patch the release".to_string()]);
    Ok(())
}

#[test]
fn unknown_tag_is_fatal() -> Result<()> {
    let mut test_repo = TestRepo::new()?;
    test_repo.add_commit("Initial commit", T_2019_06_01)?;

    let repo = GitRepository::open_at(&test_repo.repo_path)?;
    let result = repo.messages_between_tags("does-not-exist", None);

    assert!(result.is_err());
    Ok(())
}

#[test]
fn missing_repository_fails_by_date() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;

    let err = classify::classify_by_date(
        temp_dir.path(),
        Some("2020-01-01"),
        None,
        None,
        &test_config(),
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GitError>(),
        Some(GitError::RepositoryNotFound(_))
    ));
    Ok(())
}

#[test]
fn missing_repository_fails_by_tag() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;

    let err = classify::classify_by_tag(temp_dir.path(), "v1.0", None, None, &test_config())
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GitError>(),
        Some(GitError::RepositoryNotFound(_))
    ));
    Ok(())
}

#[test]
fn empty_date_selection_is_a_no_op() -> Result<()> {
    let mut test_repo = TestRepo::new()?;
    test_repo.add_commit("Outside the window", T_2019_06_01)?;

    // No commit falls inside the range, so classification never loads a model
    let result = classify::classify_by_date(
        &test_repo.repo_path,
        Some("2020-01-01"),
        Some("2020-12-31"),
        None,
        &test_config(),
    )?;

    assert!(result.is_none());
    Ok(())
}

#[test]
fn empty_batch_is_a_no_op() -> Result<()> {
    let result = classify::classify_messages(Vec::new(), None, &test_config())?;
    assert!(result.is_none());
    Ok(())
}

#[test]
fn empty_message_is_a_no_op() -> Result<()> {
    let result = classify::classify_message("", None, &test_config())?;
    assert!(result.is_none());
    Ok(())
}

#[test]
fn single_message_fails_on_missing_explicit_model() -> Result<()> {
    let missing = Path::new("/nonexistent/explicit-model.bin");

    let err = classify::classify_message("fix the parser", Some(missing), &test_config())
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ClassifyError>(),
        Some(ClassifyError::ModelNotFound(path)) if path.as_path() == missing
    ));
    Ok(())
}

#[test]
fn batch_falls_back_to_default_on_missing_explicit_model() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let default_path = temp_dir.path().join("absent-default.bin");
    let config = ClassifierConfig::new(default_path.clone());

    let missing = Path::new("/nonexistent/explicit-model.bin");
    let err = classify::classify_messages(
        vec!["fix the parser".to_string()],
        Some(missing),
        &config,
    )
    .unwrap_err();

    // The batch path never surfaces ModelNotFound; it falls back to the
    // default, which here fails to load instead
    assert!(err.downcast_ref::<ClassifyError>().is_none());
    assert!(err.to_string().contains("absent-default.bin"));
    Ok(())
}
