//! Classifier configuration.
//!
//! The default model location is a value injected at startup rather
//! than a process-wide constant, so library callers and tests can
//! substitute their own.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::classify::ClassifyError;
use crate::utils::settings;

/// Environment variable naming the default model file.
pub const MODEL_ENV_VAR: &str = "COMMIT_INTENT_MODEL";

/// File name of the default model under the platform data directory.
const DEFAULT_MODEL_FILE: &str = "commit-model.bin";

/// Classifier configuration.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Model used when no explicit path is given or usable.
    pub default_model_path: PathBuf,
}

impl ClassifierConfig {
    /// Creates a configuration with the given default model path.
    pub fn new(default_model_path: PathBuf) -> Self {
        Self { default_model_path }
    }

    /// Resolves the default model path from the environment.
    ///
    /// Checks the `COMMIT_INTENT_MODEL` environment variable (with
    /// settings-file fallback), then falls back to
    /// `<data dir>/commit-intent/commit-model.bin`.
    pub fn from_environment() -> Result<Self> {
        if let Ok(path) = settings::get_env_var(MODEL_ENV_VAR) {
            return Ok(Self::new(PathBuf::from(path)));
        }

        let data_dir = dirs::data_dir().context("Failed to determine data directory")?;

        Ok(Self::new(
            data_dir.join("commit-intent").join(DEFAULT_MODEL_FILE),
        ))
    }

    /// Resolves a model path, falling back to the default when the
    /// explicit path is absent or does not exist.
    pub fn resolve_or_default(&self, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            None => {
                info!("Using default model");
                self.default_model_path.clone()
            }
            Some(path) if !path.exists() => {
                warn!(
                    "Model not found at {}, using default model instead",
                    path.display()
                );
                self.default_model_path.clone()
            }
            Some(path) => path.to_path_buf(),
        }
    }

    /// Resolves a model path, failing when the explicit path does not
    /// exist.
    pub fn resolve_strict(&self, explicit: Option<&Path>) -> Result<PathBuf, ClassifyError> {
        match explicit {
            None => {
                info!("Using default model");
                Ok(self.default_model_path.clone())
            }
            Some(path) if !path.exists() => {
                Err(ClassifyError::ModelNotFound(path.to_path_buf()))
            }
            Some(path) => Ok(path.to_path_buf()),
        }
    }
}
