//! Text classification model wrapper.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use fasttext::FastText;

/// Prefix the model attaches to every label it was trained with.
pub const LABEL_PREFIX: &str = "__label__";

/// A loaded text classification model.
///
/// Loaded fresh per invocation; there is no caching across calls.
pub struct IntentModel {
    inner: FastText,
}

impl IntentModel {
    /// Loads a serialized model from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let path_str = path
            .to_str()
            .with_context(|| format!("Model path is not valid UTF-8: {}", path.display()))?;

        let mut inner = FastText::new();
        inner
            .load_model(path_str)
            .map_err(|e| anyhow!("Failed to load classification model {}: {e}", path.display()))?;

        Ok(Self { inner })
    }

    /// Predicts the top-1 label for a message, as emitted by the model
    /// (including the internal label prefix). The confidence score is
    /// discarded.
    pub fn predict_raw(&self, message: &str) -> Result<String> {
        let predictions = self
            .inner
            .predict(message, 1, 0.0)
            .map_err(|e| anyhow!("Prediction failed: {e}"))?;

        let top = predictions
            .into_iter()
            .next()
            .context("Model returned no prediction")?;

        Ok(top.label)
    }

    /// Predicts the top-1 label for a message with the internal label
    /// prefix stripped.
    pub fn predict_label(&self, message: &str) -> Result<String> {
        let raw = self.predict_raw(message)?;
        Ok(strip_label_prefix(&raw).to_string())
    }
}

/// Strips the model's internal label prefix, if present.
pub fn strip_label_prefix(label: &str) -> &str {
    label.strip_prefix(LABEL_PREFIX).unwrap_or(label)
}
