//! Common types for intent classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PhrasebookError, Result};

/// Training sample for intent classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentSample {
    /// Example text.
    pub text: String,
    /// Intent label.
    pub intent: String,
}

/// Hyperparameters of the fallback classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Train and consult the classifier at all. When disabled, utterances
    /// that match no example get a failure phrase.
    pub enabled: bool,
    /// Inverse L2 regularization strength; smaller means stronger penalty.
    pub c: f64,
    /// Gradient descent step size.
    pub learning_rate: f64,
    /// Upper bound on gradient descent iterations.
    pub max_iterations: usize,
    /// Stop once the loss improves by less than this between iterations.
    pub tolerance: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            c: 1.0,
            learning_rate: 0.5,
            max_iterations: 500,
            tolerance: 1e-6,
        }
    }
}

impl ClassifierConfig {
    /// Check that the hyperparameters are usable.
    pub fn validate(&self) -> Result<()> {
        if self.c <= 0.0 || !self.c.is_finite() {
            return Err(PhrasebookError::invalid_config(format!(
                "classifier c must be a positive number, got {}",
                self.c
            )));
        }
        if self.learning_rate <= 0.0 || !self.learning_rate.is_finite() {
            return Err(PhrasebookError::invalid_config(format!(
                "classifier learning_rate must be a positive number, got {}",
                self.learning_rate
            )));
        }
        if self.max_iterations == 0 {
            return Err(PhrasebookError::invalid_config(
                "classifier max_iterations must be at least 1",
            ));
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(PhrasebookError::invalid_config(format!(
                "classifier tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// What happened while training the classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Number of training samples (examples across all intents).
    pub samples: usize,
    /// Number of intents (classes).
    pub classes: usize,
    /// Size of the fitted vocabulary.
    pub vocabulary_size: usize,
    /// Gradient descent iterations performed.
    pub iterations: usize,
    /// Regularized mean cross-entropy after the last iteration.
    pub final_loss: f64,
    /// Whether training stopped on `tolerance` rather than `max_iterations`.
    pub converged: bool,
    /// Wall-clock training time in milliseconds.
    pub training_time_ms: u64,
    /// When training finished.
    pub trained_at: DateTime<Utc>,
}
