//! Intent classifier trait definition.

use crate::error::Result;

/// Intent classifier trait.
///
/// Implementations map free-form text to one of the intent ids they were
/// trained on. They are built once and then shared read-only.
pub trait IntentClassifier: Send + Sync {
    /// Predict the intent id for a given text.
    ///
    /// # Arguments
    /// * `text` - The utterance to classify
    ///
    /// # Returns
    /// The most probable intent id
    fn predict(&self, text: &str) -> Result<&str>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
