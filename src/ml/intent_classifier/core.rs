//! Helper functions for training intent classifiers from a catalog.

use crate::catalog::IntentCatalog;
use crate::error::{PhrasebookError, Result};
use crate::ml::intent_classifier::ml_classifier::LogisticIntentClassifier;
use crate::ml::intent_classifier::types::{ClassifierConfig, IntentSample};

/// One training sample per example phrase, in catalog order.
///
/// Fails with `EmptyCatalog` when there are no intents and with
/// `IntentWithoutExamples` when any intent has no examples.
pub fn samples_from_catalog(catalog: &IntentCatalog) -> Result<Vec<IntentSample>> {
    if catalog.is_empty() {
        return Err(PhrasebookError::EmptyCatalog);
    }

    let mut samples = Vec::new();
    for intent in catalog.intents() {
        if intent.examples().is_empty() {
            return Err(PhrasebookError::intent_without_examples(intent.id()));
        }
        samples.extend(intent.examples().iter().map(|example| IntentSample {
            text: example.clone(),
            intent: intent.id().to_string(),
        }));
    }

    Ok(samples)
}

/// Train a logistic regression intent classifier on every example of the catalog.
pub fn train(catalog: &IntentCatalog, config: &ClassifierConfig) -> Result<LogisticIntentClassifier> {
    LogisticIntentClassifier::train(catalog, config)
}
