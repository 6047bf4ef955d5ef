//! Engine configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matching::MatcherConfig;
use crate::ml::intent_classifier::ClassifierConfig;

/// Configuration for [`IntentEngine`](crate::engine::IntentEngine).
///
/// Every field has a default, so a JSON file only needs the values it changes:
///
/// ```json
/// {"matcher": {"threshold": 0.3}, "classifier": {"enabled": false}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fuzzy matching settings for the rule-based resolver.
    pub matcher: MatcherConfig,
    /// Fallback classifier settings.
    pub classifier: ClassifierConfig,
}

impl EngineConfig {
    /// Load a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: EngineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.matcher.validate()?;
        self.classifier.validate()
    }

    /// Override the matcher threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.matcher.threshold = threshold;
        self
    }

    /// Turn the fallback classifier off.
    pub fn without_classifier(mut self) -> Self {
        self.classifier.enabled = false;
        self
    }
}
