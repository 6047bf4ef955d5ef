//! Edit-distance matcher.

use serde::{Deserialize, Serialize};

use crate::analysis::normalize;
use crate::error::{PhrasebookError, Result};
use crate::util::levenshtein::average_length_ratio;

/// Default similarity cutoff: texts match when their normalized edit distance
/// is strictly below this value.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Configuration for [`FuzzyMatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Lower is stricter. 0.0 never matches non-empty texts.
    pub threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl MatcherConfig {
    /// Create a config with the given threshold, rejecting NaN and negatives.
    pub fn new(threshold: f64) -> Result<Self> {
        let config = Self { threshold };
        config.validate()?;
        Ok(config)
    }

    /// Check that the threshold is a usable number.
    pub fn validate(&self) -> Result<()> {
        if self.threshold.is_nan() || self.threshold < 0.0 {
            return Err(PhrasebookError::invalid_config(format!(
                "matcher threshold must be a non-negative number, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Decides whether two texts are similar enough to count as the same phrase.
///
/// Both texts are normalized first; the Levenshtein distance between them is
/// divided by their average length and compared with the threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyMatcher {
    config: MatcherConfig,
}

impl FuzzyMatcher {
    /// Create a matcher from a config.
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// The threshold in use.
    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// Normalized edit distance between the normalized forms of `text1` and `text2`.
    ///
    /// Two texts that both normalize to the empty string have ratio 0.0.
    pub fn similarity_ratio(&self, text1: &str, text2: &str) -> f64 {
        average_length_ratio(&normalize(text1), &normalize(text2))
    }

    /// Whether `text1` and `text2` are close enough.
    pub fn is_matching(&self, text1: &str, text2: &str) -> bool {
        let normalized1 = normalize(text1);
        let normalized2 = normalize(text2);

        // Both empty: trivially equal, and there is no length to divide by.
        if normalized1.is_empty() && normalized2.is_empty() {
            return true;
        }

        average_length_ratio(&normalized1, &normalized2) < self.config.threshold
    }
}

/// [`FuzzyMatcher::is_matching`] with an explicit threshold.
pub fn is_matching(text1: &str, text2: &str, threshold: f64) -> bool {
    FuzzyMatcher::new(MatcherConfig { threshold }).is_matching(text1, text2)
}
