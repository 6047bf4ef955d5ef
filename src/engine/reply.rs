//! Results of resolving an utterance.

use serde::{Deserialize, Serialize};

/// Which stage of the pipeline decided the intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionSource {
    /// An example phrase matched closely enough.
    Rule,
    /// The fallback classifier picked the intent.
    Classifier,
    /// Nothing resolved; a failure phrase is used.
    Failure,
}

impl std::fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResolutionSource::Rule => "rule",
            ResolutionSource::Classifier => "classifier",
            ResolutionSource::Failure => "failure",
        };
        f.write_str(name)
    }
}

/// The intent chosen for an utterance, without a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub intent: Option<String>,
    pub source: ResolutionSource,
}

/// A reply together with how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub intent: Option<String>,
    pub source: ResolutionSource,
}
