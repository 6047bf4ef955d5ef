use serde::{Deserialize, Serialize};

/// A named user purpose with example phrases and candidate responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    id: String,
    examples: Vec<String>,
    responses: Vec<String>,
}

impl Intent {
    /// Create a new intent.
    pub fn new<S: Into<String>>(id: S, examples: Vec<String>, responses: Vec<String>) -> Self {
        Intent {
            id: id.into(),
            examples,
            responses,
        }
    }

    /// Unique identifier of this intent.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Example phrases, used for rule matching and classifier training.
    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    /// Candidate responses.
    pub fn responses(&self) -> &[String] {
        &self.responses
    }
}
