//! Error types for the Phrasebook library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`PhrasebookError`] enum. Configuration problems (an empty catalog, an
//! intent without examples) are reported when the engine is built, never
//! deferred to the first request.
//!
//! # Examples
//!
//! ```
//! use phrasebook::error::{PhrasebookError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PhrasebookError::invalid_input("stream is not valid UTF-8"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Phrasebook operations.
#[derive(Error, Debug)]
pub enum PhrasebookError {
    /// A text-processing function received something that is not text.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The intent catalog has no intents.
    #[error("Configuration error: the intent catalog is empty")]
    EmptyCatalog,

    /// An intent has no example phrases, so it cannot be matched or trained on.
    #[error("Configuration error: intent '{intent}' has no examples")]
    IntentWithoutExamples { intent: String },

    /// Response selection was asked for an intent the catalog does not know.
    #[error("Unknown intent: {0}")]
    UnknownIntent(String),

    /// Response selection was asked for an intent with no responses.
    #[error("Intent '{0}' has no responses")]
    EmptyResponses(String),

    /// Failure phrases were needed but none are configured.
    #[error("No failure phrases configured")]
    EmptyFailurePhrases,

    /// Invalid engine or matcher configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Analysis-related errors (tokenization patterns etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors (reading configuration files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with PhrasebookError.
pub type Result<T> = std::result::Result<T, PhrasebookError>;

impl PhrasebookError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        PhrasebookError::InvalidInput(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        PhrasebookError::InvalidConfig(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PhrasebookError::Analysis(msg.into())
    }

    /// Create a new intent-without-examples error.
    pub fn intent_without_examples<S: Into<String>>(intent: S) -> Self {
        PhrasebookError::IntentWithoutExamples {
            intent: intent.into(),
        }
    }

    /// Whether this error describes a broken configuration rather than bad input
    /// or an internal invariant violation.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            PhrasebookError::EmptyCatalog
                | PhrasebookError::IntentWithoutExamples { .. }
                | PhrasebookError::InvalidConfig(_)
                | PhrasebookError::Json(_)
        )
    }
}
