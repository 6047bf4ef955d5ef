//! # Phrasebook
//!
//! A small conversational intent-resolution engine.
//!
//! Given free-form user text, Phrasebook works out which of a fixed set of
//! intents the user meant and returns one of that intent's responses.
//!
//! ## Pipeline
//!
//! - Normalization: lowercase, punctuation stripped
//! - Rule matching: Levenshtein distance scaled by average length, against
//!   every example phrase in catalog order
//! - Fallback: a bag-of-words multinomial logistic regression trained on all
//!   example phrases at startup
//! - Reply: a uniformly random response of the resolved intent

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod matching;
pub mod ml;
pub mod response;
pub mod util;

pub mod prelude {
    pub use crate::catalog::{Intent, IntentCatalog};
    pub use crate::engine::{EngineConfig, IntentEngine, Reply, ResolutionSource};
    pub use crate::error::{PhrasebookError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
