//! Fallback intent classification with a bag-of-words logistic regression.
//!
//! When no example phrase is close enough to an utterance, the engine asks a
//! classifier trained on every (example, intent) pair of the catalog. Unlike
//! the rule-based resolver, a trained classifier always names some intent.
//!
//! # Architecture
//!
//! - `IntentClassifier` trait: Common interface for fallback classifiers
//! - `CountVectorizer`: Token-count features over a fitted vocabulary
//! - `LogisticRegression`: Multinomial (softmax) model with L2 penalty
//! - `LogisticIntentClassifier`: Vectorizer + model trained from a catalog
//! - `IntentSample`: Training pair
//!
//! # Example
//!
//! ```
//! use phrasebook::catalog::IntentCatalog;
//! use phrasebook::ml::intent_classifier::{self, ClassifierConfig, IntentClassifier};
//!
//! # fn main() -> phrasebook::error::Result<()> {
//! let catalog = IntentCatalog::builder()
//!     .intent("greeting", ["hi", "hello there"], ["Hi!"])
//!     .intent("farewell", ["bye", "goodbye friend"], ["Bye!"])
//!     .build()?;
//!
//! let classifier = intent_classifier::train(&catalog, &ClassifierConfig::default())?;
//! let intent = classifier.predict("goodbye then")?;
//! assert_eq!(intent, "farewell");
//! # Ok(())
//! # }
//! ```

mod classifier;
mod core;
mod count_vectorizer;
mod logistic;
mod ml_classifier;
mod types;

// Public exports
pub use classifier::IntentClassifier;
pub use self::core::{samples_from_catalog, train};
pub use count_vectorizer::CountVectorizer;
pub use logistic::{FitSummary, LogisticRegression};
pub use ml_classifier::LogisticIntentClassifier;
pub use types::{ClassifierConfig, IntentSample, TrainingStats};
