//! The intent catalog: intents, their example phrases and responses, and the
//! failure phrases used when nothing could be resolved.
//!
//! A catalog is built once (from a JSON file or programmatically) and never
//! mutated afterwards. Intent order is the order in which intents were added,
//! which for files is the order they appear in the `intents` object.
//!
//! ```
//! use phrasebook::catalog::IntentCatalog;
//!
//! let catalog = IntentCatalog::builder()
//!     .intent("greeting", ["hi", "hello"], ["Hi!"])
//!     .intent("farewell", ["bye", "goodbye"], ["Bye!"])
//!     .failure_phrases(["I don't understand"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.intent_ids().collect::<Vec<_>>(), vec!["greeting", "farewell"]);
//! ```

mod intent;
mod loader;

pub use intent::Intent;
pub use loader::CatalogFile;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{PhrasebookError, Result};

/// Ordered collection of intents plus the catalog-wide failure phrases.
#[derive(Debug, Clone, Default)]
pub struct IntentCatalog {
    intents: Vec<Intent>,
    /// Intent id -> position in `intents`.
    index: AHashMap<String, usize>,
    failure_phrases: Vec<String>,
}

/// Summary counts for a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub intents: usize,
    pub examples: usize,
    pub responses: usize,
    pub failure_phrases: usize,
}

impl IntentCatalog {
    /// Start building a catalog programmatically.
    pub fn builder() -> IntentCatalogBuilder {
        IntentCatalogBuilder::default()
    }

    /// Create a catalog from intents in their resolution order.
    ///
    /// Fails with `InvalidConfig` if two intents share an id.
    pub fn new(intents: Vec<Intent>, failure_phrases: Vec<String>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(intents.len());
        for (position, intent) in intents.iter().enumerate() {
            if index.insert(intent.id().to_string(), position).is_some() {
                return Err(PhrasebookError::invalid_config(format!(
                    "duplicate intent id '{}'",
                    intent.id()
                )));
            }
        }

        Ok(IntentCatalog {
            intents,
            index,
            failure_phrases,
        })
    }

    /// Look up an intent by id.
    pub fn get(&self, id: &str) -> Option<&Intent> {
        self.index.get(id).map(|&position| &self.intents[position])
    }

    /// Whether an intent with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate intents in resolution order.
    pub fn intents(&self) -> impl Iterator<Item = &Intent> {
        self.intents.iter()
    }

    /// Iterate intent ids in resolution order.
    pub fn intent_ids(&self) -> impl Iterator<Item = &str> {
        self.intents.iter().map(Intent::id)
    }

    /// Phrases used when no intent could be resolved.
    pub fn failure_phrases(&self) -> &[String] {
        &self.failure_phrases
    }

    /// Number of intents.
    pub fn len(&self) -> usize {
        self.intents.len()
    }

    /// Whether the catalog has no intents.
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Check the invariants required to serve requests.
    ///
    /// The catalog must have at least one intent and every intent at least
    /// one example. Intents without responses are allowed here but logged,
    /// since they only fail when a response is actually requested.
    pub fn validate(&self) -> Result<()> {
        if self.intents.is_empty() {
            return Err(PhrasebookError::EmptyCatalog);
        }

        for intent in &self.intents {
            if intent.examples().is_empty() {
                return Err(PhrasebookError::intent_without_examples(intent.id()));
            }
            if intent.responses().is_empty() {
                log::warn!("intent '{}' has no responses", intent.id());
            }
        }

        if self.failure_phrases.is_empty() {
            log::debug!("catalog has no failure phrases");
        }

        Ok(())
    }

    /// Summary counts for this catalog.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            intents: self.intents.len(),
            examples: self.intents.iter().map(|i| i.examples().len()).sum(),
            responses: self.intents.iter().map(|i| i.responses().len()).sum(),
            failure_phrases: self.failure_phrases.len(),
        }
    }
}

/// Builder for [`IntentCatalog`].
#[derive(Debug, Default)]
pub struct IntentCatalogBuilder {
    intents: Vec<Intent>,
    failure_phrases: Vec<String>,
}

impl IntentCatalogBuilder {
    /// Append an intent.
    pub fn intent<I, E, R>(mut self, id: I, examples: E, responses: R) -> Self
    where
        I: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        self.intents.push(Intent::new(
            id,
            examples.into_iter().map(Into::into).collect(),
            responses.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Set the failure phrases.
    pub fn failure_phrases<F>(mut self, phrases: F) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
    {
        self.failure_phrases = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Build the catalog.
    pub fn build(self) -> Result<IntentCatalog> {
        IntentCatalog::new(self.intents, self.failure_phrases)
    }
}

impl<'de> Deserialize<'de> for IntentCatalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let file = CatalogFile::deserialize(deserializer)?;
        file.into_catalog().map_err(serde::de::Error::custom)
    }
}
