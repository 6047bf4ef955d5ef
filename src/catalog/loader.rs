//! JSON loading for intent catalogs.
//!
//! The file shape is:
//!
//! ```json
//! {
//!   "intents": {
//!     "greeting": {"examples": ["hi", "hello"], "responses": ["Hi!"]}
//!   },
//!   "failure_phrases": ["I don't understand"]
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::catalog::{Intent, IntentCatalog};
use crate::error::Result;

/// Raw on-disk representation of a catalog.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    intents: OrderedIntents,
    #[serde(default)]
    failure_phrases: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct IntentBody {
    #[serde(default)]
    examples: Vec<String>,
    #[serde(default)]
    responses: Vec<String>,
}

/// Intents in the order they appear in the JSON object.
#[derive(Debug)]
struct OrderedIntents(Vec<Intent>);

impl<'de> Deserialize<'de> for OrderedIntents {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedIntentsVisitor;

        impl<'de> Visitor<'de> for OrderedIntentsVisitor {
            type Value = OrderedIntents;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of intent id to {examples, responses}")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut intents = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((id, body)) = map.next_entry::<String, IntentBody>()? {
                    intents.push(Intent::new(id, body.examples, body.responses));
                }
                Ok(OrderedIntents(intents))
            }
        }

        deserializer.deserialize_map(OrderedIntentsVisitor)
    }
}

impl CatalogFile {
    /// Convert into a catalog, rejecting duplicate intent ids.
    pub fn into_catalog(self) -> Result<IntentCatalog> {
        IntentCatalog::new(self.intents.0, self.failure_phrases)
    }
}

impl IntentCatalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        file.into_catalog()
    }

    /// Load a catalog from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).inspect_err(|e| {
            log::error!("failed to read catalog {}: {e}", path.display());
        })?;
        let catalog = Self::from_json_str(&content).inspect_err(|e| {
            log::error!("failed to parse catalog {}: {e}", path.display());
        })?;

        log::info!(
            "loaded {} intents and {} failure phrases from {}",
            catalog.len(),
            catalog.failure_phrases().len(),
            path.display()
        );
        Ok(catalog)
    }
}
