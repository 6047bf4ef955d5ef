//! The resolution pipeline: rule matching, classifier fallback, reply.
//!
//! ```text
//! text ─► RuleBasedResolver ─► (no match) ─► IntentClassifier ─► ResponseSelector ─► reply
//! ```
//!
//! With the classifier enabled every utterance resolves to some intent, so the
//! failure phrases are only ever used when the classifier is turned off.
//!
//! ```
//! use phrasebook::catalog::IntentCatalog;
//! use phrasebook::engine::{EngineConfig, IntentEngine};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> phrasebook::error::Result<()> {
//! let catalog = IntentCatalog::builder()
//!     .intent("greeting", ["hi", "hello"], ["Hi!"])
//!     .intent("farewell", ["bye", "goodbye"], ["Bye!"])
//!     .failure_phrases(["I don't understand"])
//!     .build()?;
//!
//! let engine = IntentEngine::new(catalog, EngineConfig::default())?;
//! let mut rng = StdRng::seed_from_u64(0);
//! assert_eq!(engine.respond("Hello!!!", &mut rng)?, "Hi!");
//! # Ok(())
//! # }
//! ```

mod config;
mod reply;

pub use config::EngineConfig;
pub use reply::{Reply, Resolution, ResolutionSource};

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::catalog::IntentCatalog;
use crate::error::{PhrasebookError, Result};
use crate::matching::{FuzzyMatcher, RuleBasedResolver};
use crate::ml::intent_classifier::{IntentClassifier, LogisticIntentClassifier, TrainingStats};
use crate::response::ResponseSelector;

/// A loaded catalog plus everything trained from it, ready to answer.
///
/// The engine is immutable after construction and can be shared across
/// threads; only the random source is per call.
pub struct IntentEngine {
    catalog: Arc<IntentCatalog>,
    resolver: RuleBasedResolver,
    classifier: Option<Box<dyn IntentClassifier>>,
    training_stats: Option<TrainingStats>,
    config: EngineConfig,
}

impl std::fmt::Debug for IntentEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentEngine")
            .field("intents", &self.catalog.len())
            .field("threshold", &self.resolver.matcher().threshold())
            .field("classifier", &self.classifier.as_ref().map(|c| c.name()))
            .finish()
    }
}

impl IntentEngine {
    /// Validate the catalog and train the fallback classifier (if enabled).
    ///
    /// Configuration problems surface here, before any request is served.
    pub fn new(catalog: impl Into<Arc<IntentCatalog>>, config: EngineConfig) -> Result<Self> {
        let catalog = catalog.into();
        config.validate()?;
        catalog.validate()?;

        let (classifier, training_stats) = if config.classifier.enabled {
            let classifier = LogisticIntentClassifier::train(&catalog, &config.classifier)?;
            let stats = classifier.stats().clone();
            (Some(Box::new(classifier) as Box<dyn IntentClassifier>), Some(stats))
        } else {
            log::info!("fallback classifier disabled; unmatched input gets a failure phrase");
            (None, None)
        };

        Ok(Self {
            resolver: RuleBasedResolver::new(FuzzyMatcher::new(config.matcher)),
            catalog,
            classifier,
            training_stats,
            config,
        })
    }

    /// Build an engine around an already trained classifier.
    pub fn with_classifier(
        catalog: impl Into<Arc<IntentCatalog>>,
        config: EngineConfig,
        classifier: Box<dyn IntentClassifier>,
    ) -> Result<Self> {
        let catalog = catalog.into();
        config.matcher.validate()?;
        catalog.validate()?;

        Ok(Self {
            resolver: RuleBasedResolver::new(FuzzyMatcher::new(config.matcher)),
            catalog,
            classifier: Some(classifier),
            training_stats: None,
            config,
        })
    }

    /// The catalog this engine answers from.
    pub fn catalog(&self) -> &Arc<IntentCatalog> {
        &self.catalog
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Statistics from training the built-in classifier, if it was trained here.
    pub fn training_stats(&self) -> Option<&TrainingStats> {
        self.training_stats.as_ref()
    }

    /// Decide the intent of `text` without producing a reply.
    pub fn resolve(&self, text: &str) -> Result<Resolution> {
        if let Some(intent) = self.resolver.resolve_intent(text, &self.catalog) {
            return Ok(Resolution {
                intent: Some(intent.to_string()),
                source: ResolutionSource::Rule,
            });
        }

        match &self.classifier {
            Some(classifier) => Ok(Resolution {
                intent: Some(classifier.predict(text)?.to_string()),
                source: ResolutionSource::Classifier,
            }),
            None => Ok(Resolution {
                intent: None,
                source: ResolutionSource::Failure,
            }),
        }
    }

    /// Resolve `text` and pick a reply.
    pub fn reply<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Result<Reply> {
        let resolution = self.resolve(text)?;
        match &resolution.intent {
            Some(intent) => log::info!("intent is {intent} ({})", resolution.source),
            None => log::info!("no intent resolved for '{text}'"),
        }

        let reply = ResponseSelector::new(&self.catalog)
            .select_response(resolution.intent.as_deref(), rng)?;

        Ok(Reply {
            text: reply.to_string(),
            intent: resolution.intent,
            source: resolution.source,
        })
    }

    /// Resolve `text` and return only the reply text.
    pub fn respond<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Result<String> {
        self.reply(text, rng).map(|reply| reply.text)
    }

    /// Like [`respond`](Self::respond) for raw bytes, which must be UTF-8.
    pub fn respond_bytes<R: Rng + ?Sized>(&self, bytes: &[u8], rng: &mut R) -> Result<String> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            PhrasebookError::invalid_input(format!("input must be UTF-8 text: {e}"))
        })?;
        self.respond(text, rng)
    }

    /// Reply to many utterances in parallel.
    ///
    /// Utterance `i` draws from its own generator seeded with `seed + i`, so
    /// the output does not depend on how the work is scheduled.
    pub fn respond_batch<S>(&self, texts: &[S], seed: u64) -> Vec<Result<Reply>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .enumerate()
            .map(|(i, text)| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
                self.reply(text.as_ref(), &mut rng)
            })
            .collect()
    }
}
