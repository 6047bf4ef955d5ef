//! Response selection.
//!
//! A resolved intent gets one of its responses, picked uniformly at random;
//! no intent at all gets one of the catalog's failure phrases. The random
//! source is always passed in, so a seeded generator gives reproducible
//! replies.
//!
//! ```
//! use phrasebook::catalog::IntentCatalog;
//! use phrasebook::response::ResponseSelector;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let catalog = IntentCatalog::builder()
//!     .intent("greeting", ["hi"], ["Hi!", "Hello!"])
//!     .build()
//!     .unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let reply = ResponseSelector::new(&catalog)
//!     .select_response(Some("greeting"), &mut rng)
//!     .unwrap();
//! assert!(reply == "Hi!" || reply == "Hello!");
//! ```

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::catalog::IntentCatalog;
use crate::error::{PhrasebookError, Result};

/// Picks reply text from a catalog.
#[derive(Debug, Clone, Copy)]
pub struct ResponseSelector<'a> {
    catalog: &'a IntentCatalog,
}

impl<'a> ResponseSelector<'a> {
    /// Create a selector over `catalog`.
    pub fn new(catalog: &'a IntentCatalog) -> Self {
        Self { catalog }
    }

    /// Pick a response for `intent`, or a failure phrase when `intent` is `None`.
    ///
    /// Consumes randomness from `rng` for every successful pick. Asking for an
    /// intent the catalog does not have, or one without responses, is an
    /// internal logic error.
    pub fn select_response<R: Rng + ?Sized>(
        &self,
        intent: Option<&str>,
        rng: &mut R,
    ) -> Result<&'a str> {
        match intent {
            Some(id) => {
                let intent = self
                    .catalog
                    .get(id)
                    .ok_or_else(|| PhrasebookError::UnknownIntent(id.to_string()))?;
                intent
                    .responses()
                    .choose(rng)
                    .map(String::as_str)
                    .ok_or_else(|| PhrasebookError::EmptyResponses(id.to_string()))
            }
            None => self
                .catalog
                .failure_phrases()
                .choose(rng)
                .map(String::as_str)
                .ok_or(PhrasebookError::EmptyFailurePhrases),
        }
    }
}

/// Free-function form of [`ResponseSelector::select_response`].
pub fn select_response<'a, R: Rng + ?Sized>(
    intent: Option<&str>,
    catalog: &'a IntentCatalog,
    rng: &mut R,
) -> Result<&'a str> {
    ResponseSelector::new(catalog).select_response(intent, rng)
}
