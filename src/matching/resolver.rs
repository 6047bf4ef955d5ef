//! Rule-based intent resolution.

use crate::catalog::IntentCatalog;
use crate::matching::matcher::FuzzyMatcher;

/// The first example that matched an utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch<'a> {
    /// Id of the matched intent.
    pub intent: &'a str,
    /// The example phrase that matched.
    pub example: &'a str,
    /// Normalized edit distance between the utterance and the example.
    pub ratio: f64,
}

/// Resolves an utterance to the first intent owning a matching example.
///
/// Intents are visited in catalog order and examples in their configured
/// order; the first hit wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedResolver {
    matcher: FuzzyMatcher,
}

impl RuleBasedResolver {
    /// Create a resolver using the given matcher.
    pub fn new(matcher: FuzzyMatcher) -> Self {
        Self { matcher }
    }

    /// The matcher used by this resolver.
    pub fn matcher(&self) -> &FuzzyMatcher {
        &self.matcher
    }

    /// Id of the first intent with an example matching `text`, if any.
    pub fn resolve_intent<'a>(&self, text: &str, catalog: &'a IntentCatalog) -> Option<&'a str> {
        self.resolve_match(text, catalog).map(|m| m.intent)
    }

    /// Like [`resolve_intent`](Self::resolve_intent), but also reports which
    /// example matched.
    pub fn resolve_match<'a>(
        &self,
        text: &str,
        catalog: &'a IntentCatalog,
    ) -> Option<RuleMatch<'a>> {
        for intent in catalog.intents() {
            for example in intent.examples() {
                if self.matcher.is_matching(text, example) {
                    let rule_match = RuleMatch {
                        intent: intent.id(),
                        example,
                        ratio: self.matcher.similarity_ratio(text, example),
                    };
                    log::debug!(
                        "'{text}' matched example '{}' of intent '{}' (ratio {:.3})",
                        rule_match.example,
                        rule_match.intent,
                        rule_match.ratio
                    );
                    return Some(rule_match);
                }
            }
        }

        None
    }
}
