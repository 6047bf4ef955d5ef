//! Fuzzy matching of utterances against example phrases.
//!
//! [`FuzzyMatcher`] decides whether two texts are close enough by comparing
//! their normalized edit distance with a threshold, and [`RuleBasedResolver`]
//! walks a catalog looking for the first intent with a matching example.

pub mod matcher;
pub mod resolver;

pub use matcher::{DEFAULT_THRESHOLD, FuzzyMatcher, MatcherConfig, is_matching};
pub use resolver::{RuleBasedResolver, RuleMatch};
