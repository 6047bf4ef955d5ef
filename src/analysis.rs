//! Text analysis for Phrasebook.
//!
//! Two consumers share this module: the fuzzy matcher compares whole
//! [`normalize`]d strings, while the fallback classifier counts tokens produced
//! by an [`Analyzer`].

pub mod analyzer;
pub mod normalizer;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, BagOfWordsAnalyzer};
pub use normalizer::{normalize, normalize_bytes};
pub use token::{Token, TokenStream};
pub use tokenizer::{RegexTokenizer, Tokenizer};
