//! Analyzers turn raw text into the tokens the fallback classifier counts.
//!
//! ```
//! use phrasebook::analysis::analyzer::{Analyzer, BagOfWordsAnalyzer};
//!
//! let analyzer = BagOfWordsAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Hello World").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Lowercases the input, then tokenizes it.
///
/// This is the conventional bag-of-words preprocessing: case-insensitive
/// features made of runs of two or more word characters.
#[derive(Clone)]
pub struct BagOfWordsAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    lowercase: bool,
}

impl BagOfWordsAnalyzer {
    /// Create an analyzer with the default bag-of-words tokenizer.
    pub fn new() -> Result<Self> {
        Ok(Self::with_tokenizer(Arc::new(RegexTokenizer::new()?)))
    }

    /// Create an analyzer that lowercases and then uses the given tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        BagOfWordsAnalyzer {
            tokenizer,
            lowercase: true,
        }
    }

    /// Keep the original case of the input.
    pub fn case_sensitive(mut self) -> Self {
        self.lowercase = false;
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }
}

impl Analyzer for BagOfWordsAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        if self.lowercase {
            self.tokenizer.tokenize(&text.to_lowercase())
        } else {
            self.tokenizer.tokenize(text)
        }
    }

    fn name(&self) -> &'static str {
        "bag_of_words"
    }
}

impl std::fmt::Debug for BagOfWordsAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BagOfWordsAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field("lowercase", &self.lowercase)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_bag_of_words_analyzer() {
        let analyzer = BagOfWordsAnalyzer::new().unwrap();
        let tokens: Vec<Token> = analyzer.analyze("Good Bye, FRIEND!").unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["good", "bye", "friend"]);
    }

    #[test]
    fn test_case_sensitive_analyzer() {
        let analyzer = BagOfWordsAnalyzer::new().unwrap().case_sensitive();
        let tokens: Vec<Token> = analyzer.analyze("Hello there").unwrap().collect();

        assert_eq!(tokens[0].text, "Hello");
        assert_eq!(tokens[1].text, "there");
    }

    #[test]
    fn test_analyzer_name() {
        let analyzer = BagOfWordsAnalyzer::new().unwrap();
        assert_eq!(analyzer.name(), "bag_of_words");
    }
}
