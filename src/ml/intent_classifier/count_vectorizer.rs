//! Bag-of-words count vectorizer.

use std::collections::BTreeSet;
use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;

/// Turns text into token-count vectors over a vocabulary fitted on training documents.
///
/// Vocabulary indices follow sorted token order. Tokens not seen during
/// fitting are ignored at transform time.
pub struct CountVectorizer {
    /// Vocabulary: token -> feature index.
    vocabulary: AHashMap<String, usize>,
    /// Feature index -> token.
    terms: Vec<String>,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for CountVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl CountVectorizer {
    /// Create a new, unfitted vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            vocabulary: AHashMap::new(),
            terms: Vec::new(),
            analyzer,
        }
    }

    /// Fit the vocabulary on training documents, replacing any previous one.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        let mut distinct = BTreeSet::new();
        for doc in documents {
            for token in self.analyzer.analyze(doc.as_ref())? {
                distinct.insert(token.text);
            }
        }

        self.terms = distinct.into_iter().collect();
        self.vocabulary = self
            .terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        if self.terms.is_empty() {
            log::warn!("fitted vocabulary is empty; predictions will rely on class priors only");
        }

        Ok(())
    }

    /// Transform a document into a count vector of length `vocabulary_size()`.
    pub fn transform(&self, document: &str) -> Result<Vec<f64>> {
        let mut counts = vec![0.0; self.terms.len()];
        for token in self.analyzer.analyze(document)? {
            if let Some(&idx) = self.vocabulary.get(&token.text) {
                counts[idx] += 1.0;
            }
        }
        Ok(counts)
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    /// Vocabulary terms in feature-index order.
    pub fn vocabulary(&self) -> &[String] {
        &self.terms
    }

    /// Feature index of a term, if it is in the vocabulary.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}
