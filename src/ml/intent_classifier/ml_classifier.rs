//! Logistic regression intent classifier over bag-of-words counts.

use std::sync::Arc;
use std::time::Instant;

use crate::analysis::analyzer::{Analyzer, BagOfWordsAnalyzer};
use crate::catalog::IntentCatalog;
use crate::error::{PhrasebookError, Result};

use super::classifier::IntentClassifier;
use super::core::samples_from_catalog;
use super::count_vectorizer::CountVectorizer;
use super::logistic::LogisticRegression;
use super::types::{ClassifierConfig, TrainingStats};

/// Fallback intent classifier trained on the examples of a catalog.
#[derive(Debug)]
pub struct LogisticIntentClassifier {
    vectorizer: CountVectorizer,
    model: LogisticRegression,
    /// Intent ids in catalog order; index = model class.
    classes: Vec<String>,
    stats: TrainingStats,
}

impl LogisticIntentClassifier {
    /// Train a classifier with the default bag-of-words analyzer.
    pub fn train(catalog: &IntentCatalog, config: &ClassifierConfig) -> Result<Self> {
        Self::train_with_analyzer(catalog, config, Arc::new(BagOfWordsAnalyzer::new()?))
    }

    /// Train a classifier with a specific analyzer.
    pub fn train_with_analyzer(
        catalog: &IntentCatalog,
        config: &ClassifierConfig,
        analyzer: Arc<dyn Analyzer>,
    ) -> Result<Self> {
        config.validate()?;
        let samples = samples_from_catalog(catalog)?;
        let start_time = Instant::now();

        let classes: Vec<String> = catalog.intent_ids().map(str::to_string).collect();
        let documents: Vec<&str> = samples.iter().map(|s| s.text.as_str()).collect();

        let mut vectorizer = CountVectorizer::new(analyzer);
        vectorizer.fit(&documents)?;

        let mut x = Vec::with_capacity(samples.len());
        let mut y = Vec::with_capacity(samples.len());
        for sample in &samples {
            x.push(vectorizer.transform(&sample.text)?);
            let label = classes
                .iter()
                .position(|class| *class == sample.intent)
                .ok_or_else(|| PhrasebookError::UnknownIntent(sample.intent.clone()))?;
            y.push(label);
        }

        let mut model = LogisticRegression::new(
            config.c,
            config.learning_rate,
            config.max_iterations,
            config.tolerance,
        );
        let summary = model.fit(&x, &y, classes.len())?;

        let stats = TrainingStats {
            samples: samples.len(),
            classes: classes.len(),
            vocabulary_size: vectorizer.vocabulary_size(),
            iterations: summary.iterations,
            final_loss: summary.final_loss,
            converged: summary.converged,
            training_time_ms: start_time.elapsed().as_millis() as u64,
            trained_at: chrono::Utc::now(),
        };

        log::info!(
            "trained fallback classifier on {} examples, {} intents, {} terms ({} iterations, loss {:.4}{})",
            stats.samples,
            stats.classes,
            stats.vocabulary_size,
            stats.iterations,
            stats.final_loss,
            if stats.converged { "" } else { ", not converged" }
        );

        Ok(Self {
            vectorizer,
            model,
            classes,
            stats,
        })
    }

    /// Probability of every intent for `text`, in catalog order.
    pub fn predict_proba(&self, text: &str) -> Result<Vec<(&str, f64)>> {
        let features = self.vectorizer.transform(text)?;
        let probabilities = self.model.predict_proba(&features);
        Ok(self
            .classes
            .iter()
            .map(String::as_str)
            .zip(probabilities)
            .collect())
    }

    /// Intent ids this classifier can predict, in catalog order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The fitted vectorizer.
    pub fn vectorizer(&self) -> &CountVectorizer {
        &self.vectorizer
    }

    /// Statistics from training.
    pub fn stats(&self) -> &TrainingStats {
        &self.stats
    }
}

impl IntentClassifier for LogisticIntentClassifier {
    fn predict(&self, text: &str) -> Result<&str> {
        let features = self.vectorizer.transform(text)?;
        let class = self
            .model
            .predict(&features)
            .ok_or(PhrasebookError::EmptyCatalog)?;

        let intent = self.classes[class].as_str();
        if log::log_enabled!(log::Level::Debug) {
            let probability = self.model.predict_proba(&features)[class];
            log::debug!("classifier predicted '{intent}' for '{text}' (p={probability:.3})");
        }
        Ok(intent)
    }

    fn name(&self) -> &str {
        "logistic_regression"
    }
}
