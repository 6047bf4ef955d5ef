//! Multinomial logistic regression trained by full-batch gradient descent.
//!
//! The objective is the mean softmax cross-entropy plus an L2 penalty on the
//! weights (not the intercepts):
//!
//! ```text
//! J(W, b) = 1/n * sum_i CE(softmax(W x_i + b), y_i) + 1/(2 C n) * ||W||^2
//! ```
//!
//! Parameters start at zero and every step uses the whole training set, so
//! fitting the same data twice yields bit-identical models.

use serde::{Deserialize, Serialize};

use crate::error::{PhrasebookError, Result};

/// Outcome of [`LogisticRegression::fit`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitSummary {
    pub iterations: usize,
    pub final_loss: f64,
    pub converged: bool,
}

/// Softmax classifier over dense feature vectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// One weight row per class.
    weights: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
    c: f64,
    learning_rate: f64,
    max_iterations: usize,
    tolerance: f64,
}

impl LogisticRegression {
    /// Create an unfitted model.
    pub fn new(c: f64, learning_rate: f64, max_iterations: usize, tolerance: f64) -> Self {
        Self {
            weights: Vec::new(),
            intercepts: Vec::new(),
            c,
            learning_rate,
            max_iterations,
            tolerance,
        }
    }

    /// Number of classes the model was fitted on.
    pub fn n_classes(&self) -> usize {
        self.intercepts.len()
    }

    /// Number of input features the model was fitted on.
    pub fn n_features(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }

    /// Fit on feature rows `x` with class labels `y` in `0..n_classes`.
    pub fn fit(&mut self, x: &[Vec<f64>], y: &[usize], n_classes: usize) -> Result<FitSummary> {
        if x.is_empty() || x.len() != y.len() {
            return Err(PhrasebookError::invalid_input(format!(
                "expected one label per sample, got {} samples and {} labels",
                x.len(),
                y.len()
            )));
        }
        if n_classes == 0 {
            return Err(PhrasebookError::invalid_input("at least one class is required"));
        }
        if let Some(&label) = y.iter().find(|&&label| label >= n_classes) {
            return Err(PhrasebookError::invalid_input(format!(
                "label {label} out of range for {n_classes} classes"
            )));
        }

        let n_features = x[0].len();
        if x.iter().any(|row| row.len() != n_features) {
            return Err(PhrasebookError::invalid_input(
                "all samples must have the same number of features",
            ));
        }

        let n_samples = x.len() as f64;
        let penalty = 1.0 / (self.c * n_samples);

        self.weights = vec![vec![0.0; n_features]; n_classes];
        self.intercepts = vec![0.0; n_classes];

        let mut grad_weights = vec![vec![0.0; n_features]; n_classes];
        let mut grad_intercepts = vec![0.0; n_classes];
        let mut previous_loss = f64::INFINITY;
        let mut summary = FitSummary {
            iterations: 0,
            final_loss: f64::INFINITY,
            converged: false,
        };

        for iteration in 1..=self.max_iterations {
            grad_weights.iter_mut().for_each(|row| row.fill(0.0));
            grad_intercepts.fill(0.0);
            let mut cross_entropy = 0.0;

            for (row, &label) in x.iter().zip(y) {
                let probabilities = self.predict_proba(row);
                cross_entropy -= probabilities[label].max(f64::MIN_POSITIVE).ln();

                for (class, &p) in probabilities.iter().enumerate() {
                    let error = p - if class == label { 1.0 } else { 0.0 };
                    grad_intercepts[class] += error;
                    for (g, &feature) in grad_weights[class].iter_mut().zip(row) {
                        *g += error * feature;
                    }
                }
            }

            let squared_norm: f64 = self.weights.iter().flatten().map(|w| w * w).sum();
            let loss = cross_entropy / n_samples + 0.5 * penalty * squared_norm;

            for class in 0..n_classes {
                for (w, g) in self.weights[class].iter_mut().zip(&grad_weights[class]) {
                    *w -= self.learning_rate * (g / n_samples + penalty * *w);
                }
                self.intercepts[class] -= self.learning_rate * grad_intercepts[class] / n_samples;
            }

            summary.iterations = iteration;
            summary.final_loss = loss;
            if (previous_loss - loss).abs() < self.tolerance {
                summary.converged = true;
                break;
            }
            previous_loss = loss;
        }

        Ok(summary)
    }

    /// Class probabilities for one feature row.
    ///
    /// Features beyond the fitted width are ignored; missing ones count as zero.
    pub fn predict_proba(&self, features: &[f64]) -> Vec<f64> {
        let scores: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.intercepts)
            .map(|(row, b)| b + row.iter().zip(features).map(|(w, v)| w * v).sum::<f64>())
            .collect();

        softmax(&scores)
    }

    /// Most probable class; ties go to the lowest class index.
    pub fn predict(&self, features: &[f64]) -> Option<usize> {
        let probabilities = self.predict_proba(features);
        let mut best: Option<(usize, f64)> = None;
        for (class, &p) in probabilities.iter().enumerate() {
            if best.is_none_or(|(_, best_p)| p > best_p) {
                best = Some((class, p));
            }
        }
        best.map(|(class, _)| class)
    }
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LogisticRegression {
        LogisticRegression::new(1.0, 0.5, 500, 1e-6)
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let p = softmax(&[1.0, 2.0, 3.0]);
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(p[2] > p[1] && p[1] > p[0]);

        // Large scores must not overflow.
        let p = softmax(&[1000.0, 1000.0]);
        assert!((p[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_separable_classes() {
        // feature 0 marks class 0, feature 1 marks class 1, feature 2 marks class 2
        let x = vec![
            vec![1.0, 0.0, 0.0],
            vec![2.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 2.0, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![0.0, 0.0, 1.0],
        ];
        let y = vec![0, 0, 1, 1, 2, 2];

        let mut model = model();
        let summary = model.fit(&x, &y, 3).unwrap();

        assert!(summary.iterations > 0);
        assert!(summary.final_loss < 3f64.ln());
        assert_eq!(model.n_classes(), 3);
        assert_eq!(model.n_features(), 3);
        assert_eq!(model.predict(&[1.0, 0.0, 0.0]), Some(0));
        assert_eq!(model.predict(&[0.0, 3.0, 0.0]), Some(1));
        assert_eq!(model.predict(&[0.0, 0.0, 1.0]), Some(2));
    }

    #[test]
    fn test_fit_is_deterministic() {
        let x = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]];
        let y = vec![0, 1, 1];

        let mut first = model();
        let mut second = model();
        first.fit(&x, &y, 2).unwrap();
        second.fit(&x, &y, 2).unwrap();

        assert_eq!(first.predict_proba(&[0.5, 0.5]), second.predict_proba(&[0.5, 0.5]));
    }

    #[test]
    fn test_zero_features_fall_back_to_priors() {
        // No features at all: intercepts learn the class frequencies.
        let x = vec![vec![], vec![], vec![]];
        let y = vec![1, 1, 0];

        let mut model = model();
        model.fit(&x, &y, 2).unwrap();

        let p = model.predict_proba(&[]);
        assert!(p[1] > p[0]);
        assert_eq!(model.predict(&[]), Some(1));
    }

    #[test]
    fn test_single_class() {
        let mut model = model();
        model.fit(&[vec![1.0]], &[0], 1).unwrap();
        assert_eq!(model.predict(&[0.0]), Some(0));
        assert_eq!(model.predict_proba(&[5.0]), vec![1.0]);
    }

    #[test]
    fn test_ties_go_to_first_class() {
        let x = vec![vec![1.0], vec![1.0]];
        let y = vec![0, 1];

        let mut model = model();
        model.fit(&x, &y, 2).unwrap();
        assert_eq!(model.predict(&[1.0]), Some(0));
    }

    #[test]
    fn test_invalid_training_data() {
        let mut model = model();
        assert!(model.fit(&[], &[], 2).is_err());
        assert!(model.fit(&[vec![1.0]], &[0, 1], 2).is_err());
        assert!(model.fit(&[vec![1.0]], &[2], 2).is_err());
        assert!(model.fit(&[vec![1.0], vec![1.0, 2.0]], &[0, 1], 2).is_err());
    }
}
