//! Multinomial logistic regression classifier.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimenError};

/// Training hyperparameters for [`SoftmaxClassifier::fit`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingOptions {
    /// Gradient descent step size.
    pub learning_rate: f64,
    /// Iteration cap; hitting it without converging is a quality warning,
    /// not an error.
    pub max_iter: usize,
    /// L2 regularization strength on the weights (not the biases).
    pub l2: f64,
    /// Convergence tolerance on the absolute loss delta between iterations.
    pub tolerance: f64,
}

impl Default for TrainingOptions {
    fn default() -> Self {
        TrainingOptions {
            learning_rate: 0.1,
            max_iter: 400,
            l2: 1e-3,
            tolerance: 1e-6,
        }
    }
}

/// Statistics from one training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Iterations actually executed.
    pub iterations: usize,
    /// Whether the loss delta dropped below tolerance before the cap.
    pub converged: bool,
    /// Loss at each iteration.
    pub losses: Vec<f64>,
    /// Final training loss.
    pub final_loss: f64,
}

/// Multinomial linear classifier: one linear score per class, softmax
/// normalized. Trained by batch gradient descent on L2-regularized
/// cross-entropy with "balanced" per-example class weights, which
/// compensates for the heavy positive skew of real review corpora.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftmaxClassifier {
    /// Per-class weight rows, `[n_classes][n_features]`.
    weights: Vec<Vec<f64>>,
    /// Per-class bias terms.
    bias: Vec<f64>,
    n_features: usize,
}

impl SoftmaxClassifier {
    /// Create an untrained classifier for the given shape.
    pub fn new(n_classes: usize, n_features: usize) -> Self {
        SoftmaxClassifier {
            weights: vec![vec![0.0; n_features]; n_classes],
            bias: vec![0.0; n_classes],
            n_features,
        }
    }

    /// Number of classes.
    pub fn n_classes(&self) -> usize {
        self.bias.len()
    }

    /// Number of input features.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Fit on training vectors `x` with class indices `y`.
    ///
    /// Iterates until the loss delta drops below tolerance or the iteration
    /// cap is reached; non-convergence keeps the latest parameters and logs
    /// a warning.
    pub fn fit(&mut self, x: &[Vec<f64>], y: &[usize], options: &TrainingOptions) -> Result<TrainingReport> {
        let n_classes = self.n_classes();
        if x.is_empty() || x.len() != y.len() {
            return Err(SentimenError::model(format!(
                "inconsistent training data: {} examples, {} labels",
                x.len(),
                y.len()
            )));
        }
        if let Some(&bad) = y.iter().find(|&&label| label >= n_classes) {
            return Err(SentimenError::model(format!(
                "label index {bad} out of range for {n_classes} classes"
            )));
        }

        let example_weights = Self::balanced_weights(y, n_classes);
        let weight_sum: f64 = example_weights.iter().sum();

        let mut losses = Vec::new();
        let mut converged = false;

        for iteration in 0..options.max_iter {
            let mut grad_w = vec![vec![0.0; self.n_features]; n_classes];
            let mut grad_b = vec![0.0; n_classes];
            let mut loss = 0.0;

            for ((features, &label), &example_weight) in
                x.iter().zip(y.iter()).zip(example_weights.iter())
            {
                let probs = self.probabilities(features);
                loss -= example_weight * probs[label].max(f64::MIN_POSITIVE).ln();

                for class in 0..n_classes {
                    let err = example_weight * (probs[class] - f64::from(u8::from(class == label)));
                    for (g, &value) in grad_w[class].iter_mut().zip(features.iter()) {
                        *g += err * value;
                    }
                    grad_b[class] += err;
                }
            }

            loss /= weight_sum;
            for row in &self.weights {
                loss += options.l2 / 2.0 * row.iter().map(|w| w * w).sum::<f64>();
            }
            losses.push(loss);

            for class in 0..n_classes {
                for (weight, &g) in self.weights[class].iter_mut().zip(grad_w[class].iter()) {
                    *weight -= options.learning_rate * (g / weight_sum + options.l2 * *weight);
                }
                self.bias[class] -= options.learning_rate * grad_b[class] / weight_sum;
            }

            if iteration > 0 {
                let delta = (losses[iteration - 1] - loss).abs();
                if delta < options.tolerance {
                    converged = true;
                    debug!("converged after {} iterations (loss {loss:.6})", iteration + 1);
                    break;
                }
            }
        }

        let final_loss = losses.last().copied().unwrap_or(0.0);
        if !converged {
            warn!(
                "classifier did not converge within {} iterations (final loss {final_loss:.6}); \
                 keeping best-so-far parameters",
                options.max_iter
            );
        }

        Ok(TrainingReport {
            iterations: losses.len(),
            converged,
            losses,
            final_loss,
        })
    }

    /// Predict the class index and full probability distribution for one
    /// feature vector. The distribution covers every class in index order
    /// and sums to 1.
    pub fn predict(&self, features: &[f64]) -> (usize, Vec<f64>) {
        let probs = self.probabilities(features);
        let label = probs
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        (label, probs)
    }

    /// Softmax over the per-class linear scores, with max-subtraction for
    /// numerical stability.
    fn probabilities(&self, features: &[f64]) -> Vec<f64> {
        let scores: Vec<f64> = self
            .weights
            .iter()
            .zip(self.bias.iter())
            .map(|(row, &b)| {
                b + row
                    .iter()
                    .zip(features.iter())
                    .map(|(w, v)| w * v)
                    .sum::<f64>()
            })
            .collect();

        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let sum: f64 = exps.iter().sum();
        exps.into_iter().map(|e| e / sum).collect()
    }

    /// "Balanced" per-example weights: `n / (k * count(class))`, so each
    /// class contributes equally to the loss regardless of its frequency.
    fn balanced_weights(y: &[usize], n_classes: usize) -> Vec<f64> {
        let mut counts = vec![0usize; n_classes];
        for &label in y {
            counts[label] += 1;
        }

        let n = y.len() as f64;
        let k = n_classes as f64;
        y.iter()
            .map(|&label| {
                if counts[label] > 0 {
                    n / (k * counts[label] as f64)
                } else {
                    0.0
                }
            })
            .collect()
    }
}
