//! Learned components: feature extraction, classification, evaluation.
//!
//! [`tfidf::TfIdfVectorizer`] turns normalized text into L2-normalized
//! TF-IDF vectors; [`classifier::SoftmaxClassifier`] maps those vectors to a
//! probability distribution over the sentiment classes; [`metrics`] scores
//! predictions against held-out labels.

pub mod classifier;
pub mod metrics;
pub mod tfidf;

pub use classifier::{SoftmaxClassifier, TrainingOptions, TrainingReport};
pub use metrics::{ClassMetrics, EvaluationReport, evaluate};
pub use tfidf::{DEFAULT_MAX_FEATURES, TfIdfVectorizer};
