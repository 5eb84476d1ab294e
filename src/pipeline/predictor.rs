//! Inference over a trained pipeline artifact.
//!
//! The predictor rebuilds the normalizer from the configuration recorded
//! in the artifact, so a text goes through exactly the stages it would
//! have at training time. Loading is done once; prediction itself touches
//! no I/O and a `Predictor` is `Send + Sync`, so callers can share one
//! behind an `Arc` across threads.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::TextNormalizer;
use crate::error::{Result, SentimenError};
use crate::lexicon::Lexicon;
use crate::pipeline::SentimentPipeline;

/// One classified text: the winning label plus the full probability
/// distribution over the model's classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub probabilities: BTreeMap<String, f64>,
}

/// Anything that can classify a text into a sentiment label.
pub trait SentimentBackend: Send + Sync {
    fn predict(&self, text: &str) -> Result<Prediction>;
    fn name(&self) -> &str;
}

/// Inference handle over a loaded [`SentimentPipeline`].
#[derive(Debug)]
pub struct Predictor {
    pipeline: SentimentPipeline,
    normalizer: TextNormalizer,
    name: String,
}

impl Predictor {
    /// Wrap an in-memory pipeline for inference.
    pub fn from_pipeline(pipeline: SentimentPipeline, lexicon: Arc<Lexicon>) -> Result<Self> {
        let normalizer = pipeline.build_normalizer(lexicon)?;
        Ok(Predictor {
            pipeline,
            normalizer,
            name: "in-memory".to_string(),
        })
    }

    /// Load an artifact from disk and prepare it for inference.
    pub fn from_path<P: AsRef<Path>>(path: P, lexicon: Arc<Lexicon>) -> Result<Self> {
        let path = path.as_ref();
        let pipeline = SentimentPipeline::load(path)?;
        let normalizer = pipeline.build_normalizer(lexicon)?;
        Ok(Predictor {
            pipeline,
            normalizer,
            name: path.display().to_string(),
        })
    }

    pub fn pipeline(&self) -> &SentimentPipeline {
        &self.pipeline
    }

    /// Classify one text. Malformed input is not an error: anything that
    /// normalizes away (or contains no known vocabulary) becomes the zero
    /// vector, and the classifier still emits a valid distribution from
    /// its bias terms.
    pub fn predict(&self, text: &str) -> Prediction {
        let normalized = self.normalizer.normalize(text);
        let features = self.pipeline.vectorizer().transform(&normalized);
        let (index, probs) = self.pipeline.classifier().predict(&features);

        let labels = self.pipeline.labels();
        let probabilities = labels
            .iter()
            .cloned()
            .zip(probs.iter().copied())
            .collect::<BTreeMap<String, f64>>();
        Prediction {
            label: labels[index].clone(),
            probabilities,
        }
    }
}

impl SentimentBackend for Predictor {
    fn predict(&self, text: &str) -> Result<Prediction> {
        Ok(Predictor::predict(self, text))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Try artifact paths in preference order and return the first one that
/// loads. Unloadable candidates are logged and skipped; if none load the
/// caller gets a configuration error listing what was tried.
pub fn select_backend(paths: &[PathBuf], lexicon: Arc<Lexicon>) -> Result<Predictor> {
    for path in paths {
        match Predictor::from_path(path, lexicon.clone()) {
            Ok(predictor) => {
                info!("using sentiment backend {}", path.display());
                return Ok(predictor);
            }
            Err(e) => {
                warn!("backend {} unavailable: {}", path.display(), e);
            }
        }
    }
    Err(SentimenError::corpus(format!(
        "no usable model artifact among {} candidate(s)",
        paths.len()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{RawReview, LABEL_NEGATIVE, LABEL_POSITIVE};
    use crate::pipeline::{Trainer, TrainerConfig};

    fn trained_predictor() -> Predictor {
        let reviews = vec![
            RawReview::labeled("aplikasi bagus cepat akurat", LABEL_POSITIVE),
            RawReview::labeled("sangat puas mantap bagus", LABEL_POSITIVE),
            RawReview::labeled("bagus membantu cepat puas", LABEL_POSITIVE),
            RawReview::labeled("jelek lambat error kecewa", LABEL_NEGATIVE),
            RawReview::labeled("error terus lambat jelek", LABEL_NEGATIVE),
            RawReview::labeled("kecewa jelek error lambat", LABEL_NEGATIVE),
        ];
        let lexicon = Arc::new(Lexicon::indonesian());
        let pipeline = Trainer::new(TrainerConfig::default(), lexicon.clone())
            .train(&reviews)
            .unwrap();
        Predictor::from_pipeline(pipeline, lexicon).unwrap()
    }

    #[test]
    fn test_prediction_distribution_is_valid() {
        let predictor = trained_predictor();
        let prediction = predictor.predict("aplikasi bagus dan cepat");

        let total: f64 = prediction.probabilities.values().sum();
        assert!((total - 1.0).abs() < 1e-9);
        for p in prediction.probabilities.values() {
            assert!(*p >= 0.0 && *p <= 1.0);
        }
        assert!(prediction.probabilities.contains_key(&prediction.label));
    }

    #[test]
    fn test_unknown_text_still_classified() {
        let predictor = trained_predictor();
        let prediction = predictor.predict("?????");
        let total: f64 = prediction.probabilities.values().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_select_backend_prefers_first_loadable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let good = dir.path().join("model.json");

        let predictor = trained_predictor();
        predictor.pipeline().save(&good).unwrap();

        let lexicon = Arc::new(Lexicon::indonesian());
        let selected =
            select_backend(&[missing.clone(), good.clone()], lexicon.clone()).unwrap();
        assert_eq!(selected.name(), good.display().to_string());

        let err = select_backend(&[missing], lexicon).unwrap_err();
        assert!(matches!(err, SentimenError::Corpus(_)));
    }
}
