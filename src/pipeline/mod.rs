//! The trained sentiment pipeline artifact.
//!
//! A [`SentimentPipeline`] bundles everything inference needs so that
//! prediction-time text handling is byte-for-byte the training-time
//! handling: the normalizer configuration, the fitted vectorizer, the
//! fitted classifier, and the label order. The artifact is a single
//! versioned JSON file written atomically (temp file then rename).

pub mod predictor;
pub mod trainer;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::{NormalizerConfig, TextNormalizer};
use crate::error::{Result, SentimenError};
use crate::lexicon::Lexicon;
use crate::ml::{EvaluationReport, SoftmaxClassifier, TfIdfVectorizer};

pub use predictor::{select_backend, Prediction, Predictor, SentimentBackend};
pub use trainer::{Trainer, TrainerConfig};

/// Artifact format version. Bumped on any incompatible layout change;
/// loading rejects any other value.
pub const ARTIFACT_VERSION: u32 = 1;

/// Provenance recorded alongside the fitted model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineMetadata {
    /// When training finished.
    pub trained_at: DateTime<Utc>,
    /// Number of labeled examples the model was fitted on.
    pub train_examples: usize,
    /// Number of examples held out for validation.
    pub validation_examples: usize,
    /// Validation metrics, when a holdout split was evaluated.
    #[serde(default)]
    pub validation: Option<EvaluationReport>,
}

/// A fully trained sentiment pipeline, ready for persistence or inference.
#[derive(Debug, Serialize, Deserialize)]
pub struct SentimentPipeline {
    version: u32,
    normalizer: NormalizerConfig,
    vectorizer: TfIdfVectorizer,
    classifier: SoftmaxClassifier,
    labels: Vec<String>,
    metadata: PipelineMetadata,
}

impl SentimentPipeline {
    pub(crate) fn new(
        normalizer: NormalizerConfig,
        vectorizer: TfIdfVectorizer,
        classifier: SoftmaxClassifier,
        labels: Vec<String>,
        metadata: PipelineMetadata,
    ) -> Self {
        SentimentPipeline {
            version: ARTIFACT_VERSION,
            normalizer,
            vectorizer,
            classifier,
            labels,
            metadata,
        }
    }

    /// The class labels in the index order the classifier emits.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The normalizer configuration the model was trained with.
    pub fn normalizer_config(&self) -> &NormalizerConfig {
        &self.normalizer
    }

    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    pub fn classifier(&self) -> &SoftmaxClassifier {
        &self.classifier
    }

    pub fn metadata(&self) -> &PipelineMetadata {
        &self.metadata
    }

    /// Rebuild the normalizer this pipeline was trained with.
    pub fn build_normalizer(&self, lexicon: Arc<Lexicon>) -> Result<TextNormalizer> {
        TextNormalizer::new(self.normalizer.clone(), lexicon)
    }

    /// Persist the pipeline as JSON, atomically: the bytes land in a
    /// sibling temp file first and only a successful write is renamed
    /// over the destination.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("tmp");
        let json = serde_json::to_vec_pretty(self)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        info!("saved pipeline artifact to {}", path.display());
        Ok(())
    }

    /// Load a pipeline artifact, rejecting unknown format versions.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let pipeline: SentimentPipeline = serde_json::from_slice(&bytes)?;
        if pipeline.version != ARTIFACT_VERSION {
            return Err(SentimenError::model(format!(
                "unsupported artifact version {} in {} (expected {})",
                pipeline.version,
                path.display(),
                ARTIFACT_VERSION
            )));
        }

        info!(
            "loaded pipeline artifact from {} ({} labels, {} features)",
            path.display(),
            pipeline.labels.len(),
            pipeline.vectorizer.vocabulary_size()
        );
        Ok(pipeline)
    }
}
