//! Training orchestration: normalize a labeled corpus, fit the vectorizer
//! and classifier, evaluate a stratified holdout, and assemble the
//! persistable pipeline.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::analysis::{NormalizerConfig, TextNormalizer};
use crate::corpus::RawReview;
use crate::error::{Result, SentimenError};
use crate::lexicon::Lexicon;
use crate::ml::{
    evaluate, SoftmaxClassifier, TfIdfVectorizer, TrainingOptions, DEFAULT_MAX_FEATURES,
};
use crate::pipeline::{PipelineMetadata, SentimentPipeline};

/// Default fraction of the corpus held out for validation.
pub const DEFAULT_VALIDATION_SPLIT: f64 = 0.2;

/// Default RNG seed for the stratified split, so repeated runs over the
/// same corpus produce the same model.
pub const DEFAULT_SEED: u64 = 42;

/// Knobs for a training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Normalizer stage configuration, recorded into the artifact.
    pub normalizer: NormalizerConfig,
    /// Vocabulary cap for the vectorizer.
    pub max_features: usize,
    /// Gradient-descent options for the classifier.
    pub training: TrainingOptions,
    /// Fraction of each class held out for validation. Zero disables
    /// the holdout entirely.
    pub validation_split: f64,
    /// Seed for the split shuffle.
    pub seed: u64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            normalizer: NormalizerConfig::default(),
            max_features: DEFAULT_MAX_FEATURES,
            training: TrainingOptions::default(),
            validation_split: DEFAULT_VALIDATION_SPLIT,
            seed: DEFAULT_SEED,
        }
    }
}

/// Fits a [`SentimentPipeline`] from labeled reviews.
pub struct Trainer {
    config: TrainerConfig,
    lexicon: Arc<Lexicon>,
}

impl Trainer {
    pub fn new(config: TrainerConfig, lexicon: Arc<Lexicon>) -> Self {
        Trainer { config, lexicon }
    }

    /// Train a pipeline on a labeled corpus.
    ///
    /// Every review must carry a sentiment label; deriving labels from
    /// scores is the `label` command's job, not the trainer's. Reviews
    /// whose text normalizes to the empty string are dropped before the
    /// split, with the count logged.
    pub fn train(&self, reviews: &[RawReview]) -> Result<SentimentPipeline> {
        if reviews.is_empty() {
            return Err(SentimenError::corpus("training corpus is empty"));
        }

        let normalizer = TextNormalizer::new(self.config.normalizer.clone(), self.lexicon.clone())?;

        let mut texts = Vec::with_capacity(reviews.len());
        let mut raw_labels = Vec::with_capacity(reviews.len());
        let mut dropped = 0usize;
        for (row, review) in reviews.iter().enumerate() {
            let label = review.sentiment.as_deref().ok_or_else(|| {
                SentimenError::corpus(format!(
                    "review at row {row} has no sentiment label; run `label` first"
                ))
            })?;
            let normalized = normalizer.normalize(&review.content);
            if normalized.is_empty() {
                dropped += 1;
                continue;
            }
            texts.push(normalized);
            raw_labels.push(label.to_string());
        }
        if dropped > 0 {
            debug!("dropped {dropped} reviews that normalized to empty text");
        }
        if texts.is_empty() {
            return Err(SentimenError::corpus(
                "no reviews left after normalization",
            ));
        }

        // Class labels in lexicographic order; the classifier's output
        // index i is labels[i].
        let labels: Vec<String> = {
            let unique: BTreeMap<&str, ()> =
                raw_labels.iter().map(|l| (l.as_str(), ())).collect();
            unique.keys().map(|l| l.to_string()).collect()
        };
        if labels.len() < 2 {
            return Err(SentimenError::corpus(format!(
                "need at least two distinct sentiment labels, found {}",
                labels.len()
            )));
        }
        let label_index: BTreeMap<&str, usize> = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.as_str(), i))
            .collect();
        let y_all: Vec<usize> = raw_labels.iter().map(|l| label_index[l.as_str()]).collect();

        let (train_idx, val_idx) = self.stratified_split(&y_all, labels.len());
        info!(
            "training on {} examples, validating on {} ({} classes)",
            train_idx.len(),
            val_idx.len(),
            labels.len()
        );

        let train_texts: Vec<String> = train_idx.iter().map(|&i| texts[i].clone()).collect();
        let y_train: Vec<usize> = train_idx.iter().map(|&i| y_all[i]).collect();

        // The vectorizer only ever sees the training portion, so holdout
        // metrics are honest.
        let mut vectorizer = TfIdfVectorizer::with_max_features(self.config.max_features);
        vectorizer.fit(&train_texts)?;
        let x_train: Vec<Vec<f64>> = train_texts.iter().map(|t| vectorizer.transform(t)).collect();

        let mut classifier = SoftmaxClassifier::new(labels.len(), vectorizer.vocabulary_size());
        let report = classifier.fit(&x_train, &y_train, &self.config.training)?;
        info!(
            "classifier fitted in {} iterations (final loss {:.6})",
            report.iterations, report.final_loss
        );

        let validation = if val_idx.is_empty() {
            None
        } else {
            let y_val: Vec<usize> = val_idx.iter().map(|&i| y_all[i]).collect();
            let y_pred: Vec<usize> = val_idx
                .iter()
                .map(|&i| classifier.predict(&vectorizer.transform(&texts[i])).0)
                .collect();
            let eval = evaluate(&y_val, &y_pred, &labels);
            info!(
                "validation accuracy {:.4}, macro F1 {:.4}",
                eval.accuracy, eval.macro_f1
            );
            Some(eval)
        };
        if validation.is_none() && self.config.validation_split > 0.0 {
            warn!("corpus too small for a validation holdout, skipping evaluation");
        }

        let metadata = PipelineMetadata {
            trained_at: Utc::now(),
            train_examples: train_idx.len(),
            validation_examples: val_idx.len(),
            validation,
        };
        Ok(SentimentPipeline::new(
            self.config.normalizer.clone(),
            vectorizer,
            classifier,
            labels,
            metadata,
        ))
    }

    /// Split example indices into train and validation sets, shuffling
    /// within each class so both sides keep the corpus class mix. Classes
    /// with a single example stay entirely in the training set.
    fn stratified_split(&self, y: &[usize], n_classes: usize) -> (Vec<usize>, Vec<usize>) {
        let mut by_class: Vec<Vec<usize>> = vec![Vec::new(); n_classes];
        for (i, &label) in y.iter().enumerate() {
            by_class[label].push(i);
        }

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut train = Vec::new();
        let mut val = Vec::new();
        for mut members in by_class {
            members.shuffle(&mut rng);
            let n_val = if members.len() < 2 {
                0
            } else {
                // Round like a fraction, but always leave at least one
                // training example per class.
                ((members.len() as f64) * self.config.validation_split)
                    .round()
                    .min((members.len() - 1) as f64) as usize
            };
            let split = members.len() - n_val;
            train.extend_from_slice(&members[..split]);
            val.extend_from_slice(&members[split..]);
        }
        train.sort_unstable();
        val.sort_unstable();
        (train, val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{LABEL_NEGATIVE, LABEL_POSITIVE, SENTIMENT_LABELS};

    fn labeled_corpus() -> Vec<RawReview> {
        let positive = [
            "Aplikasi ini sangat membantu, respons cepat dan akurat",
            "Bagus sekali, sangat puas dengan layanan ini",
            "Mantap, fitur lengkap dan mudah dipakai",
            "Sangat bagus, proses cepat dan akurat",
            "Puas sekali, aplikasi membantu pekerjaan saya",
        ];
        let negative = [
            "Gk ngerti pakai ini, error terus :(",
            "Jelek sekali, sering error dan lambat",
            "Aplikasi lambat, tidak bisa dipakai",
            "Kecewa, error terus menerus",
            "Tidak bagus, proses lambat sekali",
        ];
        let mut reviews = Vec::new();
        for text in positive {
            reviews.push(RawReview::labeled(text, LABEL_POSITIVE));
        }
        for text in negative {
            reviews.push(RawReview::labeled(text, LABEL_NEGATIVE));
        }
        reviews
    }

    #[test]
    fn test_train_produces_sorted_labels() {
        let trainer = Trainer::new(TrainerConfig::default(), Arc::new(Lexicon::indonesian()));
        let pipeline = trainer.train(&labeled_corpus()).unwrap();

        let mut sorted = pipeline.labels().to_vec();
        sorted.sort();
        assert_eq!(pipeline.labels(), sorted.as_slice());
        assert_eq!(pipeline.labels(), &[LABEL_NEGATIVE, LABEL_POSITIVE]);
    }

    #[test]
    fn test_train_rejects_unlabeled_reviews() {
        let mut reviews = labeled_corpus();
        reviews.push(RawReview {
            content: "tanpa label".to_string(),
            score: Some(3.0),
            sentiment: None,
        });

        let trainer = Trainer::new(TrainerConfig::default(), Arc::new(Lexicon::indonesian()));
        let err = trainer.train(&reviews).unwrap_err();
        assert!(matches!(err, SentimenError::Corpus(_)));
    }

    #[test]
    fn test_train_rejects_empty_corpus() {
        let trainer = Trainer::new(TrainerConfig::default(), Arc::new(Lexicon::indonesian()));
        assert!(matches!(
            trainer.train(&[]).unwrap_err(),
            SentimenError::Corpus(_)
        ));
    }

    #[test]
    fn test_train_rejects_single_class() {
        let reviews: Vec<RawReview> = (0..5)
            .map(|i| RawReview::labeled(format!("bagus sekali nomor {i}"), LABEL_POSITIVE))
            .collect();
        let trainer = Trainer::new(TrainerConfig::default(), Arc::new(Lexicon::indonesian()));
        assert!(matches!(
            trainer.train(&reviews).unwrap_err(),
            SentimenError::Corpus(_)
        ));
    }

    #[test]
    fn test_train_is_deterministic() {
        let lexicon = Arc::new(Lexicon::indonesian());
        let corpus = labeled_corpus();

        let a = Trainer::new(TrainerConfig::default(), lexicon.clone())
            .train(&corpus)
            .unwrap();
        let b = Trainer::new(TrainerConfig::default(), lexicon)
            .train(&corpus)
            .unwrap();

        assert_eq!(a.metadata().train_examples, b.metadata().train_examples);
        let va = a.metadata().validation.as_ref().unwrap();
        let vb = b.metadata().validation.as_ref().unwrap();
        assert_eq!(va.accuracy, vb.accuracy);
    }

    #[test]
    fn test_stratified_split_proportions() {
        let trainer = Trainer::new(TrainerConfig::default(), Arc::new(Lexicon::indonesian()));
        let y: Vec<usize> = std::iter::repeat_n(0, 50)
            .chain(std::iter::repeat_n(1, 30))
            .chain(std::iter::repeat_n(2, 20))
            .collect();

        let (train, val) = trainer.stratified_split(&y, 3);
        assert_eq!(train.len() + val.len(), 100);
        assert_eq!(val.len(), 20);
        assert_eq!(val.iter().filter(|&&i| y[i] == 0).count(), 10);
        assert_eq!(val.iter().filter(|&&i| y[i] == 1).count(), 6);
        assert_eq!(val.iter().filter(|&&i| y[i] == 2).count(), 4);
    }

    #[test]
    fn test_singleton_class_stays_in_training() {
        let trainer = Trainer::new(TrainerConfig::default(), Arc::new(Lexicon::indonesian()));
        let y = vec![0, 0, 0, 0, 0, 1];
        let (train, val) = trainer.stratified_split(&y, 2);
        assert!(train.contains(&5));
        assert!(!val.contains(&5));
    }

    #[test]
    fn test_three_class_labels_match_constants() {
        let mut reviews = labeled_corpus();
        for i in 0..4 {
            reviews.push(RawReview::labeled(
                format!("biasa saja lumayan nomor {i}"),
                "netral",
            ));
        }
        let trainer = Trainer::new(TrainerConfig::default(), Arc::new(Lexicon::indonesian()));
        let pipeline = trainer.train(&reviews).unwrap();
        assert_eq!(pipeline.labels(), &SENTIMENT_LABELS);
    }
}
