//! TF-IDF vectorizer for text feature extraction.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimenError};

/// Default vocabulary size cap.
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// TF-IDF vectorizer for normalized text.
///
/// Fit once on the training corpus; after that the vocabulary and idf
/// weights never change, so `transform` is deterministic and side-effect
/// free. Tokens outside the vocabulary are silently dropped — by design, not
/// an error.
#[derive(Clone, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> feature index, indices in lexicographic term order.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature index.
    idf: Vec<f64>,
    /// Total number of documents seen during fit.
    n_documents: usize,
    /// Maximum vocabulary size.
    max_features: usize,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("max_features", &self.max_features)
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create an unfitted vectorizer with the default vocabulary cap.
    pub fn new() -> Self {
        Self::with_max_features(DEFAULT_MAX_FEATURES)
    }

    /// Create an unfitted vectorizer with a custom vocabulary cap.
    pub fn with_max_features(max_features: usize) -> Self {
        TfIdfVectorizer {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            max_features,
        }
    }

    /// Fit the vectorizer on the training documents.
    ///
    /// Vocabulary terms are the up-to-`max_features` most frequent terms by
    /// corpus-wide count, ties broken lexicographically; feature indices are
    /// assigned in lexicographic term order so a given corpus always yields
    /// the same mapping.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        if documents.is_empty() {
            return Err(SentimenError::model("cannot fit vectorizer on an empty corpus"));
        }

        self.n_documents = documents.len();

        let mut term_frequency: HashMap<String, u64> = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let tokens: Vec<&str> = doc.split_whitespace().collect();
            for token in &tokens {
                *term_frequency.entry(token.to_string()).or_insert(0) += 1;
            }
            let unique: HashSet<&str> = tokens.into_iter().collect();
            for token in unique {
                *document_frequency.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        // Select terms by corpus frequency (descending), ties lexicographic.
        let mut ranked: Vec<(String, u64)> = term_frequency.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.max_features);

        let mut selected: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        selected.sort();

        let mut vocabulary = HashMap::with_capacity(selected.len());
        let mut idf = Vec::with_capacity(selected.len());
        for (idx, term) in selected.into_iter().enumerate() {
            let df = document_frequency.get(&term).copied().unwrap_or(0);
            // Smoothed idf; never zero or undefined, even for terms present
            // in every document or none.
            idf.push(((1.0 + self.n_documents as f64) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;

        Ok(())
    }

    /// Transform a normalized document into an L2-normalized TF-IDF vector.
    ///
    /// A document with no vocabulary terms maps to the zero vector.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut features = vec![0.0; self.vocabulary.len()];

        for token in document.split_whitespace() {
            if let Some(&idx) = self.vocabulary.get(token) {
                features[idx] += 1.0;
            }
        }

        for (idx, value) in features.iter_mut().enumerate() {
            *value *= self.idf[idx];
        }

        let norm: f64 = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }

        features
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Look up the feature index of a term.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// The idf weight for a feature index.
    pub fn idf(&self, index: usize) -> Option<f64> {
        self.idf.get(index).copied()
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        vec![
            "aplikasi bagus cepat".to_string(),
            "aplikasi lambat error".to_string(),
            "bagus sekali".to_string(),
        ]
    }

    #[test]
    fn test_fit_builds_vocabulary() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&corpus()).unwrap();

        assert_eq!(vectorizer.vocabulary_size(), 6);
        assert!(vectorizer.term_index("aplikasi").is_some());
        assert!(vectorizer.term_index("hilang").is_none());
    }

    #[test]
    fn test_indices_are_lexicographic() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&corpus()).unwrap();

        // aplikasi < bagus < cepat < error < lambat < sekali
        assert_eq!(vectorizer.term_index("aplikasi"), Some(0));
        assert_eq!(vectorizer.term_index("bagus"), Some(1));
        assert_eq!(vectorizer.term_index("sekali"), Some(5));
    }

    #[test]
    fn test_idf_formula() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&corpus()).unwrap();

        // "aplikasi" appears in 2 of 3 documents.
        let idx = vectorizer.term_index("aplikasi").unwrap();
        let expected = (4.0_f64 / 3.0).ln() + 1.0;
        assert!((vectorizer.idf(idx).unwrap() - expected).abs() < 1e-12);

        // "sekali" appears in 1 of 3 documents.
        let idx = vectorizer.term_index("sekali").unwrap();
        let expected = (4.0_f64 / 2.0).ln() + 1.0;
        assert!((vectorizer.idf(idx).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&corpus()).unwrap();

        let features = vectorizer.transform("aplikasi bagus bagus");
        let norm: f64 = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_tokens_dropped() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&corpus()).unwrap();

        let features = vectorizer.transform("tokentakdikenal lainnya");
        assert!(features.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_max_features_cap() {
        let mut vectorizer = TfIdfVectorizer::with_max_features(2);
        vectorizer.fit(&corpus()).unwrap();

        // "aplikasi" and "bagus" both appear twice; everything else once.
        assert_eq!(vectorizer.vocabulary_size(), 2);
        assert!(vectorizer.term_index("aplikasi").is_some());
        assert!(vectorizer.term_index("bagus").is_some());
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let mut vectorizer = TfIdfVectorizer::new();
        assert!(vectorizer.fit(&[]).is_err());
    }
}
