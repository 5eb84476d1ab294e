//! Review corpus loading and labeling.
//!
//! The training corpus is tabular: a `content` text column, an optional
//! numeric `score` (1-5 stars), and an optional `sentiment` label column
//! holding one of the three class strings. Deriving labels from scores is a
//! boundary concern, deliberately outside the trainer; it lives here as
//! [`map_score_to_sentiment`] and is wired to the `label` CLI command.

use std::path::Path;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The positive class label.
pub const LABEL_POSITIVE: &str = "positif";
/// The neutral class label.
pub const LABEL_NEUTRAL: &str = "netral";
/// The negative class label.
pub const LABEL_NEGATIVE: &str = "negatif";

/// The three class labels in their stable (lexicographic) order.
pub const SENTIMENT_LABELS: [&str; 3] = [LABEL_NEGATIVE, LABEL_NEUTRAL, LABEL_POSITIVE];

/// One free-text product review, immutable once read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawReview {
    /// The review text.
    pub content: String,
    /// Star rating, 1-5, when the source provides one.
    #[serde(default)]
    pub score: Option<f64>,
    /// Sentiment label, when already derived.
    #[serde(default)]
    pub sentiment: Option<String>,
}

impl RawReview {
    /// Create a labeled review.
    pub fn labeled<S: Into<String>, L: Into<String>>(content: S, sentiment: L) -> Self {
        RawReview {
            content: content.into(),
            score: None,
            sentiment: Some(sentiment.into()),
        }
    }
}

/// Map a star rating to a coarse sentiment label: `>= 4` positive, `<= 2`
/// negative, everything else (including a missing or unparsable score)
/// neutral.
pub fn map_score_to_sentiment(score: Option<f64>) -> &'static str {
    match score {
        Some(s) if s >= 4.0 => LABEL_POSITIVE,
        Some(s) if s <= 2.0 => LABEL_NEGATIVE,
        Some(_) => LABEL_NEUTRAL,
        None => LABEL_NEUTRAL,
    }
}

/// Load a review corpus from a CSV file with a header row.
///
/// Columns other than `content`, `score`, and `sentiment` are ignored, so
/// scraped exports with reviewer metadata load as-is.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<RawReview>> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path.as_ref())?;

    let mut reviews = Vec::new();
    for record in reader.deserialize() {
        let review: RawReview = record?;
        reviews.push(review);
    }
    Ok(reviews)
}

/// Write a review corpus to a CSV file.
pub fn write_csv<P: AsRef<Path>>(path: P, reviews: &[RawReview]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for review in reviews {
        writer.serialize(review)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_score_mapping() {
        assert_eq!(map_score_to_sentiment(Some(5.0)), LABEL_POSITIVE);
        assert_eq!(map_score_to_sentiment(Some(4.0)), LABEL_POSITIVE);
        assert_eq!(map_score_to_sentiment(Some(3.0)), LABEL_NEUTRAL);
        assert_eq!(map_score_to_sentiment(Some(2.0)), LABEL_NEGATIVE);
        assert_eq!(map_score_to_sentiment(Some(1.0)), LABEL_NEGATIVE);
        assert_eq!(map_score_to_sentiment(None), LABEL_NEUTRAL);
    }

    #[test]
    fn test_labels_are_sorted() {
        let mut sorted = SENTIMENT_LABELS;
        sorted.sort_unstable();
        assert_eq!(sorted, SENTIMENT_LABELS);
    }

    #[test]
    fn test_load_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "userName,content,score,sentiment").unwrap();
        writeln!(file, "a,\"Aplikasi bagus\",5,positif").unwrap();
        writeln!(file, "b,\"Error terus\",1,negatif").unwrap();
        writeln!(file, "c,\"Biasa saja\",,").unwrap();
        drop(file);

        let reviews = load_csv(&path).unwrap();
        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[0].content, "Aplikasi bagus");
        assert_eq!(reviews[0].score, Some(5.0));
        assert_eq!(reviews[0].sentiment.as_deref(), Some("positif"));
        assert_eq!(reviews[2].score, None);
    }

    #[test]
    fn test_csv_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let reviews = vec![
            RawReview {
                content: "Mantap".to_string(),
                score: Some(5.0),
                sentiment: Some(LABEL_POSITIVE.to_string()),
            },
            RawReview::labeled("Jelek", LABEL_NEGATIVE),
        ];
        write_csv(&path, &reviews).unwrap();

        let back = load_csv(&path).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back[1].sentiment.as_deref(), Some(LABEL_NEGATIVE));
    }
}
