//! # Sentimen
//!
//! Sentiment classification for Indonesian product reviews.
//!
//! ## Features
//!
//! - Staged text normalization for informal Indonesian (slang, emoticons,
//!   dictionary-validated stemming)
//! - TF-IDF feature extraction with a capped vocabulary
//! - Multinomial logistic regression with balanced class weights
//! - A single versioned model artifact shared by training and inference
//!
//! ```no_run
//! use std::sync::Arc;
//! use sentimen::corpus::RawReview;
//! use sentimen::lexicon::Lexicon;
//! use sentimen::pipeline::{Predictor, Trainer, TrainerConfig};
//!
//! # fn main() -> sentimen::error::Result<()> {
//! let lexicon = Arc::new(Lexicon::indonesian());
//! let reviews = vec![
//!     RawReview::labeled("Aplikasi bagus dan cepat", "positif"),
//!     RawReview::labeled("Error terus, kecewa", "negatif"),
//! ];
//! let pipeline = Trainer::new(TrainerConfig::default(), lexicon.clone()).train(&reviews)?;
//! let predictor = Predictor::from_pipeline(pipeline, lexicon)?;
//! let prediction = predictor.predict("Gk bagus :(");
//! println!("{}", prediction.label);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod lexicon;
pub mod ml;
pub mod pipeline;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
