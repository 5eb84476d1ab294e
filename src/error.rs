//! Error types for the sentimen library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`SentimenError`]. The variants keep operator-facing failure classes
//! apart: a missing label column ([`SentimenError::Corpus`]) is not the same
//! problem as a corrupt model artifact ([`SentimenError::Model`]), and
//! neither should be confused with bad input text — malformed per-text input
//! is never an error at all (the normalizer maps it to the empty string).

use std::io;

use thiserror::Error;

/// The main error type for sentimen operations.
#[derive(Error, Debug)]
pub enum SentimenError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus and configuration errors (missing label column, unreadable
    /// data, no backend available). Fail fast, never retried.
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Analysis-related errors (normalization, lexicon construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Model errors (training, missing/corrupt/incompatible artifact)
    #[error("Model error: {0}")]
    Model(String),

    /// Storage-related errors (artifact persistence)
    #[error("Storage error: {0}")]
    Storage(String),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SentimenError.
pub type Result<T> = std::result::Result<T, SentimenError>;

impl SentimenError {
    /// Create a new corpus/configuration error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        SentimenError::Corpus(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SentimenError::Analysis(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        SentimenError::Model(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        SentimenError::Storage(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SentimenError::Other(msg.into())
    }
}
