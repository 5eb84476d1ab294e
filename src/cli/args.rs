//! Command line argument parsing for the sentimen CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ml::DEFAULT_MAX_FEATURES;
use crate::pipeline::trainer::{DEFAULT_SEED, DEFAULT_VALIDATION_SPLIT};

/// Sentimen - Indonesian product-review sentiment classification
#[derive(Parser, Debug, Clone)]
#[command(name = "sentimen")]
#[command(about = "Train and run an Indonesian review sentiment classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SentimenArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SentimenArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a sentiment model from a labeled review CSV
    Train(TrainArgs),

    /// Classify one text (or stdin lines) with a trained model
    Predict(PredictArgs),

    /// Evaluate a trained model against a labeled review CSV
    Evaluate(EvaluateArgs),

    /// Derive sentiment labels from star ratings in a review CSV
    Label(LabelArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Labeled review CSV (content, sentiment columns)
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Where to write the model artifact
    #[arg(short, long, default_value = "model.json")]
    pub output: PathBuf,

    /// Vocabulary cap for the TF-IDF vectorizer
    #[arg(long, default_value_t = DEFAULT_MAX_FEATURES)]
    pub max_features: usize,

    /// Maximum gradient-descent iterations
    #[arg(long)]
    pub max_iter: Option<usize>,

    /// Fraction of each class held out for validation
    #[arg(long, default_value_t = DEFAULT_VALIDATION_SPLIT)]
    pub validation_split: f64,

    /// RNG seed for the train/validation split
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Arguments for prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Text to classify; reads newline-separated texts from stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Model artifact paths, tried in order until one loads
    #[arg(short, long, default_value = "model.json")]
    pub model: Vec<PathBuf>,
}

/// Arguments for evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Labeled review CSV to score the model against
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Model artifact paths, tried in order until one loads
    #[arg(short, long, default_value = "model.json")]
    pub model: Vec<PathBuf>,
}

/// Arguments for score-based labeling
#[derive(Parser, Debug, Clone)]
pub struct LabelArgs {
    /// Review CSV with a numeric score column
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Where to write the labeled CSV
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: PathBuf,

    /// Overwrite the sentiment column even where one is present
    #[arg(long)]
    pub force: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
