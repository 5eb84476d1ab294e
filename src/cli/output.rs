//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SentimenArgs};
use crate::error::Result;

/// Result structure for training.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingResult {
    pub model_path: String,
    pub train_examples: usize,
    pub validation_examples: usize,
    pub labels: Vec<String>,
    pub vocabulary_size: usize,
    pub validation_accuracy: Option<f64>,
    pub validation_macro_f1: Option<f64>,
    pub duration_ms: u64,
}

/// Result structure for a single prediction.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResult {
    pub text: String,
    pub label: String,
    pub probabilities: BTreeMap<String, f64>,
}

/// Result structure for evaluation.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub model_path: String,
    pub examples: usize,
    pub skipped: usize,
    pub accuracy: f64,
    pub macro_precision: f64,
    pub macro_recall: f64,
    pub macro_f1: f64,
    pub report: String,
}

/// Result structure for score-based labeling.
#[derive(Debug, Serialize, Deserialize)]
pub struct LabelingResult {
    pub output_path: String,
    pub rows: usize,
    pub counts: BTreeMap<String, usize>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &SentimenArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &SentimenArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                // Pre-formatted text blocks print as-is.
                if let serde_json::Value::String(s) = &val
                    && s.contains('\n')
                {
                    println!("{key}:");
                    println!("{s}");
                    continue;
                }
                let formatted_val = format_value(&val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(&value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SentimenArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(obj) => {
            let formatted_pairs = obj
                .iter()
                .map(|(k, v)| format!("{k}={}", format_value(v)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{{formatted_pairs}}}")
        }
        serde_json::Value::Null => "null".to_string(),
    }
}
