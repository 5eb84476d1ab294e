//! Command implementations for the sentimen CLI.

use std::collections::BTreeMap;
use std::io::{self, BufRead};
use std::sync::Arc;
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::{self, map_score_to_sentiment};
use crate::error::{Result, SentimenError};
use crate::lexicon::Lexicon;
use crate::ml::evaluate;
use crate::pipeline::{select_backend, SentimentBackend, Trainer, TrainerConfig};

/// Execute a CLI command.
pub fn execute_command(args: SentimenArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train_model(train_args.clone(), &args),
        Command::Predict(predict_args) => predict_text(predict_args.clone(), &args),
        Command::Evaluate(evaluate_args) => evaluate_model(evaluate_args.clone(), &args),
        Command::Label(label_args) => label_reviews(label_args.clone(), &args),
    }
}

/// Train a model from a labeled CSV and persist the artifact.
fn train_model(args: TrainArgs, cli_args: &SentimenArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Training model from: {}", args.data_file.display());
    }

    let start_time = Instant::now();
    let reviews = corpus::load_csv(&args.data_file)?;
    if cli_args.verbosity() > 1 {
        println!("Loaded {} reviews", reviews.len());
    }

    let mut config = TrainerConfig {
        max_features: args.max_features,
        validation_split: args.validation_split,
        seed: args.seed,
        ..TrainerConfig::default()
    };
    if let Some(max_iter) = args.max_iter {
        config.training.max_iter = max_iter;
    }

    let trainer = Trainer::new(config, Arc::new(Lexicon::indonesian()));
    let pipeline = trainer.train(&reviews)?;
    pipeline.save(&args.output)?;

    let metadata = pipeline.metadata();
    let duration = start_time.elapsed();
    output_result(
        "Training complete",
        &TrainingResult {
            model_path: args.output.display().to_string(),
            train_examples: metadata.train_examples,
            validation_examples: metadata.validation_examples,
            labels: pipeline.labels().to_vec(),
            vocabulary_size: pipeline.vectorizer().vocabulary_size(),
            validation_accuracy: metadata.validation.as_ref().map(|v| v.accuracy),
            validation_macro_f1: metadata.validation.as_ref().map(|v| v.macro_f1),
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Classify a text, or newline-separated texts read from stdin.
fn predict_text(args: PredictArgs, cli_args: &SentimenArgs) -> Result<()> {
    let lexicon = Arc::new(Lexicon::indonesian());
    let predictor = select_backend(&args.model, lexicon)?;

    if let Some(text) = &args.text {
        let prediction = predictor.predict(text);
        return output_result(
            "Prediction",
            &PredictionResult {
                text: text.clone(),
                label: prediction.label,
                probabilities: prediction.probabilities,
            },
            cli_args,
        );
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let prediction = predictor.predict(&line);
        output_result(
            "Prediction",
            &PredictionResult {
                text: line,
                label: prediction.label,
                probabilities: prediction.probabilities,
            },
            cli_args,
        )?;
    }
    Ok(())
}

/// Score a trained model against a labeled CSV.
fn evaluate_model(args: EvaluateArgs, cli_args: &SentimenArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Evaluating against: {}", args.data_file.display());
    }

    let lexicon = Arc::new(Lexicon::indonesian());
    let predictor = select_backend(&args.model, lexicon)?;
    let labels = predictor.pipeline().labels().to_vec();
    let label_index: BTreeMap<&str, usize> = labels
        .iter()
        .enumerate()
        .map(|(i, l)| (l.as_str(), i))
        .collect();

    let reviews = corpus::load_csv(&args.data_file)?;
    let mut y_true = Vec::new();
    let mut y_pred = Vec::new();
    let mut skipped = 0usize;
    for review in &reviews {
        // Unlabeled rows and labels the model was never trained on
        // cannot be scored.
        let Some(index) = review
            .sentiment
            .as_deref()
            .and_then(|l| label_index.get(l).copied())
        else {
            skipped += 1;
            continue;
        };
        y_true.push(index);
        y_pred.push(label_index[predictor.predict(&review.content).label.as_str()]);
    }
    if y_true.is_empty() {
        return Err(SentimenError::corpus(
            "no reviews with a label known to the model",
        ));
    }

    let report = evaluate(&y_true, &y_pred, &labels);
    output_result(
        "Evaluation complete",
        &EvaluationResult {
            model_path: SentimentBackend::name(&predictor).to_string(),
            examples: y_true.len(),
            skipped,
            accuracy: report.accuracy,
            macro_precision: report.macro_precision,
            macro_recall: report.macro_recall,
            macro_f1: report.macro_f1,
            report: report.to_string(),
        },
        cli_args,
    )
}

/// Derive sentiment labels from star ratings and write a labeled CSV.
fn label_reviews(args: LabelArgs, cli_args: &SentimenArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Labeling reviews from: {}", args.input_file.display());
    }

    let mut reviews = corpus::load_csv(&args.input_file)?;
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for review in &mut reviews {
        if review.sentiment.is_none() || args.force {
            review.sentiment = Some(map_score_to_sentiment(review.score).to_string());
        }
        if let Some(label) = &review.sentiment {
            *counts.entry(label.clone()).or_insert(0) += 1;
        }
    }
    corpus::write_csv(&args.output, &reviews)?;

    output_result(
        "Labeling complete",
        &LabelingResult {
            output_path: args.output.display().to_string(),
            rows: reviews.len(),
            counts,
        },
        cli_args,
    )
}
