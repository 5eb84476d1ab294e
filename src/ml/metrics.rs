//! Evaluation metrics for multi-class classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Precision/recall/F1 for a single class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of true examples of this class.
    pub support: usize,
}

/// Per-class and aggregate evaluation results for one prediction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Class labels in the order used by `per_class` and `confusion`.
    pub labels: Vec<String>,
    pub per_class: Vec<ClassMetrics>,
    pub accuracy: f64,
    pub macro_precision: f64,
    pub macro_recall: f64,
    pub macro_f1: f64,
    /// `confusion[true][predicted]` counts.
    pub confusion: Vec<Vec<usize>>,
}

/// Compute an evaluation report from parallel slices of true and predicted
/// class indices. Classes absent from both slices get zero metrics with
/// zero support.
pub fn evaluate(y_true: &[usize], y_pred: &[usize], labels: &[String]) -> EvaluationReport {
    let k = labels.len();
    let mut confusion = vec![vec![0usize; k]; k];
    for (&truth, &pred) in y_true.iter().zip(y_pred.iter()) {
        confusion[truth][pred] += 1;
    }

    let mut per_class = Vec::with_capacity(k);
    for class in 0..k {
        let tp = confusion[class][class];
        let fp: usize = (0..k).filter(|&c| c != class).map(|c| confusion[c][class]).sum();
        let fn_: usize = (0..k).filter(|&c| c != class).map(|c| confusion[class][c]).sum();
        let support = tp + fn_;

        let precision = if tp + fp > 0 {
            tp as f64 / (tp + fp) as f64
        } else {
            0.0
        };
        let recall = if support > 0 {
            tp as f64 / support as f64
        } else {
            0.0
        };
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        per_class.push(ClassMetrics {
            precision,
            recall,
            f1,
            support,
        });
    }

    let correct: usize = (0..k).map(|c| confusion[c][c]).sum();
    let total = y_true.len();
    let accuracy = if total > 0 {
        correct as f64 / total as f64
    } else {
        0.0
    };

    let k_f = k as f64;
    EvaluationReport {
        labels: labels.to_vec(),
        accuracy,
        macro_precision: per_class.iter().map(|m| m.precision).sum::<f64>() / k_f,
        macro_recall: per_class.iter().map(|m| m.recall).sum::<f64>() / k_f,
        macro_f1: per_class.iter().map(|m| m.f1).sum::<f64>() / k_f,
        per_class,
        confusion,
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<12} {:>9} {:>9} {:>9} {:>9}",
            "", "precision", "recall", "f1", "support"
        )?;
        for (label, m) in self.labels.iter().zip(self.per_class.iter()) {
            writeln!(
                f,
                "{:<12} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                label, m.precision, m.recall, m.f1, m.support
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{:<12} {:>39.2}", "accuracy", self.accuracy)?;
        writeln!(
            f,
            "{:<12} {:>9.2} {:>9.2} {:>9.2}",
            "macro avg", self.macro_precision, self.macro_recall, self.macro_f1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["negatif".to_string(), "netral".to_string(), "positif".to_string()]
    }

    #[test]
    fn test_perfect_predictions() {
        let y = vec![0, 1, 2, 0, 1, 2];
        let report = evaluate(&y, &y, &labels());

        assert!((report.accuracy - 1.0).abs() < 1e-12);
        for m in &report.per_class {
            assert!((m.precision - 1.0).abs() < 1e-12);
            assert!((m.recall - 1.0).abs() < 1e-12);
            assert!((m.f1 - 1.0).abs() < 1e-12);
            assert_eq!(m.support, 2);
        }
    }

    #[test]
    fn test_partial_predictions() {
        let y_true = vec![0, 0, 1, 1];
        let y_pred = vec![0, 1, 1, 1];
        let report = evaluate(&y_true, &y_pred, &labels());

        assert!((report.accuracy - 0.75).abs() < 1e-12);
        // Class 0: tp=1, fp=0, fn=1.
        assert!((report.per_class[0].precision - 1.0).abs() < 1e-12);
        assert!((report.per_class[0].recall - 0.5).abs() < 1e-12);
        // Class 1: tp=2, fp=1, fn=0.
        assert!((report.per_class[1].precision - 2.0 / 3.0).abs() < 1e-12);
        assert!((report.per_class[1].recall - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_absent_class_has_zero_support() {
        let y_true = vec![0, 0];
        let y_pred = vec![0, 0];
        let report = evaluate(&y_true, &y_pred, &labels());

        assert_eq!(report.per_class[2].support, 0);
        assert_eq!(report.per_class[2].f1, 0.0);
    }

    #[test]
    fn test_confusion_matrix() {
        let y_true = vec![0, 1, 2];
        let y_pred = vec![2, 1, 2];
        let report = evaluate(&y_true, &y_pred, &labels());

        assert_eq!(report.confusion[0][2], 1);
        assert_eq!(report.confusion[1][1], 1);
        assert_eq!(report.confusion[2][2], 1);
        assert_eq!(report.confusion[0][0], 0);
    }

    #[test]
    fn test_report_display() {
        let report = evaluate(&[0, 1, 2], &[0, 1, 2], &labels());
        let text = report.to_string();
        assert!(text.contains("positif"));
        assert!(text.contains("precision"));
    }
}
