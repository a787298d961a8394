//! Confusion-matrix metrics.

use crate::error::EvalError;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Validates the three parallel input slices.
///
/// Shape problems are caller bugs and surface before any computation;
/// checked in every public entry point of this crate.
pub(crate) fn validate_inputs(
    predictions: &[bool],
    confidences: &[f64],
    ground_truth: &[bool],
) -> Result<()> {
    if predictions.len() != confidences.len() || predictions.len() != ground_truth.len() {
        return Err(EvalError::LengthMismatch {
            predictions: predictions.len(),
            confidences: confidences.len(),
            labels: ground_truth.len(),
        });
    }
    if predictions.is_empty() {
        return Err(EvalError::Empty);
    }
    Ok(())
}

/// Ratio with the conventional zero-denominator guard.
pub(crate) fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// The four cells of a binary confusion matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    /// Predicted true, actually true.
    pub true_positives: usize,
    /// Predicted false, actually false.
    pub true_negatives: usize,
    /// Predicted true, actually false.
    pub false_positives: usize,
    /// Predicted false, actually true.
    pub false_negatives: usize,
}

impl ConfusionCounts {
    /// Total number of claims counted.
    pub fn total(&self) -> usize {
        self.true_positives + self.true_negatives + self.false_positives + self.false_negatives
    }

    /// Number of correct predictions.
    pub fn correct(&self) -> usize {
        self.true_positives + self.true_negatives
    }
}

/// Standard classification metrics for one named method.
///
/// Zero denominators resolve to `0.0` (a method that never predicts
/// true has zero precision, not undefined precision), so reports can
/// always be compared and sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Name of the evaluated method.
    pub method: String,
    /// Fraction of claims predicted correctly.
    pub accuracy: f64,
    /// `TP / (TP + FP)`.
    pub precision: f64,
    /// `TP / (TP + FN)`.
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub f1: f64,
    /// Mean of the supplied confidences.
    pub average_confidence: f64,
    /// The underlying confusion matrix.
    pub counts: ConfusionCounts,
}

impl EvaluationReport {
    /// Computes the report for one method.
    ///
    /// The three slices are parallel per claim. Shape problems are
    /// typed errors; see [`EvalError`].
    pub fn compute(
        method: impl Into<String>,
        predictions: &[bool],
        confidences: &[f64],
        ground_truth: &[bool],
    ) -> Result<Self> {
        validate_inputs(predictions, confidences, ground_truth)?;

        let mut counts = ConfusionCounts::default();
        for (&predicted, &truth) in predictions.iter().zip(ground_truth) {
            match (predicted, truth) {
                (true, true) => counts.true_positives += 1,
                (false, false) => counts.true_negatives += 1,
                (true, false) => counts.false_positives += 1,
                (false, true) => counts.false_negatives += 1,
            }
        }

        let precision = ratio(
            counts.true_positives,
            counts.true_positives + counts.false_positives,
        );
        let recall = ratio(
            counts.true_positives,
            counts.true_positives + counts.false_negatives,
        );
        let f1 = if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        };

        Ok(Self {
            method: method.into(),
            accuracy: ratio(counts.correct(), counts.total()),
            precision,
            recall,
            f1,
            average_confidence: confidences.iter().sum::<f64>() / confidences.len() as f64,
            counts,
        })
    }
}
