//! Probability calibration analysis.
//!
//! A method is calibrated when its stated confidence matches its
//! empirical accuracy: among claims it judges with confidence 0.8 it
//! should be right about 80% of the time. This module bins predictions
//! by confidence and reports three complementary measures:
//!
//! - expected calibration error (ECE): the bin-count-weighted mean of
//!   `|avg confidence - accuracy|` over non-empty bins,
//! - Brier score: the mean squared distance between confidence and the
//!   0/1 truth label,
//! - overconfidence: mean confidence minus overall accuracy (positive
//!   means the method claims more certainty than it earns).
//!
//! Bins partition `[0, 1]` into equal widths; the last bin is closed
//! on both ends so a confidence of exactly 1.0 is counted rather than
//! silently dropped.

use crate::error::EvalError;
use crate::metrics::{ratio, validate_inputs};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Number of equal-width confidence bins used by [`CalibrationReport::analyze`].
pub const DEFAULT_BIN_COUNT: usize = 10;

/// One non-empty confidence bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationBin {
    /// Inclusive lower confidence bound.
    pub lower: f64,
    /// Upper confidence bound; exclusive except for the last bin.
    pub upper: f64,
    /// Mean confidence of the samples in this bin.
    pub avg_confidence: f64,
    /// Fraction of the samples in this bin predicted correctly.
    pub accuracy: f64,
    /// Number of samples in this bin.
    pub count: usize,
}

/// Calibration quality of one named method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationReport {
    /// Name of the evaluated method.
    pub method: String,
    /// Bin-weighted mean gap between confidence and accuracy.
    pub expected_calibration_error: f64,
    /// Mean squared distance between confidence and the truth label.
    pub brier_score: f64,
    /// Mean confidence minus overall accuracy.
    pub overconfidence: f64,
    /// The non-empty bins, in ascending confidence order.
    pub bins: Vec<CalibrationBin>,
}

impl CalibrationReport {
    /// Analyzes calibration with [`DEFAULT_BIN_COUNT`] bins.
    pub fn analyze(
        method: impl Into<String>,
        predictions: &[bool],
        confidences: &[f64],
        ground_truth: &[bool],
    ) -> Result<Self> {
        Self::analyze_with_bins(method, predictions, confidences, ground_truth, DEFAULT_BIN_COUNT)
    }

    /// Analyzes calibration with an explicit bin count.
    pub fn analyze_with_bins(
        method: impl Into<String>,
        predictions: &[bool],
        confidences: &[f64],
        ground_truth: &[bool],
        bin_count: usize,
    ) -> Result<Self> {
        if bin_count == 0 {
            return Err(EvalError::InvalidBinCount(bin_count));
        }
        validate_inputs(predictions, confidences, ground_truth)?;

        let total = predictions.len();
        let mut counts = vec![0usize; bin_count];
        let mut confidence_sums = vec![0.0f64; bin_count];
        let mut correct = vec![0usize; bin_count];

        let mut brier_sum = 0.0;
        let mut confidence_sum = 0.0;
        let mut correct_total = 0usize;

        for ((&predicted, &confidence), &truth) in
            predictions.iter().zip(confidences).zip(ground_truth)
        {
            // Out-of-range confidences land in the edge bins.
            let bounded = confidence.clamp(0.0, 1.0);
            let index = bin_index(bounded, bin_count);
            counts[index] += 1;
            confidence_sums[index] += confidence;
            if predicted == truth {
                correct[index] += 1;
                correct_total += 1;
            }

            let label = if truth { 1.0 } else { 0.0 };
            brier_sum += (confidence - label) * (confidence - label);
            confidence_sum += confidence;
        }

        let mut bins = Vec::new();
        let mut ece = 0.0;
        for index in 0..bin_count {
            if counts[index] == 0 {
                continue;
            }
            let avg_confidence = confidence_sums[index] / counts[index] as f64;
            let accuracy = ratio(correct[index], counts[index]);
            ece += counts[index] as f64 / total as f64 * (avg_confidence - accuracy).abs();
            bins.push(CalibrationBin {
                lower: index as f64 / bin_count as f64,
                upper: (index + 1) as f64 / bin_count as f64,
                avg_confidence,
                accuracy,
                count: counts[index],
            });
        }

        let mean_confidence = confidence_sum / total as f64;
        Ok(Self {
            method: method.into(),
            expected_calibration_error: ece,
            brier_score: brier_sum / total as f64,
            overconfidence: mean_confidence - ratio(correct_total, total),
            bins,
        })
    }
}

/// Maps a confidence in `[0, 1]` to its bin.
///
/// Membership is `lower <= c < upper` for every bin except the last,
/// which also includes its upper bound.
fn bin_index(confidence: f64, bin_count: usize) -> usize {
    for index in 0..bin_count {
        let upper = (index + 1) as f64 / bin_count as f64;
        if confidence < upper {
            return index;
        }
    }
    bin_count - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfectly_calibrated_method_has_zero_ece() {
        // Four samples at confidence 0.75, three of them correct: the
        // one occupied bin has avg confidence == accuracy exactly.
        let predictions = [true, true, true, true];
        let confidences = [0.75, 0.75, 0.75, 0.75];
        let truth = [true, true, true, false];
        let report =
            CalibrationReport::analyze("calibrated", &predictions, &confidences, &truth).unwrap();
        assert!(report.expected_calibration_error.abs() < 1e-12);
        assert!(report.overconfidence.abs() < 1e-12);
        assert!((report.brier_score - 0.1875).abs() < 1e-12);
        assert_eq!(report.bins.len(), 1);
        assert_eq!(report.bins[0].count, 4);
    }

    #[test]
    fn test_overconfident_method_has_positive_ece() {
        let predictions = [true, true, true, true];
        let confidences = [0.9, 0.9, 0.9, 0.9];
        let truth = [true, true, false, false];
        let report =
            CalibrationReport::analyze("cocky", &predictions, &confidences, &truth).unwrap();
        assert!((report.expected_calibration_error - 0.4).abs() < 1e-12);
        assert!((report.overconfidence - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_confidence_of_exactly_one_is_counted() {
        let report =
            CalibrationReport::analyze("certain", &[true], &[1.0], &[true]).unwrap();
        assert_eq!(report.bins.len(), 1);
        assert_eq!(report.bins[0].count, 1);
        assert!((report.bins[0].upper - 1.0).abs() < f64::EPSILON);
        assert!(report.expected_calibration_error.abs() < 1e-12);
    }

    #[test]
    fn test_brier_score_measures_distance_to_truth_label() {
        // Full confidence on a false claim is the worst possible score
        // regardless of what verdict was predicted.
        let report =
            CalibrationReport::analyze("wrong", &[false], &[1.0], &[false]).unwrap();
        assert!((report.brier_score - 1.0).abs() < f64::EPSILON);

        let report =
            CalibrationReport::analyze("right", &[true, false], &[1.0, 0.0], &[true, false])
                .unwrap();
        assert!(report.brier_score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_bins_partition_the_unit_interval() {
        let confidences: Vec<f64> = (0..10).map(|i| 0.05 + 0.1 * i as f64).collect();
        let predictions = vec![true; 10];
        let truth = vec![true; 10];
        let report = CalibrationReport::analyze("spread", &predictions, &confidences, &truth)
            .unwrap();
        assert_eq!(report.bins.len(), 10);
        assert!(report.bins.iter().all(|bin| bin.count == 1));
        assert!((report.bins[0].lower).abs() < f64::EPSILON);
        assert!((report.bins[9].upper - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_bins_is_rejected() {
        let err = CalibrationReport::analyze_with_bins("bad", &[true], &[0.5], &[true], 0)
            .unwrap_err();
        assert_eq!(err, EvalError::InvalidBinCount(0));
    }

    #[test]
    fn test_shape_errors_surface_before_analysis() {
        let err = CalibrationReport::analyze("bad", &[true], &[0.5, 0.6], &[true]).unwrap_err();
        assert!(matches!(err, EvalError::LengthMismatch { .. }));
        let err = CalibrationReport::analyze("empty", &[], &[], &[]).unwrap_err();
        assert_eq!(err, EvalError::Empty);
    }
}
