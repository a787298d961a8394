//! Paired significance testing.
//!
//! Accuracy differences between two methods evaluated on the same
//! claims are not independent samples, so a plain two-proportion test
//! overstates certainty. McNemar's test looks only at the discordant
//! pairs, the claims where exactly one method was right, and asks
//! whether their split could plausibly be chance.

use crate::error::EvalError;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Critical value of the chi-square distribution with one degree of
/// freedom at significance level 0.05.
pub const CHI_SQUARE_1DF_CRITICAL_05: f64 = 3.841;

/// Result of McNemar's test on two paired prediction tracks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct McNemarOutcome {
    /// Continuity-corrected chi-square statistic.
    pub statistic: f64,
    /// Claims both methods predicted correctly.
    pub both_correct: usize,
    /// Claims only the first method predicted correctly.
    pub only_first_correct: usize,
    /// Claims only the second method predicted correctly.
    pub only_second_correct: usize,
    /// Claims both methods predicted incorrectly.
    pub both_wrong: usize,
    /// Whether the statistic exceeds [`CHI_SQUARE_1DF_CRITICAL_05`].
    pub significant: bool,
}

/// Runs McNemar's test with continuity correction.
///
/// The statistic is `(|b - c| - 1)^2 / (b + c)` where `b` and `c` are
/// the discordant counts. With no discordant pairs the methods are
/// indistinguishable and the statistic is 0.
pub fn mcnemar(first: &[bool], second: &[bool], ground_truth: &[bool]) -> Result<McNemarOutcome> {
    if first.len() != second.len() || first.len() != ground_truth.len() {
        return Err(EvalError::PairedLengthMismatch {
            first: first.len(),
            second: second.len(),
            labels: ground_truth.len(),
        });
    }
    if first.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut both_correct = 0usize;
    let mut only_first_correct = 0usize;
    let mut only_second_correct = 0usize;
    let mut both_wrong = 0usize;
    for ((&a, &b), &truth) in first.iter().zip(second).zip(ground_truth) {
        match (a == truth, b == truth) {
            (true, true) => both_correct += 1,
            (true, false) => only_first_correct += 1,
            (false, true) => only_second_correct += 1,
            (false, false) => both_wrong += 1,
        }
    }

    let discordant = only_first_correct + only_second_correct;
    let statistic = if discordant == 0 {
        0.0
    } else {
        let delta = only_first_correct.abs_diff(only_second_correct) as f64;
        (delta - 1.0) * (delta - 1.0) / discordant as f64
    };

    Ok(McNemarOutcome {
        statistic,
        both_correct,
        only_first_correct,
        only_second_correct,
        both_wrong,
        significant: statistic > CHI_SQUARE_1DF_CRITICAL_05,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_predictions_are_never_significant() {
        let predictions = [true, false, true, true, false];
        let truth = [true, false, false, true, true];
        let outcome = mcnemar(&predictions, &predictions, &truth).unwrap();
        assert!(outcome.statistic.abs() < f64::EPSILON);
        assert!(!outcome.significant);
        assert_eq!(outcome.only_first_correct, 0);
        assert_eq!(outcome.only_second_correct, 0);
        assert_eq!(outcome.both_correct + outcome.both_wrong, truth.len());
    }

    #[test]
    fn test_one_sided_disagreement_is_significant() {
        // First method right on all 20 claims, second wrong on all of
        // them: statistic = (20 - 1)^2 / 20 = 18.05.
        let truth = vec![true; 20];
        let first = vec![true; 20];
        let second = vec![false; 20];
        let outcome = mcnemar(&first, &second, &truth).unwrap();
        assert!((outcome.statistic - 18.05).abs() < 1e-12);
        assert!(outcome.significant);
        assert_eq!(outcome.only_first_correct, 20);
        assert_eq!(outcome.only_second_correct, 0);
    }

    #[test]
    fn test_balanced_disagreement_is_not_significant() {
        // Three discordant pairs each way: statistic = 1 / 6.
        let truth = [true, true, true, false, false, false];
        let first = [true, true, true, true, true, true];
        let second = [false, false, false, false, false, false];
        let outcome = mcnemar(&first, &second, &truth).unwrap();
        assert!((outcome.statistic - 1.0 / 6.0).abs() < 1e-12);
        assert!(!outcome.significant);
    }

    #[test]
    fn test_confusion_cells_are_counted_per_pair() {
        let truth = [true, true, false, false];
        let first = [true, false, false, true];
        let second = [true, true, true, true];
        let outcome = mcnemar(&first, &second, &truth).unwrap();
        assert_eq!(outcome.both_correct, 1);
        assert_eq!(outcome.only_first_correct, 1);
        assert_eq!(outcome.only_second_correct, 1);
        assert_eq!(outcome.both_wrong, 1);
    }

    #[test]
    fn test_shape_errors_surface_before_testing() {
        let err = mcnemar(&[true], &[true, false], &[true]).unwrap_err();
        assert_eq!(
            err,
            EvalError::PairedLengthMismatch {
                first: 1,
                second: 2,
                labels: 1,
            }
        );
        let err = mcnemar(&[], &[], &[]).unwrap_err();
        assert_eq!(err, EvalError::Empty);
    }
}
