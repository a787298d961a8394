//! Side-by-side evaluation of several methods on one claim set.

use std::collections::BTreeMap;

use crate::calibration::CalibrationReport;
use crate::error::EvalError;
use crate::metrics::EvaluationReport;
use crate::significance::{mcnemar, McNemarOutcome};
use crate::Result;

#[derive(Debug, Clone)]
struct MethodTrack {
    predictions: Vec<bool>,
    confidences: Vec<f64>,
}

/// Holds the ground truth for a claim set plus one prediction track
/// per named method, and answers evaluation queries against them.
///
/// Methods are kept in name order so every report listing is
/// deterministic.
#[derive(Debug, Clone)]
pub struct MethodComparison {
    ground_truth: Vec<bool>,
    methods: BTreeMap<String, MethodTrack>,
}

impl MethodComparison {
    /// Creates a comparison over the given ground-truth labels.
    pub fn new(ground_truth: Vec<bool>) -> Self {
        Self {
            ground_truth,
            methods: BTreeMap::new(),
        }
    }

    /// Registers a method's predictions and confidences.
    ///
    /// Both tracks must be parallel to the ground truth; a method
    /// added twice under the same name replaces the earlier track.
    pub fn add_method(
        &mut self,
        name: impl Into<String>,
        predictions: Vec<bool>,
        confidences: Vec<f64>,
    ) -> Result<()> {
        if predictions.len() != confidences.len() || predictions.len() != self.ground_truth.len() {
            return Err(EvalError::LengthMismatch {
                predictions: predictions.len(),
                confidences: confidences.len(),
                labels: self.ground_truth.len(),
            });
        }
        self.methods.insert(
            name.into(),
            MethodTrack {
                predictions,
                confidences,
            },
        );
        Ok(())
    }

    /// Number of claims in the ground truth.
    pub fn claim_count(&self) -> usize {
        self.ground_truth.len()
    }

    /// Registered method names, in name order.
    pub fn method_names(&self) -> Vec<&str> {
        self.methods.keys().map(String::as_str).collect()
    }

    fn track(&self, name: &str) -> Result<&MethodTrack> {
        self.methods
            .get(name)
            .ok_or_else(|| EvalError::UnknownMethod(name.to_string()))
    }

    /// Classification metrics for one method.
    pub fn report(&self, name: &str) -> Result<EvaluationReport> {
        let track = self.track(name)?;
        EvaluationReport::compute(name, &track.predictions, &track.confidences, &self.ground_truth)
    }

    /// Classification metrics for every registered method, in name order.
    pub fn reports(&self) -> Result<Vec<EvaluationReport>> {
        self.methods
            .keys()
            .map(|name| self.report(name))
            .collect()
    }

    /// Calibration analysis for one method.
    pub fn calibration(&self, name: &str) -> Result<CalibrationReport> {
        let track = self.track(name)?;
        CalibrationReport::analyze(name, &track.predictions, &track.confidences, &self.ground_truth)
    }

    /// McNemar's test between two methods' prediction tracks.
    pub fn compare(&self, first: &str, second: &str) -> Result<McNemarOutcome> {
        let a = self.track(first)?;
        let b = self.track(second)?;
        mcnemar(&a.predictions, &b.predictions, &self.ground_truth)
    }

    /// The registered method with the highest F1 score.
    ///
    /// Errors with [`EvalError::Empty`] when no method has been added.
    pub fn best_by_f1(&self) -> Result<EvaluationReport> {
        let reports = self.reports()?;
        reports
            .into_iter()
            .max_by(|a, b| a.f1.partial_cmp(&b.f1).unwrap_or(std::cmp::Ordering::Equal))
            .ok_or(EvalError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparison() -> MethodComparison {
        let truth = vec![true, true, false, false];
        let mut comparison = MethodComparison::new(truth.clone());
        comparison
            .add_method("oracle", truth, vec![0.9, 0.9, 0.9, 0.9])
            .unwrap();
        comparison
            .add_method(
                "contrarian",
                vec![false, false, true, true],
                vec![0.8, 0.8, 0.8, 0.8],
            )
            .unwrap();
        comparison
    }

    #[test]
    fn test_reports_cover_every_method_in_name_order() {
        let reports = comparison().reports().unwrap();
        let names: Vec<&str> = reports.iter().map(|r| r.method.as_str()).collect();
        assert_eq!(names, vec!["contrarian", "oracle"]);
    }

    #[test]
    fn test_best_by_f1_picks_the_stronger_method() {
        let best = comparison().best_by_f1().unwrap();
        assert_eq!(best.method, "oracle");
        assert!((best.f1 - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_best_by_f1_without_methods_is_an_error() {
        let comparison = MethodComparison::new(vec![true, false]);
        assert_eq!(comparison.best_by_f1().unwrap_err(), EvalError::Empty);
    }

    #[test]
    fn test_compare_counts_discordant_pairs() {
        let outcome = comparison().compare("oracle", "contrarian").unwrap();
        assert_eq!(outcome.only_first_correct, 4);
        assert_eq!(outcome.only_second_correct, 0);
        assert_eq!(outcome.both_correct, 0);
        assert_eq!(outcome.both_wrong, 0);
    }

    #[test]
    fn test_unknown_method_is_a_typed_error() {
        let err = comparison().report("nope").unwrap_err();
        assert_eq!(err, EvalError::UnknownMethod("nope".to_string()));
        let err = comparison().compare("oracle", "nope").unwrap_err();
        assert_eq!(err, EvalError::UnknownMethod("nope".to_string()));
    }

    #[test]
    fn test_mismatched_track_is_rejected_at_registration() {
        let mut comparison = MethodComparison::new(vec![true, false]);
        let err = comparison
            .add_method("short", vec![true], vec![0.5])
            .unwrap_err();
        assert!(matches!(err, EvalError::LengthMismatch { .. }));
        assert!(comparison.method_names().is_empty());
    }

    #[test]
    fn test_calibration_runs_on_a_registered_track() {
        let report = comparison().calibration("oracle").unwrap();
        assert_eq!(report.method, "oracle");
        assert!((report.expected_calibration_error - 0.1).abs() < 1e-9);
    }
}
