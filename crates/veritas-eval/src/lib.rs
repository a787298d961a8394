//! # Veritas Eval
//!
//! Calibration and evaluation engine for truth-assessment methods.
//!
//! ## Overview
//!
//! Works over three parallel slices per method (binary predictions,
//! confidences, and ground-truth labels) and computes:
//!
//! | Metric | Definition |
//! |--------|------------|
//! | Accuracy | `(TP + TN) / N` |
//! | Precision | `TP / (TP + FP)`, `0.0` when undefined |
//! | Recall | `TP / (TP + FN)`, `0.0` when undefined |
//! | F1 | `2PR / (P + R)`, `0.0` when undefined |
//! | Brier score | mean of `(confidence - truth)^2` |
//! | ECE | bin-weighted mean of `|avg confidence - accuracy|` |
//! | Overconfidence | mean confidence - overall accuracy |
//! | McNemar | `(|b - c| - 1)^2 / (b + c)` over discordant pairs |
//!
//! Input shape is validated before any computation: mismatched slice
//! lengths and empty inputs are typed errors, never panics or silent
//! zeros. Numeric edge cases *inside* valid input (a zero denominator,
//! an empty bin, no discordant pairs) resolve to `0.0`.
//!
//! ## Method Comparison
//!
//! [`MethodComparison`] holds any number of named prediction sets
//! against one ground-truth vector and answers the questions an
//! evaluation run actually asks: a report per method, calibration
//! analysis per method, the best method by F1, and whether two methods
//! differ significantly ([`significance::mcnemar`]).
//!
//! ## Ground-Truth Dataset
//!
//! [`GroundTruthDataset::embedded`] ships the labeled claims used to
//! validate scoring methods: 18 claims across mathematics, physics,
//! recent events, and specialized science, each carrying difficulty,
//! verification source, and notes, with a deterministic seeded
//! train/test split.
//!
//! ## References
//!
//! - Brier, "Verification of forecasts expressed in terms of
//!   probability" (1950)
//! - Guo et al., "On Calibration of Modern Neural Networks" (2017),
//!   for expected calibration error
//! - McNemar, "Note on the sampling error of the difference between
//!   correlated proportions or percentages" (1947)

pub mod calibration;
pub mod comparison;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod significance;

pub use calibration::{CalibrationBin, CalibrationReport, DEFAULT_BIN_COUNT};
pub use comparison::MethodComparison;
pub use dataset::{DatasetSummary, Difficulty, GroundTruthDataset, LabeledClaim, LabelBalance};
pub use error::EvalError;
pub use metrics::{ConfusionCounts, EvaluationReport};
pub use significance::{mcnemar, McNemarOutcome, CHI_SQUARE_1DF_CRITICAL_05};

/// Result type for evaluation operations.
pub type Result<T> = std::result::Result<T, EvalError>;
