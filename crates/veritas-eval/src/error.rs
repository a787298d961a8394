//! Error types for evaluation operations.

use thiserror::Error;

/// Caller errors surfaced before any metric is computed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// The parallel input slices disagree on length.
    #[error("input length mismatch: {predictions} predictions, {confidences} confidences, {labels} ground-truth labels")]
    LengthMismatch {
        /// Number of predictions supplied.
        predictions: usize,
        /// Number of confidences supplied.
        confidences: usize,
        /// Number of ground-truth labels supplied.
        labels: usize,
    },

    /// Paired prediction tracks disagree on length.
    #[error("paired length mismatch: {first} vs {second} predictions, {labels} ground-truth labels")]
    PairedLengthMismatch {
        /// Number of predictions from the first method.
        first: usize,
        /// Number of predictions from the second method.
        second: usize,
        /// Number of ground-truth labels supplied.
        labels: usize,
    },

    /// No claims to evaluate; every metric would divide by zero.
    #[error("cannot evaluate an empty prediction set")]
    Empty,

    /// A method name that was never registered.
    #[error("unknown method '{0}'")]
    UnknownMethod(String),

    /// Calibration binning needs at least one bin.
    #[error("invalid bin count {0}; need at least 1")]
    InvalidBinCount(usize),
}
