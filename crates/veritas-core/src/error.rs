//! Error types for Veritas Core.

use thiserror::Error;

/// Core error type for veritas operations.
///
/// Capability failures never appear here: failed sources degrade inside
/// the collector and failed escalation stages resolve as inconclusive.
/// What remains are caller errors.
#[derive(Debug, Error)]
pub enum VeritasError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scoring error passthrough.
    #[error("Scoring error: {0}")]
    Scoring(#[from] veritas_scoring::ScoringError),

    /// Evaluation error passthrough.
    #[error("Evaluation error: {0}")]
    Eval(#[from] veritas_eval::EvalError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_errors_convert() {
        let error: VeritasError = veritas_scoring::ScoringError::NoAssessments.into();
        assert!(matches!(error, VeritasError::Scoring(_)));

        let error: VeritasError = veritas_eval::EvalError::Empty.into();
        assert!(matches!(error, VeritasError::Eval(_)));
    }
}
