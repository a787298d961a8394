//! Error types for scoring operations.

use thiserror::Error;

/// Error produced by scorers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    /// An empty assessment slice reached a scorer. The caller is
    /// responsible for collecting at least one assessment first; an
    /// empty aggregate has no defined means.
    #[error("cannot aggregate an empty set of source assessments")]
    NoAssessments,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_assessments_message() {
        assert!(ScoringError::NoAssessments.to_string().contains("empty"));
    }
}
