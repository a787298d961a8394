//! Error types for source capabilities.

use thiserror::Error;

/// Error returned by a source capability.
///
/// These errors are recovered locally by the collector, which substitutes
/// a degraded default assessment. They never abort a claim.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source could not be reached or refused to answer.
    #[error("source '{source_id}' unavailable: {reason}")]
    Unavailable {
        /// Identifier of the failing source.
        source_id: String,
        /// Transport- or capability-level description of the failure.
        reason: String,
    },

    /// The source did not answer within its deadline.
    #[error("source '{source_id}' timed out")]
    Timeout {
        /// Identifier of the failing source.
        source_id: String,
    },
}

impl SourceError {
    /// Creates an unavailability error.
    pub fn unavailable(source_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            source_id: source_id.into(),
            reason: reason.into(),
        }
    }

    /// Identifier of the source that produced this error.
    pub fn source_id(&self) -> &str {
        match self {
            Self::Unavailable { source_id, .. } => source_id,
            Self::Timeout { source_id } => source_id,
        }
    }
}
