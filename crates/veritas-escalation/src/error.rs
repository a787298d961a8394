//! Error types for escalation stages.

use thiserror::Error;

/// Error returned by a deliberation or validation capability.
///
/// Stage errors are recovered by the pipeline: the failing stage is
/// recorded as inconclusive and processing continues. They never abort
/// an escalation.
#[derive(Debug, Error)]
pub enum EscalationError {
    /// The deliberation capability failed.
    #[error("deliberation failed: {0}")]
    Deliberation(String),

    /// The external validation capability failed.
    #[error("external validation failed: {0}")]
    Validation(String),

    /// The capability's own transport gave up before answering.
    ///
    /// The pipeline also enforces its per-stage deadline externally;
    /// this variant is for implementations that time out internally.
    #[error("escalation stage timed out: {0}")]
    Timeout(String),
}
