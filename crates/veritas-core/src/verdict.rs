//! Verdict types for claim assessment results.

use serde::Serialize;
use veritas_escalation::{EscalationRecord, EscalationState};
use veritas_scoring::AggregateOutcome;
use veritas_sources::Claim;

/// The final verdict for one assessed claim.
///
/// A claim leaves the pipeline one of two ways:
/// - `Scored`: the convergence policy saw no reason to intervene and
///   the plain aggregate outcome is final
/// - `Escalated`: convergent uncertainty was flagged and the claim was
///   resolved through deliberation, validation, and calibration
///
/// Either way the verdict answers the same two questions: what was
/// predicted, and with how much confidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ClaimVerdict {
    /// The plain aggregate outcome is final.
    Scored {
        /// The assessed claim.
        claim: Claim,
        /// The aggregate scoring outcome.
        outcome: AggregateOutcome,
    },

    /// The claim was flagged and resolved by escalation.
    Escalated {
        /// The full escalation record.
        record: EscalationRecord,
    },
}

impl ClaimVerdict {
    /// Create a Scored verdict.
    pub fn scored(claim: Claim, outcome: AggregateOutcome) -> Self {
        Self::Scored { claim, outcome }
    }

    /// Create an Escalated verdict.
    pub fn escalated(record: EscalationRecord) -> Self {
        Self::Escalated { record }
    }

    /// The claim this verdict is about.
    pub fn claim(&self) -> &Claim {
        match self {
            Self::Scored { claim, .. } => claim,
            Self::Escalated { record } => &record.claim,
        }
    }

    /// The binary truthfulness prediction.
    pub fn predicted(&self) -> bool {
        match self {
            Self::Scored { outcome, .. } => outcome.predicted,
            Self::Escalated { record } => record.predicted,
        }
    }

    /// The confidence behind the prediction.
    ///
    /// `truth_probability` for scored claims, `final_confidence` for
    /// escalated ones; each lives inside its documented clamp.
    pub fn confidence(&self) -> f64 {
        match self {
            Self::Scored { outcome, .. } => outcome.truth_probability,
            Self::Escalated { record } => record.final_confidence,
        }
    }

    /// Returns true if the plain score was final.
    pub fn is_scored(&self) -> bool {
        matches!(self, Self::Scored { .. })
    }

    /// Returns true if the claim went through escalation.
    pub fn is_escalated(&self) -> bool {
        matches!(self, Self::Escalated { .. })
    }

    /// The terminal escalation state; `Normal` for scored claims.
    pub fn state(&self) -> EscalationState {
        match self {
            Self::Scored { .. } => EscalationState::Normal,
            Self::Escalated { record } => record.state,
        }
    }

    /// Short label for how the claim was resolved.
    pub fn method(&self) -> &'static str {
        match self {
            Self::Scored { .. } => "scored",
            Self::Escalated { .. } => "escalated",
        }
    }
}

impl std::fmt::Display for ClaimVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:.3}, {})",
            self.predicted(),
            self.confidence(),
            self.method()
        )
    }
}
