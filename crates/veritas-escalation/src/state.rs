//! Escalation state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a claim stands in the escalation lifecycle.
///
/// The machine is linear and only moves forward:
/// `Flagged → Consensus → Validated → Calibrated`. `Normal` is the
/// terminal state of claims that were never flagged and never enter the
/// pipeline at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationState {
    /// Never flagged; resolved by the plain aggregate score.
    Normal,
    /// Flagged for convergent uncertainty, awaiting deliberation.
    Flagged,
    /// Deliberation attempted; awaiting external validation.
    Consensus,
    /// Validation attempted; awaiting confidence calibration.
    Validated,
    /// Final confidence assigned. Terminal.
    Calibrated,
}

impl EscalationState {
    /// Advances one step along the pipeline. Terminal states are fixed
    /// points.
    #[must_use]
    pub const fn advance(self) -> Self {
        match self {
            Self::Normal => Self::Normal,
            Self::Flagged => Self::Consensus,
            Self::Consensus => Self::Validated,
            Self::Validated => Self::Calibrated,
            Self::Calibrated => Self::Calibrated,
        }
    }

    /// Whether the lifecycle ends here.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Normal | Self::Calibrated)
    }

    /// Whether the claim passed through the escalation pipeline.
    pub const fn was_escalated(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}

impl fmt::Display for EscalationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Flagged => write!(f, "FLAGGED"),
            Self::Consensus => write!(f, "CONSENSUS"),
            Self::Validated => write!(f, "VALIDATED"),
            Self::Calibrated => write!(f, "CALIBRATED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_advances_in_order() {
        let mut state = EscalationState::Flagged;
        let expected = [
            EscalationState::Consensus,
            EscalationState::Validated,
            EscalationState::Calibrated,
        ];
        for want in expected {
            state = state.advance();
            assert_eq!(state, want);
        }
    }

    #[test]
    fn test_terminal_states_are_fixed_points() {
        assert_eq!(EscalationState::Normal.advance(), EscalationState::Normal);
        assert_eq!(
            EscalationState::Calibrated.advance(),
            EscalationState::Calibrated
        );
        assert!(EscalationState::Normal.is_terminal());
        assert!(EscalationState::Calibrated.is_terminal());
        assert!(!EscalationState::Consensus.is_terminal());
    }

    #[test]
    fn test_only_normal_is_unescalated() {
        assert!(!EscalationState::Normal.was_escalated());
        assert!(EscalationState::Flagged.was_escalated());
        assert!(EscalationState::Calibrated.was_escalated());
    }

    #[test]
    fn test_display_is_uppercase() {
        assert_eq!(EscalationState::Calibrated.to_string(), "CALIBRATED");
    }
}
