//! Bounded confidence calibration for escalated claims.

use crate::capability::{ConsensusStrength, Deliberation, ExternalValidation, ValidationVerdict};
use serde::{Deserialize, Serialize};

/// Adjustment weights applied when calibrating an escalated claim.
///
/// External validation carries the largest weight: it is the only stage
/// that consults anything outside the sources that converged in the
/// first place. Deliberation quality earns a modest boost, and the
/// bounds keep escalated claims away from near-certainty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationWeights {
    /// Starting confidence for every flagged claim.
    pub base: f64,
    /// Added for a strong expert consensus.
    pub strong_consensus_bonus: f64,
    /// Added for an ordinary expert consensus.
    pub consensus_bonus: f64,
    /// Added when validation confirms, subtracted when it contradicts.
    pub validation_bonus: f64,
    /// Added for authoritative or multi-source evidence.
    pub evidence_bonus: f64,
    /// Lower clamp on the final confidence.
    pub floor: f64,
    /// Upper clamp on the final confidence.
    pub ceiling: f64,
}

impl Default for CalibrationWeights {
    fn default() -> Self {
        Self {
            base: 0.5,
            strong_consensus_bonus: 0.15,
            consensus_bonus: 0.10,
            validation_bonus: 0.25,
            evidence_bonus: 0.05,
            floor: 0.15,
            ceiling: 0.85,
        }
    }
}

impl CalibrationWeights {
    /// Computes the final confidence from whatever stage evidence was
    /// obtained. `None` for a stage means it was inconclusive and
    /// contributes nothing.
    pub fn calibrate(
        &self,
        deliberation: Option<&Deliberation>,
        validation: Option<&ExternalValidation>,
    ) -> f64 {
        let mut confidence = self.base;

        match deliberation.map(|d| d.strength) {
            Some(ConsensusStrength::StrongConsensus) => confidence += self.strong_consensus_bonus,
            Some(ConsensusStrength::Consensus) => confidence += self.consensus_bonus,
            Some(ConsensusStrength::None) | None => {}
        }

        if let Some(validation) = validation {
            match validation.verdict {
                ValidationVerdict::Confirmed => confidence += self.validation_bonus,
                ValidationVerdict::Contradicted => confidence -= self.validation_bonus,
                ValidationVerdict::Unknown => {}
            }
            if validation.has_quality_evidence() {
                confidence += self.evidence_bonus;
            }
        }

        confidence.clamp(self.floor, self.ceiling)
    }
}
