//! Sequential escalation pipeline.

use crate::calibration::CalibrationWeights;
use crate::capability::{
    Deliberation, DeliberationCapability, ExternalValidation, ValidationCapability,
};
use crate::state::EscalationState;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use veritas_scoring::ConvergentUncertaintyFlag;
use veritas_sources::Claim;

/// Deadline applied to each escalation stage when none is configured.
pub const DEFAULT_STAGE_TIMEOUT: Duration = Duration::from_secs(60);

/// Summary passed to validation when deliberation produced nothing.
const INCONCLUSIVE_SUMMARY: &str = "deliberation inconclusive";

/// Everything that happened while resolving one flagged claim.
///
/// `deliberation` and `validation` are `None` when the stage failed or
/// timed out; the record still carries a calibrated final confidence
/// computed from whatever evidence was obtained.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EscalationRecord {
    /// The claim that was escalated.
    pub claim: Claim,
    /// Final lifecycle state; always [`EscalationState::Calibrated`]
    /// for records produced by the pipeline.
    pub state: EscalationState,
    /// Outcome of the deliberation stage, if conclusive.
    pub deliberation: Option<Deliberation>,
    /// Outcome of the validation stage, if conclusive.
    pub validation: Option<ExternalValidation>,
    /// Calibrated confidence, in `[0.15, 0.85]`.
    pub final_confidence: f64,
    /// Binary verdict: `final_confidence > 0.5`.
    pub predicted: bool,
}

/// Runs flagged claims through deliberation, validation, and
/// calibration.
///
/// The stages are strictly sequential: validation receives the
/// deliberation summary, and calibration consumes both. Stage failures
/// are tolerated per stage, so a dead validation backend degrades the
/// answer instead of wedging the pipeline.
#[derive(Clone)]
pub struct EscalationPipeline {
    deliberation: Arc<dyn DeliberationCapability>,
    validation: Arc<dyn ValidationCapability>,
    weights: CalibrationWeights,
    stage_timeout: Duration,
}

impl EscalationPipeline {
    /// Creates a pipeline over the two stage capabilities, with default
    /// calibration weights and stage timeout.
    pub fn new(
        deliberation: Arc<dyn DeliberationCapability>,
        validation: Arc<dyn ValidationCapability>,
    ) -> Self {
        Self {
            deliberation,
            validation,
            weights: CalibrationWeights::default(),
            stage_timeout: DEFAULT_STAGE_TIMEOUT,
        }
    }

    /// Overrides the calibration weights.
    #[must_use]
    pub fn with_weights(mut self, weights: CalibrationWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Overrides the per-stage deadline.
    #[must_use]
    pub fn with_stage_timeout(mut self, stage_timeout: Duration) -> Self {
        self.stage_timeout = stage_timeout;
        self
    }

    /// The calibration weights in effect.
    pub fn weights(&self) -> &CalibrationWeights {
        &self.weights
    }

    /// Resolves one flagged claim.
    ///
    /// Never fails: each stage gets one bounded attempt, inconclusive
    /// stages contribute nothing, and the record always comes back
    /// calibrated.
    pub async fn run(&self, flag: ConvergentUncertaintyFlag) -> EscalationRecord {
        let claim = flag.claim().clone();
        let mut state = EscalationState::Flagged;
        info!(
            "Escalating {}: {} sources converged ({})",
            claim,
            flag.convergent_sources().len(),
            flag.reason()
        );

        let deliberation = match timeout(self.stage_timeout, self.deliberation.deliberate(&flag)).await
        {
            Ok(Ok(outcome)) => {
                debug!("Deliberation for {} concluded: {:?}", claim, outcome.strength);
                Some(outcome)
            }
            Ok(Err(err)) => {
                warn!("Deliberation for {} failed: {}; stage inconclusive", claim, err);
                None
            }
            Err(_) => {
                warn!(
                    "Deliberation for {} exceeded {:?}; stage inconclusive",
                    claim, self.stage_timeout
                );
                None
            }
        };
        state = state.advance();

        let summary = deliberation
            .as_ref()
            .map(|d| d.summary.as_str())
            .unwrap_or(INCONCLUSIVE_SUMMARY);
        let validation = match timeout(
            self.stage_timeout,
            self.validation.validate(&claim, summary),
        )
        .await
        {
            Ok(Ok(outcome)) => {
                debug!("Validation for {} returned {:?}", claim, outcome.verdict);
                Some(outcome)
            }
            Ok(Err(err)) => {
                warn!("Validation for {} failed: {}; stage inconclusive", claim, err);
                None
            }
            Err(_) => {
                warn!(
                    "Validation for {} exceeded {:?}; stage inconclusive",
                    claim, self.stage_timeout
                );
                None
            }
        };
        state = state.advance();

        let final_confidence = self
            .weights
            .calibrate(deliberation.as_ref(), validation.as_ref());
        state = state.advance();
        info!(
            "Escalation of {} calibrated to {:.2} ({})",
            claim, final_confidence, state
        );

        EscalationRecord {
            claim,
            state,
            deliberation,
            validation,
            final_confidence,
            predicted: final_confidence > 0.5,
        }
    }
}
