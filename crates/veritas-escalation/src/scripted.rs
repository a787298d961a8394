//! Deterministic scripted stage capabilities for tests.

use crate::capability::{
    ConsensusStrength, Deliberation, DeliberationCapability, ExternalValidation,
    ValidationCapability, ValidationVerdict,
};
use crate::error::EscalationError;
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;
use veritas_scoring::ConvergentUncertaintyFlag;
use veritas_sources::Claim;

#[derive(Debug, Clone)]
enum StageBehavior<T> {
    Respond(T),
    Fail(String),
    Stall(Duration),
}

/// Deliberation capability with a fixed script.
#[derive(Debug, Clone)]
pub struct ScriptedDeliberation {
    behavior: StageBehavior<Deliberation>,
}

impl ScriptedDeliberation {
    /// A panel that reaches the given consensus strength, with a
    /// summary whose wording matches it.
    pub fn reaching(strength: ConsensusStrength) -> Self {
        let summary = match strength {
            ConsensusStrength::StrongConsensus => "The panel reached strong consensus.",
            ConsensusStrength::Consensus => "The panel reached consensus after deliberation.",
            ConsensusStrength::None => "The panel remained divided.",
        };
        Self {
            behavior: StageBehavior::Respond(Deliberation::new(summary, strength)),
        }
    }

    /// A panel that fails every request.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            behavior: StageBehavior::Fail(reason.into()),
        }
    }

    /// A panel that sleeps past any reasonable deadline.
    pub fn stalling(delay: Duration) -> Self {
        Self {
            behavior: StageBehavior::Stall(delay),
        }
    }
}

#[async_trait]
impl DeliberationCapability for ScriptedDeliberation {
    async fn deliberate(&self, _flag: &ConvergentUncertaintyFlag) -> Result<Deliberation> {
        match &self.behavior {
            StageBehavior::Respond(deliberation) => Ok(deliberation.clone()),
            StageBehavior::Fail(reason) => Err(EscalationError::Deliberation(reason.clone())),
            StageBehavior::Stall(delay) => {
                sleep(*delay).await;
                Ok(Deliberation::new(
                    "The panel reached consensus, eventually.",
                    ConsensusStrength::Consensus,
                ))
            }
        }
    }
}

/// Validation capability with a fixed script.
///
/// Records every consensus summary it is handed, so tests can assert
/// that stage outputs actually flow forward through the pipeline.
#[derive(Debug, Clone)]
pub struct ScriptedValidation {
    behavior: StageBehavior<ExternalValidation>,
    seen: Arc<Mutex<Vec<String>>>,
}

impl ScriptedValidation {
    fn new(behavior: StageBehavior<ExternalValidation>) -> Self {
        Self {
            behavior,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// An authority that confirms the claim with the given evidence.
    pub fn confirming(evidence: impl Into<String>) -> Self {
        Self::new(StageBehavior::Respond(ExternalValidation::new(
            ValidationVerdict::Confirmed,
            0.9,
            evidence,
        )))
    }

    /// An authority that contradicts the claim with the given evidence.
    pub fn contradicting(evidence: impl Into<String>) -> Self {
        Self::new(StageBehavior::Respond(ExternalValidation::new(
            ValidationVerdict::Contradicted,
            0.9,
            evidence,
        )))
    }

    /// An authority that cannot settle the question.
    pub fn unknown() -> Self {
        Self::new(StageBehavior::Respond(ExternalValidation::new(
            ValidationVerdict::Unknown,
            0.5,
            "validation inconclusive",
        )))
    }

    /// An authority that fails every request.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::new(StageBehavior::Fail(reason.into()))
    }

    /// An authority that sleeps past any reasonable deadline.
    pub fn stalling(delay: Duration) -> Self {
        Self::new(StageBehavior::Stall(delay))
    }

    /// Shared handle to the consensus summaries seen so far.
    pub fn seen_summaries(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.seen)
    }
}

#[async_trait]
impl ValidationCapability for ScriptedValidation {
    async fn validate(
        &self,
        _claim: &Claim,
        consensus_summary: &str,
    ) -> Result<ExternalValidation> {
        match self.seen.lock() {
            Ok(mut seen) => seen.push(consensus_summary.to_string()),
            Err(poisoned) => poisoned.into_inner().push(consensus_summary.to_string()),
        }
        match &self.behavior {
            StageBehavior::Respond(validation) => Ok(validation.clone()),
            StageBehavior::Fail(reason) => Err(EscalationError::Validation(reason.clone())),
            StageBehavior::Stall(delay) => {
                sleep(*delay).await;
                Ok(ExternalValidation::new(
                    ValidationVerdict::Unknown,
                    0.5,
                    "validation inconclusive, eventually",
                ))
            }
        }
    }
}
