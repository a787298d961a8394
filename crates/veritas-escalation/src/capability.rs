//! Capability ports for the escalation stages.

use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use veritas_scoring::ConvergentUncertaintyFlag;
use veritas_sources::Claim;

/// How strongly the deliberating experts agreed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsensusStrength {
    /// No meaningful agreement emerged.
    None,
    /// A working consensus emerged.
    Consensus,
    /// A strong, explicit consensus emerged.
    StrongConsensus,
}

impl ConsensusStrength {
    /// Infers the strength from a free-text deliberation summary.
    ///
    /// Case-insensitive substring detection: "strong consensus" beats
    /// "consensus", anything else counts as none. Provided for
    /// capability implementations whose backends only produce prose;
    /// capabilities that know their strength should set it directly.
    pub fn infer(summary: &str) -> Self {
        let lower = summary.to_lowercase();
        if lower.contains("strong consensus") {
            Self::StrongConsensus
        } else if lower.contains("consensus") {
            Self::Consensus
        } else {
            Self::None
        }
    }
}

/// Outcome of the expert deliberation stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deliberation {
    /// What the deliberating experts concluded.
    pub summary: String,
    /// How strongly they agreed.
    pub strength: ConsensusStrength,
}

impl Deliberation {
    /// Creates a deliberation with an explicit strength.
    pub fn new(summary: impl Into<String>, strength: ConsensusStrength) -> Self {
        Self {
            summary: summary.into(),
            strength,
        }
    }

    /// Creates a deliberation whose strength is inferred from the
    /// summary text.
    pub fn from_summary(summary: impl Into<String>) -> Self {
        let summary = summary.into();
        let strength = ConsensusStrength::infer(&summary);
        Self { summary, strength }
    }
}

/// What the external authority said about the claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationVerdict {
    /// Authoritative sources confirm the claim.
    Confirmed,
    /// Authoritative sources contradict the claim.
    Contradicted,
    /// The authority could not settle the question.
    Unknown,
}

impl ValidationVerdict {
    /// Infers the verdict from a tagged free-text validation response.
    ///
    /// Recognizes the `[VALIDATED]: true` / `[VALIDATED]: false` tags,
    /// case-insensitively; anything else is [`Self::Unknown`].
    pub fn infer(response: &str) -> Self {
        let lower = response.to_lowercase();
        if lower.contains("[validated]: true") {
            Self::Confirmed
        } else if lower.contains("[validated]: false") {
            Self::Contradicted
        } else {
            Self::Unknown
        }
    }
}

/// Outcome of the external validation stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalValidation {
    /// The authority's verdict.
    pub verdict: ValidationVerdict,
    /// The authority's confidence in its verdict.
    pub confidence: f64,
    /// Description of the evidence consulted.
    pub evidence: String,
}

impl ExternalValidation {
    /// Creates a validation outcome.
    pub fn new(verdict: ValidationVerdict, confidence: f64, evidence: impl Into<String>) -> Self {
        Self {
            verdict,
            confidence,
            evidence: evidence.into(),
        }
    }

    /// Whether the evidence text indicates authoritative or
    /// multi-source support (case-insensitive substring check). Earns
    /// the small evidence-quality bonus during calibration.
    pub fn has_quality_evidence(&self) -> bool {
        let lower = self.evidence.to_lowercase();
        lower.contains("authoritative") || lower.contains("multiple sources")
    }
}

/// Expert panel that deliberates over a flagged claim.
#[async_trait]
pub trait DeliberationCapability: Send + Sync {
    /// Deliberates over the flagged claim and reports the consensus.
    async fn deliberate(&self, flag: &ConvergentUncertaintyFlag) -> Result<Deliberation>;
}

/// External authority that checks a claim against real-world sources.
#[async_trait]
pub trait ValidationCapability: Send + Sync {
    /// Validates the claim, given the deliberation summary for context.
    async fn validate(&self, claim: &Claim, consensus_summary: &str)
        -> Result<ExternalValidation>;
}
