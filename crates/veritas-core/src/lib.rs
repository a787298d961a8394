//! # Veritas Core
//!
//! Unified facade for collaborative truth assessment.
//! Orchestrates source collection, convergence scoring, uncertainty
//! flagging, and escalation.
//!
//! ## Pipeline
//!
//! Every claim moves through the same phases; each phase tolerates the
//! failures of the layer below it:
//!
//! | Phase | Component | On failure |
//! |-------|-----------|------------|
//! | Collection | `veritas-sources` | failed source degrades to a default vote |
//! | Policy | `veritas-scoring` | n/a (pure predicate) |
//! | Scoring | `veritas-scoring` | empty input is a typed caller error |
//! | Escalation | `veritas-escalation` | failed stage resolves inconclusive |
//! | Benchmarking | `veritas-eval` | shape errors surface before computation |
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                          VERITAS CORE                          │
//! ├────────────────────────────────────────────────────────────────┤
//! │                                                                │
//! │                      ┌───────────────┐                         │
//! │                      │    Veritas    │  ← Unified Facade       │
//! │                      └───────┬───────┘                         │
//! │                              │                                 │
//! │        ┌──────────────┬──────┴───────┬──────────────┐          │
//! │        ▼              ▼              ▼              ▼          │
//! │   ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐    │
//! │   │  Source  │   │ Scoring  │   │Escalation│   │   Eval   │    │
//! │   │Collector │   │ + Policy │   │ Pipeline │   │  Engine  │    │
//! │   └──────────┘   └──────────┘   └──────────┘   └──────────┘    │
//! │                                                                │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use veritas_core::{CancellationHandle, Claim, Veritas, VeritasConfig};
//!
//! // Initialize with configuration and capabilities
//! let config = VeritasConfig::default();
//! let veritas = Veritas::new(config, sources, deliberation, validation)?;
//!
//! // Assess a single claim
//! let verdict = veritas.assess(&claim).await?;
//! println!("{}: {}", claim, verdict);
//!
//! // Or a whole batch, in input order, with cooperative cancellation
//! let cancel = CancellationHandle::new();
//! let report = veritas.assess_batch(&claims, cancel.clone()).await;
//! ```
//!
//! ## Failure Semantics
//!
//! - A failed or timed-out source never aborts a claim; it degrades to
//!   a default vote that the scorer and policy can see
//! - A failed or timed-out escalation stage resolves as inconclusive;
//!   the record still reaches the calibrated terminal state
//! - Batch cancellation is cooperative: in-flight claims reach their
//!   next checkpoint and are dropped unpublished
//! - The facade surfaces only caller errors (bad configuration, empty
//!   input, mismatched evaluation shapes)

mod batch;
mod config;
mod error;
mod verdict;
mod veritas;

pub use batch::{BatchReport, CancellationHandle};
pub use config::{BatchConfig, CollectorConfig, EscalationConfig, VeritasConfig};
pub use error::VeritasError;
pub use verdict::ClaimVerdict;
pub use veritas::{Veritas, PIPELINE_METHOD};

// Re-export component types for convenience
pub use veritas_escalation::{
    CalibrationWeights, ConsensusStrength, Deliberation, DeliberationCapability,
    EscalationRecord, EscalationState, ExternalValidation, ScriptedDeliberation,
    ScriptedValidation, ValidationCapability, ValidationVerdict,
};
pub use veritas_eval::{
    CalibrationReport, EvaluationReport, GroundTruthDataset, LabeledClaim, McNemarOutcome,
    MethodComparison,
};
pub use veritas_scoring::{
    AggregateOutcome, BaselineMethod, ConvergencePolicy, ConvergentUncertaintyFlag, FlagCriteria,
    ScoringWeights,
};
pub use veritas_sources::{
    AssessmentResponse, Claim, ScriptedSource, SourceAssessment, SourceCapability, SourceProfile,
};

/// Core result type for veritas operations.
pub type Result<T> = std::result::Result<T, VeritasError>;

#[cfg(test)]
mod tests;
