//! # Veritas Escalation
//!
//! Resolution pipeline for claims flagged with convergent uncertainty.
//!
//! ## Overview
//!
//! A [`ConvergentUncertaintyFlag`](veritas_scoring::ConvergentUncertaintyFlag)
//! means the normal scoring path refused to answer: reliable sources
//! converged in a domain where none of them is competent, so their
//! agreement proves nothing. This crate runs the flagged claim through
//! expert deliberation and external validation, then calibrates a final
//! confidence inside deliberately modest bounds.
//!
//! ## State Machine
//!
//! ```text
//!              unflagged claims stay here
//!                        │
//!                    ┌───▼────┐
//!                    │ NORMAL │ (terminal)
//!                    └────────┘
//!
//!   ┌─────────┐   ┌───────────┐   ┌───────────┐   ┌────────────┐
//!   │ FLAGGED ├──▶│ CONSENSUS ├──▶│ VALIDATED ├──▶│ CALIBRATED │ (terminal)
//!   └─────────┘   └───────────┘   └───────────┘   └────────────┘
//!     raised        deliberation    external        bounded final
//!     by policy     attempted       validation      confidence
//!                                   attempted
//! ```
//!
//! The machine only moves forward. A stage that fails or times out is
//! recorded as inconclusive and the pipeline keeps going; every flagged
//! claim reaches `CALIBRATED` with whatever evidence was obtained.
//!
//! ## Calibration Bounds
//!
//! Final confidence starts neutral at `0.5`, earns modest adjustments
//! (`+0.15`/`+0.10` for consensus quality, `+0.25`/`-0.25` for external
//! validation, `+0.05` for authoritative evidence) and is clamped to
//! `[0.15, 0.85]`. A claim that went through escalation was by
//! definition hard to assess; the bounds keep the system from claiming
//! near-certainty about it in either direction.

pub mod calibration;
pub mod capability;
pub mod error;
pub mod pipeline;
pub mod scripted;
pub mod state;

pub use calibration::CalibrationWeights;
pub use capability::{
    ConsensusStrength, Deliberation, DeliberationCapability, ExternalValidation,
    ValidationCapability, ValidationVerdict,
};
pub use error::EscalationError;
pub use pipeline::{EscalationPipeline, EscalationRecord};
pub use scripted::{ScriptedDeliberation, ScriptedValidation};
pub use state::EscalationState;

/// Result type for escalation operations.
pub type Result<T> = std::result::Result<T, EscalationError>;
