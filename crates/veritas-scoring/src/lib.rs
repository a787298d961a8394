//! # Veritas Scoring
//!
//! Convergence and reliability aggregation for multi-source truth
//! assessment, plus the convergent-uncertainty flagging policy.
//!
//! ## Overview
//!
//! Given one [`SourceAssessment`](veritas_sources::SourceAssessment) per
//! source, the [`ConvergenceScorer`] combines them into a single
//! [`AggregateOutcome`] using a fixed additive model:
//!
//! | Factor | Contribution |
//! |--------|--------------|
//! | Base skepticism | `+0.1` always |
//! | Convergence | `+0.4` when all sources agree on a verdict |
//! | Reliability | `(avg_reliability - 0.5) * 0.5` |
//! | Weak-domain convergence | `+0.35` when converged with avg domain strength `< 0.3` |
//! | Strong domain | `+0.2` when avg domain strength `>= 0.7` |
//! | Confidence | `(avg_confidence - 0.5) * 0.2` |
//!
//! The sum is clamped to `[0.05, 0.95]` and the claim is predicted true
//! when it exceeds `0.5`. Every contribution is recorded in the outcome's
//! factor map, so a score can always be decomposed after the fact.
//!
//! ## Convergent Uncertainty
//!
//! The weak-domain row above encodes a dangerous assumption: that
//! agreement among sources operating outside their competence is evidence
//! of truth. Sources that share training, upbringing, or bias converge on
//! the same wrong answer, and correlated error looks exactly like
//! corroboration. The [`ConvergencePolicy`] exists for this case:
//!
//! - [`ConvergencePolicy::NaiveBoost`] keeps the historical behavior; the
//!   plain score, weak-domain bonus included, is final.
//! - [`ConvergencePolicy::NeutralFlag`] intercepts it: when individually
//!   reliable sources converge in a domain where they are weak, the claim
//!   is flagged for escalation at an exactly neutral `0.5` preliminary
//!   confidence instead of being boosted.
//!
//! Which behavior is in force is always an explicit caller decision.
//!
//! ## Baselines
//!
//! The [`baseline`] module implements the three reference methods every
//! evaluation run is compared against: first-source-only, naive majority
//! vote, and reliability-weighted vote.

pub mod baseline;
pub mod error;
pub mod outcome;
pub mod policy;
pub mod scorer;
pub mod weights;

pub use baseline::{BaselineMethod, BaselineOutcome};
pub use error::ScoringError;
pub use outcome::{factor, AggregateOutcome};
pub use policy::{ConvergencePolicy, ConvergentUncertaintyFlag, FlagCriteria};
pub use scorer::ConvergenceScorer;
pub use weights::ScoringWeights;

/// Result type for scoring operations.
pub type Result<T> = std::result::Result<T, ScoringError>;

#[cfg(test)]
mod tests {
    #[test]
    fn test_crate_compiles() {
        // Smoke test - if this compiles, the crate structure is valid
        let _ = std::hint::black_box(1);
    }
}
