//! Aggregate scoring outcome with its factor decomposition.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Names of the six factors recorded in every [`AggregateOutcome`].
pub mod factor {
    /// Base skepticism applied to every claim.
    pub const BASE_SKEPTICISM: &str = "base_skepticism";
    /// Bonus for unanimous source agreement.
    pub const CONVERGENCE: &str = "convergence";
    /// Reliability term, centered on 0.5.
    pub const RELIABILITY: &str = "reliability";
    /// Bonus for convergence in a weak domain (the uncalibrated branch).
    pub const WEAK_DOMAIN_CONVERGENCE: &str = "weak_domain_convergence";
    /// Bonus for strong average domain expertise.
    pub const STRONG_DOMAIN: &str = "strong_domain";
    /// Confidence term, centered on 0.5.
    pub const CONFIDENCE: &str = "confidence";
}

/// The scorer's combined judgment of one claim.
///
/// Derived data, never mutated after scoring. `factors` always carries
/// all six named contributions (zero when a factor did not apply), so
/// `truth_probability` can be decomposed without re-running the scorer:
/// the clamped sum of the factor values is the probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateOutcome {
    /// Whether all sources agreed on the same verdict.
    pub convergent: bool,
    /// Estimated probability that the claim is true, in `[0.05, 0.95]`.
    pub truth_probability: f64,
    /// Binary prediction: `truth_probability > 0.5`.
    pub predicted: bool,
    /// Contribution of each named factor to the probability.
    pub factors: BTreeMap<String, f64>,
}

impl AggregateOutcome {
    /// Returns a single factor's contribution, `0.0` if absent.
    pub fn factor(&self, name: &str) -> f64 {
        self.factors.get(name).copied().unwrap_or(0.0)
    }

    /// Sum of all recorded contributions, before clamping.
    pub fn unclamped_sum(&self) -> f64 {
        self.factors.values().sum()
    }
}
