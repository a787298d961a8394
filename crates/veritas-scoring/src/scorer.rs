//! The additive convergence scoring model.
//!
//! Combines per-source assessments into a truth probability using fixed,
//! named factors. The model is deliberately simple: every term is a
//! constant or a scaled distance from the neutral midpoint 0.5, so a
//! score can always be explained by listing its factor contributions.
//!
//! # Worked Example
//!
//! Two sources judge a mathematics claim true. Reliabilities 0.85 and
//! 0.82 (mean 0.835), domain strengths 0.9 and 0.85 (mean 0.875),
//! confidences both 0.8:
//!
//! ```text
//! base skepticism            +0.1
//! convergence                +0.4      (both said true)
//! reliability                +0.1675   ((0.835 - 0.5) * 0.5)
//! strong domain              +0.2      (0.875 >= 0.7)
//! confidence                 +0.06     ((0.8 - 0.5) * 0.2)
//!                            ───────
//! truth probability           0.9275   → predicted true
//! ```
//!
//! # Known Hazard
//!
//! Convergence counts agreement on *either* verdict, and the weak-domain
//! branch rewards agreement precisely where the sources are least
//! competent. That branch is the uncalibrated, historical behavior; the
//! neutral-flag policy in [`crate::policy`] intercepts it before it can
//! reach a final answer.

use crate::error::ScoringError;
use crate::outcome::{factor, AggregateOutcome};
use crate::weights::ScoringWeights;
use crate::Result;
use std::collections::BTreeMap;
use veritas_sources::SourceAssessment;

/// Neutral midpoint that the reliability and confidence terms are
/// centered on.
const NEUTRAL_MIDPOINT: f64 = 0.5;

/// Pure, deterministic aggregation of source assessments.
///
/// Holds only its [`ScoringWeights`]; scoring the same assessments twice
/// yields bit-identical outcomes.
#[derive(Debug, Clone, Default)]
pub struct ConvergenceScorer {
    weights: ScoringWeights,
}

impl ConvergenceScorer {
    /// Creates a scorer with the given weights.
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// The weights in effect.
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Scores one claim from its source assessments.
    ///
    /// Returns [`ScoringError::NoAssessments`] on an empty slice; the
    /// means of an empty aggregate are undefined and an empty slice
    /// reaching this point is a caller bug, not a degraded condition.
    pub fn score(&self, assessments: &[SourceAssessment]) -> Result<AggregateOutcome> {
        let first = assessments.first().ok_or(ScoringError::NoAssessments)?;
        let w = &self.weights;

        let convergent = assessments.iter().all(|a| a.truthful == first.truthful);
        let n = assessments.len() as f64;
        let avg_reliability = assessments.iter().map(|a| a.general_reliability).sum::<f64>() / n;
        let avg_domain_strength = assessments.iter().map(|a| a.domain_strength).sum::<f64>() / n;
        let avg_confidence = assessments.iter().map(|a| a.confidence).sum::<f64>() / n;

        let convergence_term = if convergent { w.convergence_bonus } else { 0.0 };
        let reliability_term = (avg_reliability - NEUTRAL_MIDPOINT) * w.reliability_scale;
        let (weak_domain_term, strong_domain_term) =
            if convergent && avg_domain_strength < w.weak_domain_threshold {
                (w.weak_domain_bonus, 0.0)
            } else if avg_domain_strength >= w.strong_domain_threshold {
                (0.0, w.strong_domain_bonus)
            } else {
                (0.0, 0.0)
            };
        let confidence_term = (avg_confidence - NEUTRAL_MIDPOINT) * w.confidence_scale;

        let mut factors = BTreeMap::new();
        factors.insert(factor::BASE_SKEPTICISM.to_string(), w.base_skepticism);
        factors.insert(factor::CONVERGENCE.to_string(), convergence_term);
        factors.insert(factor::RELIABILITY.to_string(), reliability_term);
        factors.insert(
            factor::WEAK_DOMAIN_CONVERGENCE.to_string(),
            weak_domain_term,
        );
        factors.insert(factor::STRONG_DOMAIN.to_string(), strong_domain_term);
        factors.insert(factor::CONFIDENCE.to_string(), confidence_term);

        let sum = w.base_skepticism
            + convergence_term
            + reliability_term
            + weak_domain_term
            + strong_domain_term
            + confidence_term;
        let truth_probability = sum.clamp(w.floor, w.ceiling);

        Ok(AggregateOutcome {
            convergent,
            truth_probability,
            predicted: truth_probability > 0.5,
            factors,
        })
    }
}
