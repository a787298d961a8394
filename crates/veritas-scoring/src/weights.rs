//! Tunable constants of the additive scoring model.

use serde::{Deserialize, Serialize};

/// The named constants of the convergence scoring model.
///
/// Defaults reproduce the model's historical values. Every constant is
/// inspectable and overridable, builder style, so experiments can vary a
/// single factor without touching the scorer; none of the values is
/// adjusted behind the caller's back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Starting probability before any evidence is considered.
    pub base_skepticism: f64,
    /// Added when all sources agree on the same verdict.
    pub convergence_bonus: f64,
    /// Multiplier on `(avg_reliability - 0.5)`.
    pub reliability_scale: f64,
    /// Added when sources converge below [`Self::weak_domain_threshold`].
    /// Only the naive-boost policy lets this reach a final answer.
    pub weak_domain_bonus: f64,
    /// Added when average domain strength reaches
    /// [`Self::strong_domain_threshold`].
    pub strong_domain_bonus: f64,
    /// Average domain strength below which a domain counts as weak.
    pub weak_domain_threshold: f64,
    /// Average domain strength at which expertise earns the strong bonus.
    pub strong_domain_threshold: f64,
    /// Multiplier on `(avg_confidence - 0.5)`.
    pub confidence_scale: f64,
    /// Lower clamp on the final truth probability.
    pub floor: f64,
    /// Upper clamp on the final truth probability.
    pub ceiling: f64,
}

impl ScoringWeights {
    /// Overrides the base skepticism term.
    #[must_use]
    pub const fn with_base_skepticism(mut self, value: f64) -> Self {
        self.base_skepticism = value;
        self
    }

    /// Overrides the convergence bonus.
    #[must_use]
    pub const fn with_convergence_bonus(mut self, value: f64) -> Self {
        self.convergence_bonus = value;
        self
    }

    /// Overrides the reliability scale.
    #[must_use]
    pub const fn with_reliability_scale(mut self, value: f64) -> Self {
        self.reliability_scale = value;
        self
    }

    /// Overrides the weak-domain convergence bonus.
    #[must_use]
    pub const fn with_weak_domain_bonus(mut self, value: f64) -> Self {
        self.weak_domain_bonus = value;
        self
    }

    /// Overrides the strong-domain bonus.
    #[must_use]
    pub const fn with_strong_domain_bonus(mut self, value: f64) -> Self {
        self.strong_domain_bonus = value;
        self
    }

    /// Overrides the weak-domain threshold.
    #[must_use]
    pub const fn with_weak_domain_threshold(mut self, value: f64) -> Self {
        self.weak_domain_threshold = value;
        self
    }

    /// Overrides the strong-domain threshold.
    #[must_use]
    pub const fn with_strong_domain_threshold(mut self, value: f64) -> Self {
        self.strong_domain_threshold = value;
        self
    }

    /// Overrides the confidence scale.
    #[must_use]
    pub const fn with_confidence_scale(mut self, value: f64) -> Self {
        self.confidence_scale = value;
        self
    }

    /// Overrides the probability clamp bounds.
    #[must_use]
    pub const fn with_bounds(mut self, floor: f64, ceiling: f64) -> Self {
        self.floor = floor;
        self.ceiling = ceiling;
        self
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base_skepticism: 0.1,
            convergence_bonus: 0.4,
            reliability_scale: 0.5,
            weak_domain_bonus: 0.35,
            strong_domain_bonus: 0.2,
            weak_domain_threshold: 0.3,
            strong_domain_threshold: 0.7,
            confidence_scale: 0.2,
            floor: 0.05,
            ceiling: 0.95,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_historical_model() {
        let w = ScoringWeights::default();
        assert!((w.base_skepticism - 0.1).abs() < f64::EPSILON);
        assert!((w.convergence_bonus - 0.4).abs() < f64::EPSILON);
        assert!((w.weak_domain_bonus - 0.35).abs() < f64::EPSILON);
        assert!((w.strong_domain_bonus - 0.2).abs() < f64::EPSILON);
        assert!((w.floor - 0.05).abs() < f64::EPSILON);
        assert!((w.ceiling - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder_overrides_single_factor() {
        let w = ScoringWeights::default().with_convergence_bonus(0.3);
        assert!((w.convergence_bonus - 0.3).abs() < f64::EPSILON);
        // Everything else untouched.
        assert!((w.base_skepticism - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weights_serialization_roundtrip() {
        let w = ScoringWeights::default().with_bounds(0.01, 0.99);
        let json = serde_json::to_string(&w).unwrap();
        let back: ScoringWeights = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
    }
}
