//! Source reliability profiles.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Domain strength assumed for a domain the profile says nothing about.
///
/// Unknown territory is treated as near-total incompetence rather than
/// average competence; this is what makes convergence in an unprofiled
/// domain suspicious instead of reassuring.
pub const DEFAULT_DOMAIN_STRENGTH: f64 = 0.1;

/// Static description of an evidence source's trustworthiness.
///
/// `general_reliability` captures how often the source is right across
/// all topics; `domain_strengths` captures competence per knowledge
/// domain. Both are probabilities in `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceProfile {
    /// Stable identifier for the source.
    pub source_id: String,
    /// Overall reliability across all domains.
    pub general_reliability: f64,
    /// Competence per knowledge domain. Missing domains resolve to
    /// [`DEFAULT_DOMAIN_STRENGTH`].
    pub domain_strengths: HashMap<String, f64>,
}

impl SourceProfile {
    /// Creates a profile with no domain strengths recorded.
    ///
    /// # Panics
    /// Panics if `general_reliability` is outside `[0.0, 1.0]`.
    pub fn new(source_id: impl Into<String>, general_reliability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&general_reliability),
            "general reliability must be between 0.0 and 1.0"
        );
        Self {
            source_id: source_id.into(),
            general_reliability,
            domain_strengths: HashMap::new(),
        }
    }

    /// Records a domain strength, builder style.
    ///
    /// # Panics
    /// Panics if `strength` is outside `[0.0, 1.0]`.
    pub fn with_domain_strength(mut self, domain: impl Into<String>, strength: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&strength),
            "domain strength must be between 0.0 and 1.0"
        );
        self.domain_strengths.insert(domain.into(), strength);
        self
    }

    /// Returns the source's competence in the given domain.
    ///
    /// Domains the profile does not mention resolve to
    /// [`DEFAULT_DOMAIN_STRENGTH`].
    pub fn domain_strength(&self, domain: &str) -> f64 {
        self.domain_strengths
            .get(domain)
            .copied()
            .unwrap_or(DEFAULT_DOMAIN_STRENGTH)
    }
}
