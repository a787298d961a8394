//! Assessment records produced by sources and normalized by the collector.

use crate::profile::SourceProfile;
use serde::{Deserialize, Serialize};

/// Confidence substituted when a source answered but its confidence could
/// not be parsed from the response.
pub const FALLBACK_CONFIDENCE: f64 = 0.6;

/// Raw answer returned by a source capability, before normalization.
///
/// `confidence` is `None` when the source answered but no usable
/// confidence could be extracted; the collector substitutes
/// [`FALLBACK_CONFIDENCE`] in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResponse {
    /// The source's verdict on the claim.
    pub truthful: bool,
    /// Self-reported confidence, if one could be parsed.
    pub confidence: Option<f64>,
    /// Free-text justification.
    pub reasoning: String,
}

impl AssessmentResponse {
    /// Creates a response with a parsed confidence.
    pub fn new(truthful: bool, confidence: f64, reasoning: impl Into<String>) -> Self {
        Self {
            truthful,
            confidence: Some(confidence),
            reasoning: reasoning.into(),
        }
    }

    /// Creates a response whose confidence could not be parsed.
    pub fn without_confidence(truthful: bool, reasoning: impl Into<String>) -> Self {
        Self {
            truthful,
            confidence: None,
            reasoning: reasoning.into(),
        }
    }
}

/// One source's normalized judgment of one claim.
///
/// Immutable once built. Combines the source's answer with the profile
/// data the aggregator needs (reliability and domain strength), so the
/// scoring layer never has to look profiles up again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAssessment {
    /// Identifier of the source that produced this judgment.
    pub source_id: String,
    /// The source's verdict on the claim.
    pub truthful: bool,
    /// Confidence in the verdict, clamped to `[0.0, 1.0]`.
    pub confidence: f64,
    /// The source's overall reliability, from its profile.
    pub general_reliability: f64,
    /// The source's competence in the claim's domain, from its profile.
    pub domain_strength: f64,
    /// Free-text justification.
    pub reasoning: String,
    /// True when this record was substituted for a failed or timed-out
    /// call and carries the default verdict rather than a real one.
    pub degraded: bool,
}

impl SourceAssessment {
    /// Normalizes a raw response into an assessment.
    ///
    /// Applies the two structural rules: unparseable confidence becomes
    /// [`FALLBACK_CONFIDENCE`], and out-of-range confidence is clamped
    /// into `[0.0, 1.0]`.
    pub fn from_response(profile: &SourceProfile, domain: &str, response: AssessmentResponse) -> Self {
        let confidence = response
            .confidence
            .unwrap_or(FALLBACK_CONFIDENCE)
            .clamp(0.0, 1.0);
        Self {
            source_id: profile.source_id.clone(),
            truthful: response.truthful,
            confidence,
            general_reliability: profile.general_reliability,
            domain_strength: profile.domain_strength(domain),
            reasoning: response.reasoning,
            degraded: false,
        }
    }

    /// Builds the degraded default used when a source fails or times out.
    ///
    /// The default is maximally skeptical: `truthful = false` at zero
    /// confidence. Profile data is still recorded so the aggregate means
    /// stay defined.
    pub fn degraded(profile: &SourceProfile, domain: &str) -> Self {
        Self {
            source_id: profile.source_id.clone(),
            truthful: false,
            confidence: 0.0,
            general_reliability: profile.general_reliability,
            domain_strength: profile.domain_strength(domain),
            reasoning: "no response from source".to_string(),
            degraded: true,
        }
    }
}
