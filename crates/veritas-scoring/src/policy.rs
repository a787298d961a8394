//! Convergent-uncertainty detection policy.
//!
//! Convergence is usually treated as corroboration. It stops deserving
//! that treatment when the agreeing sources are individually reliable in
//! general but weak in the claim's domain: sources with shared blind
//! spots converge on the same wrong answer, and the aggregate looks
//! *more* confident exactly when it should look less. The neutral-flag
//! policy detects that shape and routes the claim to escalation at a
//! neutral confidence instead of letting the weak-domain bonus boost it.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use veritas_sources::{Claim, SourceAssessment};

/// Preliminary confidence carried by every flag. Flagged claims are
/// neither believed nor disbelieved until escalation finishes.
const NEUTRAL_PRELIMINARY_CONFIDENCE: f64 = 0.5;

/// Reason string recorded on flags raised by the weak-domain predicate.
const WEAK_DOMAIN_CONVERGENCE: &str = "weak_domain_convergence";

/// Thresholds of the convergent-uncertainty predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagCriteria {
    /// Minimum general reliability for a source to count as reliable.
    pub min_reliability: f64,
    /// Minimum number of reliable sources required before a flag can be
    /// raised.
    pub min_reliable_sources: usize,
    /// Average domain strength (among reliable sources) below which the
    /// domain counts as weak.
    pub weak_domain_threshold: f64,
}

impl FlagCriteria {
    /// Overrides the reliable-source threshold.
    #[must_use]
    pub const fn with_min_reliability(mut self, value: f64) -> Self {
        self.min_reliability = value;
        self
    }

    /// Overrides the required number of reliable sources.
    #[must_use]
    pub const fn with_min_reliable_sources(mut self, value: usize) -> Self {
        self.min_reliable_sources = value;
        self
    }

    /// Overrides the weak-domain threshold.
    #[must_use]
    pub const fn with_weak_domain_threshold(mut self, value: f64) -> Self {
        self.weak_domain_threshold = value;
        self
    }
}

impl Default for FlagCriteria {
    fn default() -> Self {
        Self {
            min_reliability: 0.8,
            min_reliable_sources: 2,
            weak_domain_threshold: 0.3,
        }
    }
}

/// A claim pulled out of normal scoring for escalation.
///
/// Invariant: the preliminary confidence is always exactly neutral
/// (`0.5`). The field is private, the constructor takes no confidence
/// parameter, and the type is deliberately not deserializable, so no
/// path exists to a boosted flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvergentUncertaintyFlag {
    claim: Claim,
    convergent_sources: Vec<SourceAssessment>,
    preliminary_confidence: f64,
    requires_consensus: bool,
    reason: String,
}

impl ConvergentUncertaintyFlag {
    /// Creates a flag over the reliable sources that converged.
    pub fn new(claim: Claim, convergent_sources: Vec<SourceAssessment>) -> Self {
        Self {
            claim,
            convergent_sources,
            preliminary_confidence: NEUTRAL_PRELIMINARY_CONFIDENCE,
            requires_consensus: true,
            reason: WEAK_DOMAIN_CONVERGENCE.to_string(),
        }
    }

    /// The flagged claim.
    pub fn claim(&self) -> &Claim {
        &self.claim
    }

    /// The domain the convergence happened in.
    pub fn domain(&self) -> &str {
        &self.claim.domain
    }

    /// The reliable assessments that converged.
    pub fn convergent_sources(&self) -> &[SourceAssessment] {
        &self.convergent_sources
    }

    /// The verdict the sources converged on.
    pub fn converged_verdict(&self) -> bool {
        self.convergent_sources
            .first()
            .map(|a| a.truthful)
            .unwrap_or(false)
    }

    /// Neutral preliminary confidence; always exactly `0.5`.
    pub fn preliminary_confidence(&self) -> f64 {
        self.preliminary_confidence
    }

    /// Whether the flag demands consensus deliberation. Always true for
    /// flags raised by the weak-domain predicate.
    pub fn requires_consensus(&self) -> bool {
        self.requires_consensus
    }

    /// Why the flag was raised.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Caller-selected handling of convergent uncertainty.
///
/// `NaiveBoost` reproduces the historical behavior: the plain aggregate
/// score is always final, weak-domain bonus included. `NeutralFlag`
/// applies the corrected behavior: when the predicate holds, the claim
/// is flagged at neutral confidence and the plain score is discarded.
/// Neither variant is a default of the other; choosing is explicit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvergencePolicy {
    /// Trust the plain score unconditionally.
    NaiveBoost,
    /// Intercept weak-domain convergence with a neutral flag.
    NeutralFlag(FlagCriteria),
}

impl ConvergencePolicy {
    /// The corrected policy with default criteria.
    pub fn corrected() -> Self {
        Self::NeutralFlag(FlagCriteria::default())
    }

    /// Runs the predicate against a claim's assessments.
    ///
    /// Returns a flag when this policy decides the claim must be
    /// escalated instead of scored; `None` means the plain aggregate
    /// outcome stands.
    pub fn evaluate(
        &self,
        claim: &Claim,
        assessments: &[SourceAssessment],
    ) -> Option<ConvergentUncertaintyFlag> {
        match self {
            Self::NaiveBoost => None,
            Self::NeutralFlag(criteria) => detect(criteria, claim, assessments),
        }
    }
}

/// The convergent-uncertainty predicate.
///
/// All four conditions must hold, checked in order:
/// 1. at least `min_reliable_sources` non-degraded sources with
///    `general_reliability >= min_reliability`;
/// 2. average domain strength among those sources below
///    `weak_domain_threshold`;
/// 3. unanimity among those sources' verdicts;
/// 4. (implied) the flag is raised over exactly those sources.
///
/// Degraded assessments never count as reliable: a substituted default
/// is not evidence of convergence.
fn detect(
    criteria: &FlagCriteria,
    claim: &Claim,
    assessments: &[SourceAssessment],
) -> Option<ConvergentUncertaintyFlag> {
    let reliable: Vec<&SourceAssessment> = assessments
        .iter()
        .filter(|a| !a.degraded && a.general_reliability >= criteria.min_reliability)
        .collect();

    if reliable.len() < criteria.min_reliable_sources {
        debug!(
            "No flag for {}: {} reliable sources, need {}",
            claim,
            reliable.len(),
            criteria.min_reliable_sources
        );
        return None;
    }

    let avg_domain_strength =
        reliable.iter().map(|a| a.domain_strength).sum::<f64>() / reliable.len() as f64;
    if avg_domain_strength >= criteria.weak_domain_threshold {
        debug!(
            "No flag for {}: domain strength {:.2} is not weak",
            claim, avg_domain_strength
        );
        return None;
    }

    let first = reliable.first()?.truthful;
    if !reliable.iter().all(|a| a.truthful == first) {
        debug!("No flag for {}: reliable sources diverge", claim);
        return None;
    }

    info!(
        "Flagging {} for escalation: {} reliable sources converged in weak domain (avg strength {:.2})",
        claim,
        reliable.len(),
        avg_domain_strength
    );
    Some(ConvergentUncertaintyFlag::new(
        claim.clone(),
        reliable.into_iter().cloned().collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use veritas_sources::SourceProfile;

    fn claim() -> Claim {
        Claim::new("Element 119 has been synthesized", "specialized_science")
    }

    fn assessment(id: &str, truthful: bool, reliability: f64, strength: f64) -> SourceAssessment {
        SourceAssessment {
            source_id: id.to_string(),
            truthful,
            confidence: 0.8,
            general_reliability: reliability,
            domain_strength: strength,
            reasoning: String::new(),
            degraded: false,
        }
    }

    #[test]
    fn test_predicate_flags_reliable_weak_domain_convergence() {
        let assessments = vec![
            assessment("s1", true, 0.85, 0.2),
            assessment("s2", true, 0.85, 0.2),
        ];
        let flag = ConvergencePolicy::corrected()
            .evaluate(&claim(), &assessments)
            .expect("predicate case must flag");
        assert!((flag.preliminary_confidence() - 0.5).abs() < f64::EPSILON);
        assert!(flag.requires_consensus());
        assert!(flag.converged_verdict());
        assert_eq!(flag.convergent_sources().len(), 2);
        assert_eq!(flag.reason(), "weak_domain_convergence");
        assert_eq!(flag.domain(), "specialized_science");
    }

    #[test]
    fn test_divergent_sources_never_flag() {
        let assessments = vec![
            assessment("s1", true, 0.85, 0.1),
            assessment("s2", false, 0.85, 0.1),
        ];
        let flag = ConvergencePolicy::corrected().evaluate(&claim(), &assessments);
        assert!(flag.is_none(), "divergence must never flag, however weak the domain");
    }

    #[test]
    fn test_convergence_on_false_also_flags() {
        let assessments = vec![
            assessment("s1", false, 0.9, 0.2),
            assessment("s2", false, 0.85, 0.25),
        ];
        let flag = ConvergencePolicy::corrected()
            .evaluate(&claim(), &assessments)
            .expect("unanimity on false is still unanimity");
        assert!(!flag.converged_verdict());
    }

    #[test]
    fn test_too_few_reliable_sources_do_not_flag() {
        let assessments = vec![
            assessment("s1", true, 0.85, 0.2),
            assessment("s2", true, 0.6, 0.2), // below the 0.8 bar
        ];
        assert!(ConvergencePolicy::corrected()
            .evaluate(&claim(), &assessments)
            .is_none());
    }

    #[test]
    fn test_strong_domain_does_not_flag() {
        let assessments = vec![
            assessment("s1", true, 0.85, 0.6),
            assessment("s2", true, 0.85, 0.7),
        ];
        assert!(ConvergencePolicy::corrected()
            .evaluate(&claim(), &assessments)
            .is_none());
    }

    #[test]
    fn test_degraded_assessments_do_not_count_as_reliable() {
        let profile = SourceProfile::new("s2", 0.9);
        let degraded = SourceAssessment::degraded(&profile, "specialized_science");
        let assessments = vec![assessment("s1", true, 0.85, 0.2), degraded];
        assert!(ConvergencePolicy::corrected()
            .evaluate(&claim(), &assessments)
            .is_none());
    }

    #[test]
    fn test_naive_boost_policy_never_intercepts() {
        let assessments = vec![
            assessment("s1", true, 0.85, 0.2),
            assessment("s2", true, 0.85, 0.2),
        ];
        assert!(ConvergencePolicy::NaiveBoost
            .evaluate(&claim(), &assessments)
            .is_none());
    }

    #[test]
    fn test_custom_criteria_are_honored() {
        let assessments = vec![
            assessment("s1", true, 0.7, 0.2),
            assessment("s2", true, 0.7, 0.2),
        ];
        // Default bar (0.8) rejects these sources; a lowered bar flags.
        assert!(ConvergencePolicy::corrected()
            .evaluate(&claim(), &assessments)
            .is_none());
        let relaxed = ConvergencePolicy::NeutralFlag(
            FlagCriteria::default().with_min_reliability(0.65),
        );
        assert!(relaxed.evaluate(&claim(), &assessments).is_some());
    }

    #[test]
    fn test_flag_serializes_with_neutral_confidence() {
        let assessments = vec![
            assessment("s1", true, 0.85, 0.2),
            assessment("s2", true, 0.85, 0.2),
        ];
        let flag = ConvergencePolicy::corrected()
            .evaluate(&claim(), &assessments)
            .unwrap();
        let value = serde_json::to_value(&flag).unwrap();
        assert_eq!(value["preliminary_confidence"], 0.5);
        assert_eq!(value["requires_consensus"], true);
    }

    #[test]
    fn test_policy_selection_roundtrips_through_config() {
        let policy = ConvergencePolicy::corrected();
        let json = serde_json::to_string(&policy).unwrap();
        let back: ConvergencePolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(policy, back);

        let naive: ConvergencePolicy = serde_json::from_str("\"naive_boost\"").unwrap();
        assert_eq!(naive, ConvergencePolicy::NaiveBoost);
    }
}
