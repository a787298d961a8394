//! Reference scoring methods.
//!
//! Three deliberately simple ways of turning the same source assessments
//! into a prediction. They exist so every evaluation run can answer the
//! only question that matters for a scoring model: does the full
//! convergence model actually beat trusting one source, counting votes,
//! or weighting votes by reliability?

use crate::error::ScoringError;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use veritas_sources::SourceAssessment;

/// The reference methods, in increasing order of sophistication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineMethod {
    /// Trust the first source outright.
    SingleSource,
    /// Strict majority of verdicts, confidence-blind.
    NaiveMajority,
    /// Verdicts weighted by each source's general reliability.
    ReliabilityWeighted,
}

impl BaselineMethod {
    /// Stable label used as the method name in evaluation reports.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SingleSource => "single_source",
            Self::NaiveMajority => "naive_majority",
            Self::ReliabilityWeighted => "reliability_weighted",
        }
    }
}

impl fmt::Display for BaselineMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Prediction produced by a baseline method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineOutcome {
    /// Which method produced this prediction.
    pub method: BaselineMethod,
    /// Binary verdict on the claim.
    pub predicted: bool,
    /// Confidence attached to the verdict, in `[0.0, 1.0]`.
    pub confidence: f64,
}

/// Dispatches to the named baseline method.
pub fn score(method: BaselineMethod, assessments: &[SourceAssessment]) -> Result<BaselineOutcome> {
    match method {
        BaselineMethod::SingleSource => single_source(assessments),
        BaselineMethod::NaiveMajority => naive_majority(assessments),
        BaselineMethod::ReliabilityWeighted => reliability_weighted(assessments),
    }
}

/// Takes the first source's verdict and confidence verbatim.
pub fn single_source(assessments: &[SourceAssessment]) -> Result<BaselineOutcome> {
    let first = assessments.first().ok_or(ScoringError::NoAssessments)?;
    Ok(BaselineOutcome {
        method: BaselineMethod::SingleSource,
        predicted: first.truthful,
        confidence: first.confidence,
    })
}

/// Strict majority vote; confidence is the unweighted mean.
///
/// An even split is not a majority, so a tie predicts false.
pub fn naive_majority(assessments: &[SourceAssessment]) -> Result<BaselineOutcome> {
    if assessments.is_empty() {
        return Err(ScoringError::NoAssessments);
    }
    let true_votes = assessments.iter().filter(|a| a.truthful).count();
    let confidence =
        assessments.iter().map(|a| a.confidence).sum::<f64>() / assessments.len() as f64;
    Ok(BaselineOutcome {
        method: BaselineMethod::NaiveMajority,
        predicted: true_votes > assessments.len() / 2,
        confidence,
    })
}

/// Reliability-weighted vote.
///
/// Each verdict counts as `1.0` (true) or `0.0` (false) weighted by the
/// source's general reliability; the claim is predicted true when the
/// weighted truth score exceeds `0.5`. Confidence is the same weighted
/// mean over source confidences. If every weight is zero the method has
/// no opinion: predicted false at zero confidence.
pub fn reliability_weighted(assessments: &[SourceAssessment]) -> Result<BaselineOutcome> {
    if assessments.is_empty() {
        return Err(ScoringError::NoAssessments);
    }
    let total_weight: f64 = assessments.iter().map(|a| a.general_reliability).sum();
    if total_weight == 0.0 {
        return Ok(BaselineOutcome {
            method: BaselineMethod::ReliabilityWeighted,
            predicted: false,
            confidence: 0.0,
        });
    }
    let truth_score = assessments
        .iter()
        .map(|a| if a.truthful { a.general_reliability } else { 0.0 })
        .sum::<f64>()
        / total_weight;
    let confidence = assessments
        .iter()
        .map(|a| a.confidence * a.general_reliability)
        .sum::<f64>()
        / total_weight;
    Ok(BaselineOutcome {
        method: BaselineMethod::ReliabilityWeighted,
        predicted: truth_score > 0.5,
        confidence,
    })
}
