//! Deterministic scripted source for tests and wiring checks.

use crate::assessment::AssessmentResponse;
use crate::capability::SourceCapability;
use crate::claim::Claim;
use crate::error::SourceError;
use crate::profile::SourceProfile;
use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

/// What a [`ScriptedSource`] does when asked to assess a claim.
#[derive(Debug, Clone)]
pub enum ScriptedBehavior {
    /// Answer immediately with a fixed response.
    Respond(AssessmentResponse),
    /// Fail every call with the given reason.
    Fail {
        /// Reason reported in the resulting [`SourceError`].
        reason: String,
    },
    /// Sleep for `delay` before answering; used to exercise timeouts.
    Stall {
        /// How long to sleep before responding.
        delay: Duration,
        /// The response produced if the caller is still waiting.
        then: AssessmentResponse,
    },
}

/// A source capability with a fixed script instead of a real backend.
///
/// Used throughout the workspace's tests to stand in for model APIs or
/// search backends: it answers, fails, or stalls exactly as told, so
/// collector and pipeline behavior can be asserted deterministically.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    profile: SourceProfile,
    behavior: ScriptedBehavior,
}

impl ScriptedSource {
    /// A source that always answers with the given verdict at
    /// confidence 0.8.
    pub fn answering(profile: SourceProfile, truthful: bool) -> Self {
        Self {
            profile,
            behavior: ScriptedBehavior::Respond(AssessmentResponse::new(
                truthful,
                0.8,
                "scripted verdict",
            )),
        }
    }

    /// A source that fails every call.
    pub fn failing(profile: SourceProfile, reason: impl Into<String>) -> Self {
        Self {
            profile,
            behavior: ScriptedBehavior::Fail {
                reason: reason.into(),
            },
        }
    }

    /// A source that sleeps for `delay` before answering `true`.
    pub fn stalling(profile: SourceProfile, delay: Duration) -> Self {
        Self {
            profile,
            behavior: ScriptedBehavior::Stall {
                delay,
                then: AssessmentResponse::new(true, 0.8, "scripted verdict, eventually"),
            },
        }
    }

    /// Overrides the scripted confidence.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        if let ScriptedBehavior::Respond(response) | ScriptedBehavior::Stall { then: response, .. } =
            &mut self.behavior
        {
            response.confidence = Some(confidence);
        }
        self
    }

    /// Strips the scripted confidence, simulating an answer whose
    /// confidence could not be parsed.
    pub fn without_confidence(mut self) -> Self {
        if let ScriptedBehavior::Respond(response) | ScriptedBehavior::Stall { then: response, .. } =
            &mut self.behavior
        {
            response.confidence = None;
        }
        self
    }
}

#[async_trait]
impl SourceCapability for ScriptedSource {
    fn profile(&self) -> &SourceProfile {
        &self.profile
    }

    async fn assess(&self, _claim: &Claim) -> Result<AssessmentResponse> {
        match &self.behavior {
            ScriptedBehavior::Respond(response) => Ok(response.clone()),
            ScriptedBehavior::Fail { reason } => {
                Err(SourceError::unavailable(&self.profile.source_id, reason))
            }
            ScriptedBehavior::Stall { delay, then } => {
                tokio::time::sleep(*delay).await;
                Ok(then.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> SourceProfile {
        SourceProfile::new("scripted", 0.9)
    }

    #[tokio::test]
    async fn test_answering_source_returns_script() {
        let source = ScriptedSource::answering(profile(), true).with_confidence(0.65);
        let response = source.assess(&Claim::new("x", "y")).await.unwrap();
        assert!(response.truthful);
        assert!((response.confidence.unwrap() - 0.65).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_failing_source_reports_its_id() {
        let source = ScriptedSource::failing(profile(), "scripted outage");
        let err = source.assess(&Claim::new("x", "y")).await.unwrap_err();
        assert_eq!(err.source_id(), "scripted");
    }
}
