//! Concurrent assessment collection.

use crate::assessment::SourceAssessment;
use crate::capability::SourceCapability;
use crate::claim::Claim;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Deadline applied to each source call when none is configured.
pub const DEFAULT_SOURCE_TIMEOUT: Duration = Duration::from_secs(30);

/// Gathers judgments from every source concurrently.
///
/// All sources are queried in a single fan-out and joined before the
/// result is returned, so the caller always sees one assessment per
/// source, in source order. A source that errors or exceeds the
/// per-source deadline contributes a degraded default instead of
/// aborting the claim.
#[derive(Debug, Clone)]
pub struct AssessmentCollector {
    source_timeout: Duration,
}

impl AssessmentCollector {
    /// Creates a collector with the given per-source deadline.
    pub fn new(source_timeout: Duration) -> Self {
        Self { source_timeout }
    }

    /// The per-source deadline in effect.
    pub fn source_timeout(&self) -> Duration {
        self.source_timeout
    }

    /// Collects one assessment per source for the given claim.
    ///
    /// The output is ordered like `sources`; every slot is filled with
    /// either a real normalized assessment or the degraded default.
    pub async fn collect(
        &self,
        claim: &Claim,
        sources: &[Arc<dyn SourceCapability>],
    ) -> Vec<SourceAssessment> {
        debug!("Collecting {} assessments for {}", sources.len(), claim);

        let calls = sources.iter().map(|source| {
            let deadline = self.source_timeout;
            async move { (source.profile(), timeout(deadline, source.assess(claim)).await) }
        });

        join_all(calls)
            .await
            .into_iter()
            .map(|(profile, outcome)| match outcome {
                Ok(Ok(response)) => {
                    SourceAssessment::from_response(profile, &claim.domain, response)
                }
                Ok(Err(err)) => {
                    warn!(
                        "Source '{}' failed: {}; substituting degraded default",
                        profile.source_id, err
                    );
                    SourceAssessment::degraded(profile, &claim.domain)
                }
                Err(_) => {
                    warn!(
                        "Source '{}' exceeded {:?}; substituting degraded default",
                        profile.source_id, self.source_timeout
                    );
                    SourceAssessment::degraded(profile, &claim.domain)
                }
            })
            .collect()
    }
}

impl Default for AssessmentCollector {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_TIMEOUT)
    }
}
