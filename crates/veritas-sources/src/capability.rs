//! Capability port for evidence sources.

use crate::assessment::AssessmentResponse;
use crate::claim::Claim;
use crate::profile::SourceProfile;
use crate::Result;
use async_trait::async_trait;

/// An external evidence source that can judge claims.
///
/// Implementations wrap whatever transport reaches the actual source
/// (model API, search backend, human queue). The contract is stateless
/// request/response: each `assess` call stands alone, and implementations
/// must not accumulate hidden session state between calls.
///
/// Errors are expected and recovered by the collector; implementations
/// should return [`SourceError`](crate::SourceError) rather than panic.
#[async_trait]
pub trait SourceCapability: Send + Sync {
    /// The reliability profile describing this source.
    fn profile(&self) -> &SourceProfile;

    /// Judges a single claim.
    async fn assess(&self, claim: &Claim) -> Result<AssessmentResponse>;
}
