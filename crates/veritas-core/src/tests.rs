//! Unit tests for veritas-core.

#[test]
fn test_crate_structure() {
    // Smoke test - verifies the module structure compiles
    use crate::{CancellationHandle, Claim, SourceProfile, VeritasConfig};

    let _config = VeritasConfig::default();
    let _handle = CancellationHandle::new();
    let _claim = Claim::new("The square root of 2 is irrational", "mathematics");
    let _profile = SourceProfile::new("encyclopedia", 0.9);
}
