//! # Batch Scenario Tests
//!
//! Tests for the bounded-concurrency batch runner and its cooperative
//! cancellation across realistic claim mixes.
//!
//! ## Scenarios Covered
//!
//! 1. **Ordering**: Verdicts come back in input order whatever the
//!    completion order
//! 2. **Mixed Resolution**: Scored and escalated claims coexist in one
//!    batch
//! 3. **Concurrency Bound**: No more than `max_concurrency` claims are
//!    in flight
//! 4. **Cancellation**: In-flight claims are dropped at checkpoints,
//!    nothing leaks

use std::sync::Arc;
use std::time::{Duration, Instant};

use veritas_core::{
    CancellationHandle, Claim, ConsensusStrength, ScriptedDeliberation, ScriptedSource,
    ScriptedValidation, SourceCapability, SourceProfile, Veritas, VeritasConfig,
};

/// A reliable physics expert answering instantly.
fn expert(id: &str, truthful: bool) -> Arc<dyn SourceCapability> {
    let profile = SourceProfile::new(id, 0.85).with_domain_strength("physics", 0.9);
    Arc::new(ScriptedSource::answering(profile, truthful))
}

/// A reliable physics expert that sleeps for `delay` before answering.
fn slow_expert(id: &str, delay: Duration) -> Arc<dyn SourceCapability> {
    let profile = SourceProfile::new(id, 0.85).with_domain_strength("physics", 0.9);
    Arc::new(ScriptedSource::stalling(profile, delay))
}

fn veritas(config: VeritasConfig, sources: Vec<Arc<dyn SourceCapability>>) -> Veritas {
    Veritas::new(
        config,
        sources,
        Arc::new(ScriptedDeliberation::reaching(ConsensusStrength::Consensus)),
        Arc::new(ScriptedValidation::unknown()),
    )
    .unwrap()
}

fn physics_claim(content: &str) -> Claim {
    Claim::new(content, "physics")
}

// =============================================================================
// ORDERING AND MIXED RESOLUTION
// =============================================================================

#[tokio::test]
async fn test_batch_preserves_input_order() {
    let veritas = veritas(
        VeritasConfig::default(),
        vec![expert("alpha", true), expert("beta", true)],
    );

    // Experts only know physics, so the history claims escalate while
    // the physics claims score.
    let claims = vec![
        physics_claim("Sound needs a medium to travel"),
        Claim::new("The treaty was ratified last week", "recent_events"),
        physics_claim("Entropy decreases in closed systems"),
        Claim::new("The election results were certified", "recent_events"),
    ];

    let report = veritas.assess_batch(&claims, CancellationHandle::new()).await;

    assert_eq!(report.len(), 4);
    assert_eq!(report.completed(), 4);
    assert!(!report.was_cancelled());

    for (index, claim) in claims.iter().enumerate() {
        let verdict = report.verdict(index).unwrap();
        assert_eq!(verdict.claim().content, claim.content, "Slot {} out of order", index);
    }
    assert!(report.verdict(0).unwrap().is_scored());
    assert!(report.verdict(1).unwrap().is_escalated());
    assert!(report.verdict(2).unwrap().is_scored());
    assert!(report.verdict(3).unwrap().is_escalated());
}

#[tokio::test]
async fn test_batch_of_one_matches_single_assessment() {
    let veritas = veritas(
        VeritasConfig::default(),
        vec![expert("alpha", true), expert("beta", true)],
    );
    let claim = physics_claim("Light slows down in glass");

    let single = veritas.assess(&claim).await.unwrap();
    let report = veritas.assess_batch(std::slice::from_ref(&claim), CancellationHandle::new()).await;

    assert_eq!(report.completed(), 1);
    assert_eq!(report.verdict(0), Some(&single));
}

#[tokio::test]
async fn test_empty_batch_completes_immediately() {
    let veritas = veritas(VeritasConfig::default(), vec![expert("alpha", true)]);

    let report = veritas.assess_batch(&[], CancellationHandle::new()).await;

    assert!(report.is_empty());
    assert_eq!(report.completed(), 0);
    assert!(!report.was_cancelled());
}

// =============================================================================
// CONCURRENCY BOUND
// =============================================================================

#[tokio::test]
async fn test_batch_respects_concurrency_bound() {
    let mut config = VeritasConfig::default();
    config.batch.max_concurrency = 2;

    let veritas = veritas(config, vec![slow_expert("slow", Duration::from_millis(100))]);

    let claims: Vec<Claim> = (0..4)
        .map(|i| physics_claim(&format!("Claim number {} holds", i)))
        .collect();

    let started = Instant::now();
    let report = veritas.assess_batch(&claims, CancellationHandle::new()).await;
    let elapsed = started.elapsed();

    assert_eq!(report.completed(), 4);
    // Four 100ms claims through two permits need at least two waves.
    assert!(
        elapsed >= Duration::from_millis(200),
        "Batch finished in {:?}; the concurrency bound was not applied",
        elapsed
    );
}

// =============================================================================
// CANCELLATION
// =============================================================================

#[tokio::test]
async fn test_pre_cancelled_batch_drops_everything() {
    let veritas = veritas(
        VeritasConfig::default(),
        vec![expert("alpha", true), expert("beta", true)],
    );
    let claims = vec![
        physics_claim("Magnets have two poles"),
        physics_claim("Helium is lighter than air"),
    ];

    let cancel = CancellationHandle::new();
    cancel.cancel();
    let report = veritas.assess_batch(&claims, cancel).await;

    assert_eq!(report.len(), 2);
    assert_eq!(report.completed(), 0);
    assert!(report.was_cancelled());
    assert!(report.verdict(0).is_none());
    assert!(report.verdict(1).is_none());
}

#[tokio::test]
async fn test_cancellation_drops_inflight_claims() {
    let mut config = VeritasConfig::default();
    config.batch.max_concurrency = 2;

    // Every claim needs 500ms in the source fan-out; cancellation lands
    // long before any claim can reach its post-collection checkpoint.
    let veritas = veritas(config, vec![slow_expert("slow", Duration::from_millis(500))]);
    let claims: Vec<Claim> = (0..4)
        .map(|i| physics_claim(&format!("Claim number {} holds", i)))
        .collect();

    let cancel = CancellationHandle::new();
    let runner = {
        let veritas = veritas.clone();
        let cancel = cancel.clone();
        tokio::spawn(async move { veritas.assess_batch(&claims, cancel).await })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    cancel.cancel();
    let report = runner.await.unwrap();

    assert!(report.was_cancelled());
    assert_eq!(report.completed(), 0, "No claim should outrun the cancellation");
    assert_eq!(report.len(), 4);
}

#[tokio::test]
async fn test_cancellation_keeps_completed_verdicts() {
    let mut config = VeritasConfig::default();
    config.batch.max_concurrency = 1;

    let veritas = veritas(config, vec![expert("alpha", true), expert("beta", true)]);
    let claims = vec![
        physics_claim("Copper conducts electricity"),
        physics_claim("Glass is an insulator"),
    ];

    // Cancel only after the batch has fully drained: every verdict must
    // survive, and only the flag reflects the late request.
    let cancel = CancellationHandle::new();
    let report = veritas.assess_batch(&claims, cancel.clone()).await;
    cancel.cancel();

    assert_eq!(report.completed(), 2);
    assert!(!report.was_cancelled());
    assert!(cancel.is_cancelled());
}

// =============================================================================
// REPORT SERIALIZATION
// =============================================================================

#[tokio::test]
async fn test_batch_report_serialization() {
    let veritas = veritas(
        VeritasConfig::default(),
        vec![expert("alpha", true), expert("beta", true)],
    );
    let claims = vec![physics_claim("Ice floats on water")];

    let report = veritas.assess_batch(&claims, CancellationHandle::new()).await;
    let json = serde_json::to_string(&report).unwrap();

    assert!(json.contains("\"cancelled\":false"));
    assert!(json.contains("truth_probability"));
}
