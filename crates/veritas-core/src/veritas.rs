//! The unified Veritas facade.
//!
//! This module provides the main entry point for the truth-assessment
//! system. The [`Veritas`] struct wires the collector, the scorer, the
//! convergence policy, and the escalation pipeline into a single API
//! for assessing claims.

use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};
use tracing::{debug, info, warn};

use veritas_escalation::{DeliberationCapability, EscalationPipeline, ValidationCapability};
use veritas_eval::{EvalError, LabeledClaim, MethodComparison};
use veritas_scoring::{baseline, BaselineMethod, ConvergencePolicy, ConvergenceScorer};
use veritas_sources::{AssessmentCollector, Claim, SourceAssessment, SourceCapability};

use crate::{
    batch::{BatchReport, CancellationHandle},
    config::VeritasConfig,
    error::VeritasError,
    verdict::ClaimVerdict,
    Result,
};

/// Method label under which the full pipeline appears in benchmarks.
pub const PIPELINE_METHOD: &str = "veritas";

/// The unified truth-assessment facade.
///
/// Veritas resolves each claim in three phases:
/// 1. **Collection**: fan the claim out to every source concurrently,
///    join into one ordered assessment list (failures degrade)
/// 2. **Policy**: check the assessments for convergent uncertainty
/// 3. **Resolution**: plain aggregate scoring, or the escalation
///    pipeline when the claim was flagged
///
/// # Example
///
/// ```rust,ignore
/// let veritas = Veritas::new(config, sources, deliberation, validation)?;
///
/// let verdict = veritas.assess(&claim).await?;
/// if verdict.predicted() {
///     // The system judges the claim truthful
/// }
/// ```
#[derive(Clone)]
pub struct Veritas {
    /// Configuration.
    config: VeritasConfig,

    /// Source capabilities queried for every claim.
    sources: Vec<Arc<dyn SourceCapability>>,

    /// Concurrent assessment collector.
    collector: AssessmentCollector,

    /// Convergence/reliability aggregator.
    scorer: ConvergenceScorer,

    /// Convergent-uncertainty policy.
    policy: ConvergencePolicy,

    /// Escalation pipeline for flagged claims.
    escalation: EscalationPipeline,
}

impl Veritas {
    /// Create a new Veritas instance.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no sources are given or the
    /// batch concurrency bound is zero.
    pub fn new(
        config: VeritasConfig,
        sources: Vec<Arc<dyn SourceCapability>>,
        deliberation: Arc<dyn DeliberationCapability>,
        validation: Arc<dyn ValidationCapability>,
    ) -> Result<Self> {
        if sources.is_empty() {
            return Err(VeritasError::Config(
                "at least one source capability is required".to_string(),
            ));
        }
        if config.batch.max_concurrency == 0 {
            return Err(VeritasError::Config(
                "batch.max_concurrency must be at least 1".to_string(),
            ));
        }

        let collector = AssessmentCollector::new(config.collector.source_timeout());
        let scorer = ConvergenceScorer::new(config.scoring.clone());
        let policy = config.policy.clone();
        let escalation = EscalationPipeline::new(deliberation, validation)
            .with_weights(config.escalation.calibration.clone())
            .with_stage_timeout(config.escalation.stage_timeout());

        info!("Veritas initialized with {} sources", sources.len());

        Ok(Self {
            config,
            sources,
            collector,
            scorer,
            policy,
            escalation,
        })
    }

    /// The configuration in effect.
    pub fn config(&self) -> &VeritasConfig {
        &self.config
    }

    /// Number of registered sources.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Assess a single claim through the full pipeline.
    pub async fn assess(&self, claim: &Claim) -> Result<ClaimVerdict> {
        debug!("Assessing {}", claim);
        let assessments = self.collector.collect(claim, &self.sources).await;
        self.resolve(claim, &assessments).await
    }

    /// Resolve collected assessments into a verdict.
    async fn resolve(
        &self,
        claim: &Claim,
        assessments: &[SourceAssessment],
    ) -> Result<ClaimVerdict> {
        if let Some(flag) = self.policy.evaluate(claim, assessments) {
            let record = self.escalation.run(flag).await;
            return Ok(ClaimVerdict::escalated(record));
        }

        let outcome = self.scorer.score(assessments)?;
        debug!("Scored {}: p = {:.3}", claim, outcome.truth_probability);
        Ok(ClaimVerdict::scored(claim.clone(), outcome))
    }

    /// Assess one claim, observing cancellation at each checkpoint.
    ///
    /// Checkpoints are claim start, after the source join, and after
    /// resolution; `None` means the claim was dropped unpublished.
    async fn assess_cancellable(
        &self,
        claim: &Claim,
        cancel: &CancellationHandle,
    ) -> Option<Result<ClaimVerdict>> {
        if cancel.is_cancelled() {
            return None;
        }
        let assessments = self.collector.collect(claim, &self.sources).await;
        if cancel.is_cancelled() {
            return None;
        }
        let verdict = self.resolve(claim, &assessments).await;
        if cancel.is_cancelled() {
            return None;
        }
        Some(verdict)
    }

    /// Assess many claims under the configured concurrency bound.
    ///
    /// Claims are independent; at most `batch.max_concurrency` are in
    /// flight at once and the report restores input order. Cancelling
    /// through the handle lets in-flight claims reach their next
    /// checkpoint, then drops them; completed verdicts stay in the
    /// report.
    pub async fn assess_batch(&self, claims: &[Claim], cancel: CancellationHandle) -> BatchReport {
        let total = claims.len();
        info!(
            "Assessing batch of {} claims ({} max concurrent)",
            total, self.config.batch.max_concurrency
        );

        let semaphore = Arc::new(Semaphore::new(self.config.batch.max_concurrency));
        let (tx, mut rx) = mpsc::channel::<(usize, Result<ClaimVerdict>)>(total.max(1));

        for (index, claim) in claims.iter().cloned().enumerate() {
            let this = self.clone();
            let semaphore = Arc::clone(&semaphore);
            let cancel = cancel.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                // The semaphore is never closed; a failed acquire only
                // means the runtime is shutting down.
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return;
                };
                if let Some(verdict) = this.assess_cancellable(&claim, &cancel).await {
                    let _ = tx.send((index, verdict)).await;
                }
            });
        }
        drop(tx);

        let mut results: Vec<Option<ClaimVerdict>> = vec![None; total];
        while let Some((index, verdict)) = rx.recv().await {
            match verdict {
                Ok(verdict) => results[index] = Some(verdict),
                Err(error) => warn!("Claim {} failed to resolve: {}", index, error),
            }
        }

        let report = BatchReport::new(results, cancel.is_cancelled());
        info!(
            "Batch finished: {}/{} claims resolved, cancelled: {}",
            report.completed(),
            total,
            report.was_cancelled()
        );
        report
    }

    /// Benchmark the full pipeline against the baselines.
    ///
    /// Each labeled claim is collected once; the pipeline and all three
    /// baseline methods work from the same assessments, so the
    /// comparison isolates the aggregation strategy from source noise.
    /// Methods are registered as [`PIPELINE_METHOD`] plus each
    /// [`BaselineMethod`] label.
    pub async fn benchmark(&self, claims: &[LabeledClaim]) -> Result<MethodComparison> {
        if claims.is_empty() {
            return Err(EvalError::Empty.into());
        }
        info!("Benchmarking {} labeled claims", claims.len());

        let baselines = [
            BaselineMethod::SingleSource,
            BaselineMethod::NaiveMajority,
            BaselineMethod::ReliabilityWeighted,
        ];
        let mut pipeline_track: (Vec<bool>, Vec<f64>) = (Vec::new(), Vec::new());
        let mut baseline_tracks: Vec<(Vec<bool>, Vec<f64>)> =
            vec![(Vec::new(), Vec::new()); baselines.len()];

        for labeled in claims {
            let claim = Claim::new(&labeled.content, &labeled.domain);
            let assessments = self.collector.collect(&claim, &self.sources).await;

            let verdict = self.resolve(&claim, &assessments).await?;
            debug!(
                "Benchmark {}: {} vs ground truth {}",
                claim,
                verdict,
                labeled.ground_truth
            );
            pipeline_track.0.push(verdict.predicted());
            pipeline_track.1.push(verdict.confidence());

            for (track, method) in baseline_tracks.iter_mut().zip(baselines) {
                let outcome = baseline::score(method, &assessments)?;
                track.0.push(outcome.predicted);
                track.1.push(outcome.confidence);
            }
        }

        let mut comparison =
            MethodComparison::new(claims.iter().map(|claim| claim.ground_truth).collect());
        comparison.add_method(PIPELINE_METHOD, pipeline_track.0, pipeline_track.1)?;
        for ((predictions, confidences), method) in baseline_tracks.into_iter().zip(baselines) {
            comparison.add_method(method.label(), predictions, confidences)?;
        }
        Ok(comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veritas_escalation::{ConsensusStrength, ScriptedDeliberation, ScriptedValidation};
    use veritas_sources::{ScriptedSource, SourceProfile};

    fn strong_source(id: &str, truthful: bool) -> Arc<dyn SourceCapability> {
        let profile = SourceProfile::new(id, 0.9).with_domain_strength("physics", 0.9);
        Arc::new(ScriptedSource::answering(profile, truthful))
    }

    fn veritas(sources: Vec<Arc<dyn SourceCapability>>) -> Result<Veritas> {
        Veritas::new(
            VeritasConfig::default(),
            sources,
            Arc::new(ScriptedDeliberation::reaching(ConsensusStrength::Consensus)),
            Arc::new(ScriptedValidation::unknown()),
        )
    }

    #[test]
    fn test_creation_requires_sources() {
        let error = veritas(Vec::new()).err();
        assert!(matches!(error, Some(VeritasError::Config(_))));
    }

    #[test]
    fn test_creation_rejects_zero_concurrency() {
        let mut config = VeritasConfig::default();
        config.batch.max_concurrency = 0;
        let error = Veritas::new(
            config,
            vec![strong_source("tester", true)],
            Arc::new(ScriptedDeliberation::reaching(ConsensusStrength::None)),
            Arc::new(ScriptedValidation::unknown()),
        )
        .err();
        assert!(matches!(error, Some(VeritasError::Config(_))));
    }

    #[tokio::test]
    async fn test_assess_scores_unflagged_claims() {
        let veritas = veritas(vec![
            strong_source("alpha", true),
            strong_source("beta", true),
        ])
        .unwrap();

        let verdict = veritas
            .assess(&Claim::new("Light bends near massive objects", "physics"))
            .await
            .unwrap();
        assert!(verdict.is_scored());
        assert!(verdict.predicted());
        assert_eq!(veritas.source_count(), 2);
    }
}
