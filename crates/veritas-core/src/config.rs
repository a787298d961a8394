//! Configuration types for the Veritas pipeline.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use veritas_escalation::CalibrationWeights;
use veritas_scoring::{ConvergencePolicy, ScoringWeights};

/// Configuration for the Veritas truth-assessment facade.
///
/// The default configuration uses the corrected convergence policy;
/// callers who want the historical naive-boost behavior must opt in
/// explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VeritasConfig {
    /// Assessment collector settings.
    pub collector: CollectorConfig,

    /// Aggregation scoring weights.
    pub scoring: ScoringWeights,

    /// Convergent-uncertainty handling.
    pub policy: ConvergencePolicy,

    /// Escalation pipeline settings.
    pub escalation: EscalationConfig,

    /// Batch runner settings.
    pub batch: BatchConfig,
}

impl Default for VeritasConfig {
    fn default() -> Self {
        Self {
            collector: CollectorConfig::default(),
            scoring: ScoringWeights::default(),
            policy: ConvergencePolicy::corrected(),
            escalation: EscalationConfig::default(),
            batch: BatchConfig::default(),
        }
    }
}

/// Assessment collector settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Per-source assessment deadline in milliseconds.
    pub source_timeout_ms: u64,
}

impl CollectorConfig {
    /// The per-source deadline as a [`Duration`].
    pub fn source_timeout(&self) -> Duration {
        Duration::from_millis(self.source_timeout_ms)
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            source_timeout_ms: 30_000,
        }
    }
}

/// Escalation pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalationConfig {
    /// Per-stage deadline in milliseconds.
    pub stage_timeout_ms: u64,

    /// Final-confidence calibration weights.
    pub calibration: CalibrationWeights,
}

impl EscalationConfig {
    /// The per-stage deadline as a [`Duration`].
    pub fn stage_timeout(&self) -> Duration {
        Duration::from_millis(self.stage_timeout_ms)
    }
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            stage_timeout_ms: 60_000,
            calibration: CalibrationWeights::default(),
        }
    }
}

/// Batch runner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum number of claims assessed concurrently.
    ///
    /// Size this to what the slowest source capability tolerates; every
    /// in-flight claim queries every source.
    pub max_concurrency: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { max_concurrency: 4 }
    }
}
