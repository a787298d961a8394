//! Batch assessment support types.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::verdict::ClaimVerdict;

/// Clonable cancellation signal for batch runs.
///
/// Cancellation is cooperative: workers observe the signal at claim
/// checkpoints (before a claim starts, after the source join, after
/// resolution) and drop the claim unpublished. Nothing is interrupted
/// mid-flight, so a partially assessed claim never leaks into the
/// report.
#[derive(Debug, Clone, Default)]
pub struct CancellationHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancellationHandle {
    /// Creates a fresh, uncancelled handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals cancellation to every clone of this handle.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            info!("Batch cancellation requested");
        }
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Outcome of a batch run, ordered like the input claims.
///
/// A slot is `None` when its claim never resolved, either because the
/// batch was cancelled before the claim's verdict was published or
/// because resolution failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    results: Vec<Option<ClaimVerdict>>,
    cancelled: bool,
}

impl BatchReport {
    pub(crate) fn new(results: Vec<Option<ClaimVerdict>>, cancelled: bool) -> Self {
        Self { results, cancelled }
    }

    /// Number of claims in the batch.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of claims that resolved to a verdict.
    pub fn completed(&self) -> usize {
        self.results.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether the batch was cancelled.
    pub fn was_cancelled(&self) -> bool {
        self.cancelled
    }

    /// The verdict for the claim at `index`, if it resolved.
    pub fn verdict(&self, index: usize) -> Option<&ClaimVerdict> {
        self.results.get(index).and_then(Option::as_ref)
    }

    /// Resolved verdicts with their input indexes, in input order.
    pub fn verdicts(&self) -> impl Iterator<Item = (usize, &ClaimVerdict)> {
        self.results
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|verdict| (index, verdict)))
    }

    /// Consumes the report into its ordered slots.
    pub fn into_results(self) -> Vec<Option<ClaimVerdict>> {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use veritas_scoring::AggregateOutcome;
    use veritas_sources::Claim;

    fn verdict(content: &str) -> ClaimVerdict {
        ClaimVerdict::scored(
            Claim::new(content, "physics"),
            AggregateOutcome {
                convergent: true,
                truth_probability: 0.8,
                predicted: true,
                factors: BTreeMap::new(),
            },
        )
    }

    #[test]
    fn test_cancellation_reaches_every_clone() {
        let handle = CancellationHandle::new();
        let observer = handle.clone();
        assert!(!observer.is_cancelled());
        handle.cancel();
        assert!(observer.is_cancelled());
        // Cancelling twice is harmless.
        handle.cancel();
        assert!(observer.is_cancelled());
    }

    #[test]
    fn test_report_preserves_input_order_with_gaps() {
        let report = BatchReport::new(
            vec![Some(verdict("first")), None, Some(verdict("third"))],
            true,
        );
        assert_eq!(report.len(), 3);
        assert_eq!(report.completed(), 2);
        assert!(report.was_cancelled());
        assert!(report.verdict(1).is_none());

        let indexes: Vec<usize> = report.verdicts().map(|(index, _)| index).collect();
        assert_eq!(indexes, vec![0, 2]);
        assert_eq!(report.verdict(2).map(|v| v.claim().content.as_str()), Some("third"));
    }

    #[test]
    fn test_empty_report() {
        let report = BatchReport::new(vec![], false);
        assert!(report.is_empty());
        assert_eq!(report.completed(), 0);
        assert!(!report.was_cancelled());
    }
}
