//! # Veritas Sources
//!
//! Source capability layer for collaborative truth assessment.
//! Defines what a claim is, what an evidence source looks like, and how
//! judgments are gathered from many sources at once.
//!
//! ## Overview
//!
//! A [`Claim`] is a factual statement tagged with a knowledge domain.
//! Each evidence source is described by a [`SourceProfile`] (general
//! reliability plus per-domain competence) and exposed through the
//! [`SourceCapability`] trait, which returns a raw [`AssessmentResponse`].
//! The [`AssessmentCollector`] fans a claim out to every source
//! concurrently and joins the results into a complete, ordered list of
//! [`SourceAssessment`] records, one per source, always.
//!
//! ## Failure Semantics
//!
//! Sources are unreliable by definition, so the collector never lets one
//! of them abort a claim:
//!
//! - A failed or timed-out call degrades to the default assessment
//!   (`truthful = false`, `confidence = 0.0`) tagged as degraded.
//! - A response whose confidence could not be parsed receives the
//!   documented fallback of `0.6`.
//! - Out-of-range confidences are clamped into `[0.0, 1.0]`.
//!
//! The collector performs structural validation only; it never interprets
//! claim content.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use veritas_sources::{AssessmentCollector, Claim, ScriptedSource, SourceCapability, SourceProfile};
//! use std::sync::Arc;
//!
//! let claim = Claim::new("The Riemann hypothesis is true", "mathematics");
//! let profile = SourceProfile::new("oracle-1", 0.85).with_domain_strength("mathematics", 0.9);
//! let sources: Vec<Arc<dyn SourceCapability>> =
//!     vec![Arc::new(ScriptedSource::answering(profile, true))];
//!
//! let collector = AssessmentCollector::default();
//! let assessments = collector.collect(&claim, &sources).await;
//! assert_eq!(assessments.len(), sources.len());
//! ```

pub mod assessment;
pub mod capability;
pub mod claim;
pub mod collector;
pub mod error;
pub mod profile;
pub mod scripted;

pub use assessment::{AssessmentResponse, SourceAssessment, FALLBACK_CONFIDENCE};
pub use capability::SourceCapability;
pub use claim::Claim;
pub use collector::AssessmentCollector;
pub use error::SourceError;
pub use profile::{SourceProfile, DEFAULT_DOMAIN_STRENGTH};
pub use scripted::{ScriptedBehavior, ScriptedSource};

/// Result type for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
