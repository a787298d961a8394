//! Labeled ground-truth claims for benchmarking judgment methods.
//!
//! The embedded dataset holds 18 claims across four domains chosen to
//! stress different failure modes:
//!
//! | Domain                | Claims | Character                          |
//! |-----------------------|--------|------------------------------------|
//! | `mathematics`         | 5      | provable, high-certainty facts     |
//! | `physics`             | 5      | textbook facts plus frontier traps |
//! | `recent_events`       | 4      | post-training-cutoff knowledge     |
//! | `specialized_science` | 4      | narrow expertise required          |
//!
//! Ten claims are true and eight are false. Train/test splits are
//! seeded, so any two runs with the same seed and ratio evaluate on
//! the same claims.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Test fraction used when callers have no reason to pick another.
pub const DEFAULT_TEST_RATIO: f64 = 0.3;

/// Split seed used when callers have no reason to pick another.
pub const DEFAULT_SPLIT_SEED: u32 = 42;

/// How much background knowledge a claim takes to judge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Obvious facts and falsehoods.
    Easy,
    /// Requires domain knowledge.
    Medium,
    /// Subtle or contested claims.
    Hard,
}

impl Difficulty {
    /// Stable lowercase label, also used as a summary key.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One claim with its verified label and provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledClaim {
    /// The claim text as a source would receive it.
    pub content: String,
    /// Knowledge domain the claim belongs to.
    pub domain: String,
    /// `true` for factual claims, `false` for hallucinations.
    pub ground_truth: bool,
    /// Judgment difficulty.
    pub difficulty: Difficulty,
    /// Where the label was verified.
    pub verification_source: String,
    /// Curator notes on why the claim is interesting.
    pub notes: String,
}

impl LabeledClaim {
    pub fn new(
        content: impl Into<String>,
        domain: impl Into<String>,
        ground_truth: bool,
        difficulty: Difficulty,
        verification_source: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            domain: domain.into(),
            ground_truth,
            difficulty,
            verification_source: verification_source.into(),
            notes: notes.into(),
        }
    }
}

/// True/false claim counts for one summary bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelBalance {
    pub true_claims: usize,
    pub false_claims: usize,
}

impl LabelBalance {
    pub fn total(&self) -> usize {
        self.true_claims + self.false_claims
    }
}

/// Aggregate shape of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total: usize,
    pub true_claims: usize,
    pub false_claims: usize,
    /// Balance per domain, in domain name order.
    pub by_domain: BTreeMap<String, LabelBalance>,
    /// Balance per difficulty label, in label order.
    pub by_difficulty: BTreeMap<String, LabelBalance>,
}

/// An ordered collection of labeled claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundTruthDataset {
    claims: Vec<LabeledClaim>,
}

impl GroundTruthDataset {
    /// Wraps an explicit claim list.
    pub fn new(claims: Vec<LabeledClaim>) -> Self {
        Self { claims }
    }

    /// The embedded 18-claim benchmark dataset.
    pub fn embedded() -> Self {
        Self::new(embedded_claims())
    }

    /// All claims, in dataset order.
    pub fn all(&self) -> &[LabeledClaim] {
        &self.claims
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Claims belonging to one domain.
    pub fn for_domain(&self, domain: &str) -> Vec<&LabeledClaim> {
        self.claims.iter().filter(|c| c.domain == domain).collect()
    }

    /// Claims of one difficulty.
    pub fn for_difficulty(&self, difficulty: Difficulty) -> Vec<&LabeledClaim> {
        self.claims
            .iter()
            .filter(|c| c.difficulty == difficulty)
            .collect()
    }

    /// Claims labeled factual.
    pub fn true_claims(&self) -> Vec<&LabeledClaim> {
        self.claims.iter().filter(|c| c.ground_truth).collect()
    }

    /// Claims labeled hallucinated.
    pub fn false_claims(&self) -> Vec<&LabeledClaim> {
        self.claims.iter().filter(|c| !c.ground_truth).collect()
    }

    /// Counts claims overall, per domain, and per difficulty.
    pub fn summary(&self) -> DatasetSummary {
        let mut by_domain: BTreeMap<String, LabelBalance> = BTreeMap::new();
        let mut by_difficulty: BTreeMap<String, LabelBalance> = BTreeMap::new();
        let mut true_claims = 0usize;

        for claim in &self.claims {
            let domain = by_domain.entry(claim.domain.clone()).or_default();
            let difficulty = by_difficulty
                .entry(claim.difficulty.label().to_string())
                .or_default();
            if claim.ground_truth {
                true_claims += 1;
                domain.true_claims += 1;
                difficulty.true_claims += 1;
            } else {
                domain.false_claims += 1;
                difficulty.false_claims += 1;
            }
        }

        DatasetSummary {
            total: self.claims.len(),
            true_claims,
            false_claims: self.claims.len() - true_claims,
            by_domain,
            by_difficulty,
        }
    }

    /// Splits the dataset into `(train, test)` halves.
    ///
    /// The claims are shuffled with a seeded linear congruential
    /// generator and Fisher-Yates, then the first
    /// `floor(len * test_ratio)` shuffled claims become the test set.
    /// The same seed and ratio always produce the same split.
    pub fn train_test_split(
        &self,
        test_ratio: f64,
        seed: u32,
    ) -> (Vec<LabeledClaim>, Vec<LabeledClaim>) {
        let mut shuffled = self.claims.clone();
        let mut state = u64::from(seed);
        for i in (1..shuffled.len()).rev() {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let j = (state % (i as u64 + 1)) as usize;
            shuffled.swap(i, j);
        }

        let test_size = ((shuffled.len() as f64) * test_ratio) as usize;
        let train = shuffled.split_off(test_size.min(shuffled.len()));
        (train, shuffled)
    }
}

impl Default for GroundTruthDataset {
    fn default() -> Self {
        Self::embedded()
    }
}

fn embedded_claims() -> Vec<LabeledClaim> {
    vec![
        // mathematics
        LabeledClaim::new(
            "The sum of interior angles in any triangle equals 180 degrees",
            "mathematics",
            true,
            Difficulty::Easy,
            "Euclidean geometry theorem",
            "Fundamental geometric fact",
        ),
        LabeledClaim::new(
            "The square root of 2 is approximately 1.414",
            "mathematics",
            true,
            Difficulty::Easy,
            "Mathematical calculation",
            "Precise to 3 decimal places",
        ),
        LabeledClaim::new(
            "Euler's identity states that e^(iπ) + 1 = 0",
            "mathematics",
            true,
            Difficulty::Medium,
            "Complex analysis theorem",
            "Famous mathematical identity",
        ),
        LabeledClaim::new(
            "The sum of interior angles in any triangle equals 360 degrees",
            "mathematics",
            false,
            Difficulty::Easy,
            "Contradicts Euclidean geometry",
            "Confusing triangles with quadrilaterals",
        ),
        LabeledClaim::new(
            "The mathematical constant π equals exactly 22/7",
            "mathematics",
            false,
            Difficulty::Medium,
            "π is irrational, 22/7 is approximation",
            "Common misconception about π",
        ),
        // physics
        LabeledClaim::new(
            "Light travels at approximately 299,792,458 meters per second in vacuum",
            "physics",
            true,
            Difficulty::Easy,
            "NIST physical constants",
            "Defined constant in SI units",
        ),
        LabeledClaim::new(
            "Quantum tunneling allows particles to pass through energy barriers",
            "physics",
            true,
            Difficulty::Medium,
            "Quantum mechanics textbooks",
            "Well-established quantum phenomenon",
        ),
        LabeledClaim::new(
            "Superconductivity occurs when electrical resistance drops to zero",
            "physics",
            true,
            Difficulty::Medium,
            "Solid state physics",
            "Defining characteristic of superconductors",
        ),
        LabeledClaim::new(
            "Objects fall faster in a vacuum than in air",
            "physics",
            false,
            Difficulty::Easy,
            "Galileo's experiments",
            "Common misconception about gravity",
        ),
        LabeledClaim::new(
            "Room-temperature superconductors are commercially available",
            "physics",
            false,
            Difficulty::Hard,
            "Current materials science literature",
            "Active research area, not yet achieved",
        ),
        // recent_events
        LabeledClaim::new(
            "The COVID-19 pandemic was declared by WHO in March 2020",
            "recent_events",
            true,
            Difficulty::Easy,
            "WHO official declaration March 11, 2020",
            "Major global event, well documented",
        ),
        LabeledClaim::new(
            "Apple introduced the M1 chip in November 2020",
            "recent_events",
            true,
            Difficulty::Medium,
            "Apple press release November 10, 2020",
            "Technology industry milestone",
        ),
        LabeledClaim::new(
            "A room-temperature superconductor was commercially released in 2023",
            "recent_events",
            false,
            Difficulty::Hard,
            "No credible scientific reports",
            "Would be major scientific breakthrough if true",
        ),
        LabeledClaim::new(
            "ChatGPT was released by Google in late 2022",
            "recent_events",
            false,
            Difficulty::Easy,
            "ChatGPT released by OpenAI, not Google",
            "Incorrect attribution",
        ),
        // specialized_science
        LabeledClaim::new(
            "CRISPR-Cas9 uses guide RNA to target specific DNA sequences",
            "specialized_science",
            true,
            Difficulty::Medium,
            "Molecular biology literature",
            "Established gene editing mechanism",
        ),
        LabeledClaim::new(
            "Telomeres shorten with cellular division in most somatic cells",
            "specialized_science",
            true,
            Difficulty::Hard,
            "Cell biology research",
            "Key aging mechanism",
        ),
        LabeledClaim::new(
            "Quantum entanglement enables faster-than-light communication",
            "specialized_science",
            false,
            Difficulty::Hard,
            "No-communication theorem in quantum mechanics",
            "Common quantum mechanics misconception",
        ),
        LabeledClaim::new(
            "Human DNA contains exactly 50,000 protein-coding genes",
            "specialized_science",
            false,
            Difficulty::Medium,
            "Human genome project: ~20,000-25,000 genes",
            "Overestimate of gene count",
        ),
    ]
}
