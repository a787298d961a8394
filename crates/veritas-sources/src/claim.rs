//! Claim type shared across the assessment pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A factual statement to be assessed, tagged with a knowledge domain.
///
/// Claims are immutable values. The domain tag (e.g. `"mathematics"`,
/// `"recent_events"`) is what sources use to report their competence; the
/// pipeline never inspects the content itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// The statement under assessment.
    pub content: String,
    /// Knowledge domain the statement belongs to.
    pub domain: String,
}

impl Claim {
    /// Creates a new claim.
    pub fn new(content: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            domain: domain.into(),
        }
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" [{}]", self.content, self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_display_includes_domain() {
        let claim = Claim::new("Water boils at 100C at sea level", "physics");
        let rendered = claim.to_string();
        assert!(rendered.contains("Water boils"));
        assert!(rendered.contains("[physics]"));
    }

    #[test]
    fn test_claim_serialization_roundtrip() {
        let claim = Claim::new("2 + 2 = 4", "mathematics");
        let json = serde_json::to_string(&claim).unwrap();
        let back: Claim = serde_json::from_str(&json).unwrap();
        assert_eq!(claim, back);
    }
}
