//! Scoring policy — report generation control.
//!
//! [`ScoringPolicy`] groups the parameters that decide how a report is
//! produced from the current answers. These are application-layer concerns;
//! the scoring formulas themselves live in the domain.

use maturity_domain::OverallWeighting;
use serde::{Deserialize, Serialize};

/// Report generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// How the overall score combines categories.
    pub weighting: OverallWeighting,
    /// Produce a report even when questions are unanswered (they score 0).
    pub allow_incomplete: bool,
}

impl ScoringPolicy {
    // ==================== Builder Methods ====================

    pub fn with_weighting(mut self, weighting: OverallWeighting) -> Self {
        self.weighting = weighting;
        self
    }

    pub fn with_allow_incomplete(mut self, allow: bool) -> Self {
        self.allow_incomplete = allow;
        self
    }
}
