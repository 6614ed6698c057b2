use std::fmt;

use serde::{Deserialize, Serialize};

use super::PredicateResult;
use crate::constants::{AUTO_REVIEWER_GROUP, AUTO_REVIEW_RIGHT, REVIEWER_GROUP, REVIEW_RIGHT};

/// Permission tier an account is evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Reviewer,
    AutoReviewer,
}

impl Tier {
    /// Wiki group granting this tier.
    pub fn group(self) -> &'static str {
        match self {
            Tier::Reviewer => REVIEWER_GROUP,
            Tier::AutoReviewer => AUTO_REVIEWER_GROUP,
        }
    }

    /// User right an account in this tier already holds.
    pub fn right(self) -> &'static str {
        match self {
            Tier::Reviewer => REVIEW_RIGHT,
            Tier::AutoReviewer => AUTO_REVIEW_RIGHT,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Reviewer => f.write_str("reviewer"),
            Tier::AutoReviewer => f.write_str("auto-reviewer"),
        }
    }
}

/// Ordered results of one tier composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityReport {
    pub tier: Tier,
    pub results: Vec<PredicateResult>,
}

impl EligibilityReport {
    pub fn new(tier: Tier, results: Vec<PredicateResult>) -> Self {
        Self { tier, results }
    }

    /// Logical AND of every result.
    pub fn is_eligible(&self) -> bool {
        self.results.iter().all(|r| r.met)
    }

    pub fn failures(&self) -> impl Iterator<Item = &PredicateResult> {
        self.results.iter().filter(|r| !r.met)
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.met).count()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl fmt::Display for EligibilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.is_eligible() { "met" } else { "NOT met" };
        writeln!(f, "Criteria for {} rights {}:", self.tier, verdict)?;
        for r in &self.results {
            let mark = if r.met { 'x' } else { ' ' };
            writeln!(f, "[{mark}] {}", r.text)?;
        }
        Ok(())
    }
}
