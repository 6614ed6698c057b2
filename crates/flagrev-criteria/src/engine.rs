//! CriteriaEngine: holds both tier compositions and evaluates snapshots
//! against them.

use chrono::{DateTime, Utc};
use flagrev_core::config::FlagrevConfig;
use flagrev_core::models::{ActivitySnapshot, EligibilityReport, Tier};
use flagrev_core::traits::IEligibilityEvaluator;
use flagrev_observability::events;

use crate::composition::Composition;

/// Evaluates activity snapshots for the reviewer and auto-reviewer tiers.
///
/// Stateless apart from its compositions; one engine can serve any number
/// of accounts, from any number of threads.
#[derive(Debug, Clone)]
pub struct CriteriaEngine {
    reviewer: Composition,
    auto_reviewer: Composition,
}

impl CriteriaEngine {
    pub fn new(config: &FlagrevConfig) -> Self {
        Self {
            reviewer: Composition::reviewer(&config.reviewer),
            auto_reviewer: Composition::auto_reviewer(&config.auto_reviewer),
        }
    }

    pub fn composition(&self, tier: Tier) -> &Composition {
        match tier {
            Tier::Reviewer => &self.reviewer,
            Tier::AutoReviewer => &self.auto_reviewer,
        }
    }

    pub fn evaluate_reviewer_tier(&self, snapshot: &ActivitySnapshot) -> EligibilityReport {
        self.evaluate_at(Tier::Reviewer, snapshot, Utc::now())
    }

    pub fn evaluate_auto_reviewer_tier(&self, snapshot: &ActivitySnapshot) -> EligibilityReport {
        self.evaluate_at(Tier::AutoReviewer, snapshot, Utc::now())
    }

    /// Evaluate with an explicit reference time (injectable for testing).
    pub fn evaluate_at(
        &self,
        tier: Tier,
        snapshot: &ActivitySnapshot,
        now: DateTime<Utc>,
    ) -> EligibilityReport {
        let report = self.composition(tier).evaluate(snapshot, now);
        events::tier_evaluated(&snapshot.account().name, &report);
        report
    }

    /// Both reports from the same snapshot, auto-reviewer first.
    pub fn evaluate_both_at(
        &self,
        snapshot: &ActivitySnapshot,
        now: DateTime<Utc>,
    ) -> (EligibilityReport, EligibilityReport) {
        (
            self.evaluate_at(Tier::AutoReviewer, snapshot, now),
            self.evaluate_at(Tier::Reviewer, snapshot, now),
        )
    }
}

impl Default for CriteriaEngine {
    fn default() -> Self {
        Self::new(&FlagrevConfig::default())
    }
}

impl IEligibilityEvaluator for CriteriaEngine {
    fn evaluate_at(
        &self,
        tier: Tier,
        snapshot: &ActivitySnapshot,
        now: DateTime<Utc>,
    ) -> EligibilityReport {
        CriteriaEngine::evaluate_at(self, tier, snapshot, now)
    }
}
