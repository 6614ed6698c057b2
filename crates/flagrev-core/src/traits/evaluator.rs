use chrono::{DateTime, Utc};

use crate::models::{ActivitySnapshot, EligibilityReport, Tier};

/// Evaluates a snapshot against one tier's criteria.
pub trait IEligibilityEvaluator: Send + Sync {
    /// Evaluate with `now` as the reference for age and recency checks.
    fn evaluate_at(
        &self,
        tier: Tier,
        snapshot: &ActivitySnapshot,
        now: DateTime<Utc>,
    ) -> EligibilityReport;

    fn evaluate(&self, tier: Tier, snapshot: &ActivitySnapshot) -> EligibilityReport {
        self.evaluate_at(tier, snapshot, Utc::now())
    }
}
