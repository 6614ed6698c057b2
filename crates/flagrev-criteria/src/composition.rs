//! Tier compositions: fixed, ordered lists of battery predicates.

use chrono::{DateTime, Utc};
use flagrev_core::config::{AutoReviewerThresholds, ReviewerThresholds};
use flagrev_core::models::{ActivitySnapshot, EligibilityReport, Tier};

use crate::predicates::{ContributionScope, Predicate};

/// A tier's predicate pipeline. Results are concatenated in pipeline order.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    tier: Tier,
    predicates: Vec<Predicate>,
}

impl Composition {
    /// Reviewer tier: all ten predicates.
    pub fn reviewer(t: &ReviewerThresholds) -> Self {
        Self {
            tier: Tier::Reviewer,
            predicates: vec![
                Predicate::GeneralEligibility,
                Predicate::PriorSanctions,
                Predicate::RegistrationAge {
                    min_days: t.min_age_days,
                },
                Predicate::EditCount {
                    min: t.min_edit_count,
                },
                Predicate::ContentOrReviewedEdits {
                    min_content: t.min_content_edits,
                    min_reviewed: t.min_reviewed_edits,
                },
                Predicate::SpacedEdits {
                    min: t.min_spaced_edits,
                    scope: ContributionScope::AllNamespaces,
                },
                Predicate::DistinctPages {
                    min: t.min_distinct_pages,
                },
                Predicate::RecentArticleActivity {
                    min: t.min_recent_edits,
                    window_days: t.recent_window_days,
                },
                Predicate::CustomSummaries {
                    min: t.min_custom_summaries,
                },
                Predicate::RevertRatio {
                    max_ratio: t.max_revert_ratio,
                },
            ],
        }
    }

    /// Auto-reviewer tier. No edit-count, recent-activity or revert-ratio
    /// check; spaced edits are counted on article edits only.
    pub fn auto_reviewer(t: &AutoReviewerThresholds) -> Self {
        Self {
            tier: Tier::AutoReviewer,
            predicates: vec![
                Predicate::GeneralEligibility,
                Predicate::PriorSanctions,
                Predicate::RegistrationAge {
                    min_days: t.min_age_days,
                },
                Predicate::ContentOrReviewedEdits {
                    min_content: t.min_content_edits,
                    min_reviewed: t.min_reviewed_edits,
                },
                Predicate::SpacedEdits {
                    min: t.min_spaced_edits,
                    scope: ContributionScope::ArticlesOnly,
                },
                Predicate::DistinctPages {
                    min: t.min_distinct_pages,
                },
                Predicate::CustomSummaries {
                    min: t.min_custom_summaries,
                },
            ],
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn evaluate(&self, snapshot: &ActivitySnapshot, now: DateTime<Utc>) -> EligibilityReport {
        let results = self
            .predicates
            .iter()
            .flat_map(|p| {
                let results = p.evaluate(snapshot, now);
                tracing::trace!(
                    tier = %self.tier,
                    predicate = p.name(),
                    met = results.iter().all(|r| r.met),
                    "predicate evaluated"
                );
                results
            })
            .collect();
        EligibilityReport::new(self.tier, results)
    }
}
