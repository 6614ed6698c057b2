//! The fixed predicate battery.
//!
//! [`Predicate`] names one check together with its thresholds and dispatches
//! to the check's module. Compositions are ordered lists of these.

pub mod content_or_reviewed;
pub mod custom_summaries;
pub mod distinct_pages;
pub mod edit_count;
pub mod general;
pub mod recent_activity;
pub mod registration_age;
pub mod revert_ratio;
pub mod sanctions;
pub mod spaced_edits;

use chrono::{DateTime, Utc};
use flagrev_core::models::{ActivitySnapshot, Contribution, PredicateResult};

/// Which contribution sequence a sequence-based check walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionScope {
    AllNamespaces,
    ArticlesOnly,
}

impl ContributionScope {
    pub fn select(self, snapshot: &ActivitySnapshot) -> &[Contribution] {
        match self {
            ContributionScope::AllNamespaces => snapshot.contributions(),
            ContributionScope::ArticlesOnly => snapshot.article_contributions(),
        }
    }
}

/// One check of the battery with its tier-specific thresholds.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    GeneralEligibility,
    PriorSanctions,
    RegistrationAge { min_days: u32 },
    EditCount { min: u64 },
    ContentOrReviewedEdits { min_content: u64, min_reviewed: u64 },
    SpacedEdits { min: u32, scope: ContributionScope },
    DistinctPages { min: u32 },
    RecentArticleActivity { min: u32, window_days: u32 },
    CustomSummaries { min: u64 },
    RevertRatio { max_ratio: f64 },
}

impl Predicate {
    /// Evaluate against `snapshot`. `now` anchors age and recency checks.
    pub fn evaluate(&self, snapshot: &ActivitySnapshot, now: DateTime<Utc>) -> Vec<PredicateResult> {
        match *self {
            Predicate::GeneralEligibility => general::check(snapshot.account()),
            Predicate::PriorSanctions => sanctions::check(snapshot.log_events()),
            Predicate::RegistrationAge { min_days } => {
                vec![registration_age::check(snapshot.registration(), now, min_days)]
            }
            Predicate::EditCount { min } => vec![edit_count::check(snapshot.edit_count(), min)],
            Predicate::ContentOrReviewedEdits {
                min_content,
                min_reviewed,
            } => vec![content_or_reviewed::check(
                snapshot.reviewer_stats(),
                snapshot.flagged_edit_count(),
                snapshot.flagged_count_exact(),
                min_content,
                min_reviewed,
            )],
            Predicate::SpacedEdits { min, scope } => {
                vec![spaced_edits::check(scope.select(snapshot), min)]
            }
            Predicate::DistinctPages { min } => {
                vec![distinct_pages::check(snapshot.reviewer_stats(), min)]
            }
            Predicate::RecentArticleActivity { min, window_days } => vec![recent_activity::check(
                snapshot.article_contributions(),
                now,
                min,
                window_days,
            )],
            Predicate::CustomSummaries { min } => {
                vec![custom_summaries::check(snapshot.reviewer_stats(), min)]
            }
            Predicate::RevertRatio { max_ratio } => vec![revert_ratio::check(
                snapshot.reviewer_stats(),
                snapshot.edit_count(),
                max_ratio,
            )],
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Predicate::GeneralEligibility => "general_eligibility",
            Predicate::PriorSanctions => "prior_sanctions",
            Predicate::RegistrationAge { .. } => "registration_age",
            Predicate::EditCount { .. } => "edit_count",
            Predicate::ContentOrReviewedEdits { .. } => "content_or_reviewed_edits",
            Predicate::SpacedEdits { .. } => "spaced_edits",
            Predicate::DistinctPages { .. } => "distinct_pages",
            Predicate::RecentArticleActivity { .. } => "recent_article_activity",
            Predicate::CustomSummaries { .. } => "custom_summaries",
            Predicate::RevertRatio { .. } => "revert_ratio",
        }
    }
}
