use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds for the reviewer tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewerThresholds {
    pub min_age_days: u32,
    pub min_edit_count: u64,
    /// Content edits recorded by the reviewer program (first OR-gate branch).
    pub min_content_edits: u64,
    /// Reviewed edits (second OR-gate branch).
    pub min_reviewed_edits: u64,
    pub min_spaced_edits: u32,
    pub min_distinct_pages: u32,
    pub min_recent_edits: u32,
    pub recent_window_days: u32,
    pub min_custom_summaries: u64,
    /// Upper bound for reverted / total edits, as a fraction (0.03 = 3%).
    pub max_revert_ratio: f64,
}

impl Default for ReviewerThresholds {
    fn default() -> Self {
        Self {
            min_age_days: defaults::DEFAULT_REVIEWER_MIN_AGE_DAYS,
            min_edit_count: defaults::DEFAULT_REVIEWER_MIN_EDIT_COUNT,
            min_content_edits: defaults::DEFAULT_REVIEWER_MIN_CONTENT_EDITS,
            min_reviewed_edits: defaults::DEFAULT_REVIEWER_MIN_REVIEWED_EDITS,
            min_spaced_edits: defaults::DEFAULT_REVIEWER_MIN_SPACED_EDITS,
            min_distinct_pages: defaults::DEFAULT_REVIEWER_MIN_DISTINCT_PAGES,
            min_recent_edits: defaults::DEFAULT_REVIEWER_MIN_RECENT_EDITS,
            recent_window_days: defaults::DEFAULT_REVIEWER_RECENT_WINDOW_DAYS,
            min_custom_summaries: defaults::DEFAULT_REVIEWER_MIN_CUSTOM_SUMMARIES,
            max_revert_ratio: defaults::DEFAULT_REVIEWER_MAX_REVERT_RATIO,
        }
    }
}

/// Thresholds for the auto-reviewer tier.
///
/// There is no edit-count, recent-activity or revert-ratio threshold here;
/// the auto-reviewer tier does not check those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoReviewerThresholds {
    pub min_age_days: u32,
    pub min_content_edits: u64,
    pub min_reviewed_edits: u64,
    pub min_spaced_edits: u32,
    pub min_distinct_pages: u32,
    pub min_custom_summaries: u64,
}

impl Default for AutoReviewerThresholds {
    fn default() -> Self {
        Self {
            min_age_days: defaults::DEFAULT_AUTO_REVIEWER_MIN_AGE_DAYS,
            min_content_edits: defaults::DEFAULT_AUTO_REVIEWER_MIN_CONTENT_EDITS,
            min_reviewed_edits: defaults::DEFAULT_AUTO_REVIEWER_MIN_REVIEWED_EDITS,
            min_spaced_edits: defaults::DEFAULT_AUTO_REVIEWER_MIN_SPACED_EDITS,
            min_distinct_pages: defaults::DEFAULT_AUTO_REVIEWER_MIN_DISTINCT_PAGES,
            min_custom_summaries: defaults::DEFAULT_AUTO_REVIEWER_MIN_CUSTOM_SUMMARIES,
        }
    }
}
