//! Article edits OR reviewed edits.
//!
//! Passes when either the reviewer program's content-edit count or the
//! reviewed-edit count reaches its own minimum. The text names the branch
//! that was satisfied, preferring the content-edit branch.

use flagrev_core::models::{Criterion, PredicateResult, ReviewerStats};

pub fn check(
    stats: &ReviewerStats,
    reviewed_edits: u64,
    reviewed_exact: bool,
    min_content: u64,
    min_reviewed: u64,
) -> PredicateResult {
    let content_edits = stats.total_content_edits();
    // An approximate scan stops early, so its number is a lower bound.
    let reviewed = if reviewed_exact {
        reviewed_edits.to_string()
    } else {
        format!("at least {reviewed_edits}")
    };

    if content_edits >= min_content {
        PredicateResult::new(
            Criterion::ContentOrReviewedEdits,
            true,
            format!(
                "Account has {content_edits} article edits, meeting the required {min_content}."
            ),
        )
    } else if reviewed_edits >= min_reviewed {
        PredicateResult::new(
            Criterion::ContentOrReviewedEdits,
            true,
            format!(
                "Account has {reviewed} reviewed edits, meeting the required {min_reviewed} \
                 (article edits: {content_edits} of {min_content})."
            ),
        )
    } else {
        PredicateResult::new(
            Criterion::ContentOrReviewedEdits,
            false,
            format!(
                "Account has {content_edits} article edits, fewer than the required {min_content}, \
                 and {reviewed} reviewed edits, fewer than the required {min_reviewed}."
            ),
        )
    }
}
