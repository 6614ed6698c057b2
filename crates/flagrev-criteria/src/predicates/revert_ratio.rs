//! Reverted-edit ratio.
//!
//! Without a reverted-edit statistic the check passes: no data, no penalty.
//! Otherwise the share of reverted edits among all edits must not exceed
//! `max_ratio`.

use flagrev_core::models::{Criterion, PredicateResult, ReviewerStats};

/// Reverted / total. An account with no edits has ratio 0 if nothing was
/// reverted and an unbounded ratio otherwise.
pub fn ratio(reverted: u64, total: u64) -> f64 {
    if total == 0 {
        if reverted == 0 {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        reverted as f64 / total as f64
    }
}

pub fn check(stats: &ReviewerStats, edit_count: u64, max_ratio: f64) -> PredicateResult {
    let Some(reverted) = stats.reverted_edits() else {
        return PredicateResult::new(
            Criterion::RevertRatio,
            true,
            "There are no records of reverted edits.",
        );
    };

    if edit_count == 0 && reverted > 0 {
        return PredicateResult::new(
            Criterion::RevertRatio,
            false,
            format!(
                "Account has {reverted} reverted edits out of 0 edits, above the allowed maximum of {:.0}%.",
                max_ratio * 100.0
            ),
        );
    }

    let actual = ratio(reverted, edit_count);
    let actual_pct = actual * 100.0;
    let max_pct = max_ratio * 100.0;

    if actual <= max_ratio {
        PredicateResult::new(
            Criterion::RevertRatio,
            true,
            format!(
                "Account has a reverted-edit share of {actual_pct:.2}%, within the allowed maximum of {max_pct:.0}%."
            ),
        )
    } else {
        PredicateResult::new(
            Criterion::RevertRatio,
            false,
            format!(
                "Account has a reverted-edit share of {actual_pct:.2}%, above the allowed maximum of {max_pct:.0}%."
            ),
        )
    }
}
