use flagrev_core::models::{Criterion, PredicateResult, ReviewerStats};

pub fn check(stats: &ReviewerStats, min: u64) -> PredicateResult {
    let summaries = stats.custom_summary_edits();

    if summaries >= min {
        PredicateResult::new(
            Criterion::CustomSummaries,
            true,
            format!("Account wrote its own edit summary on {summaries} edits, meeting the required {min}."),
        )
    } else {
        PredicateResult::new(
            Criterion::CustomSummaries,
            false,
            format!("Account wrote its own edit summary on only {summaries} edits, fewer than the required {min}."),
        )
    }
}
