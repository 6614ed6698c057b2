use flagrev_core::models::{Criterion, PredicateResult, ReviewerStats};

pub fn check(stats: &ReviewerStats, min: u32) -> PredicateResult {
    let pages = stats.distinct_content_pages();

    if pages >= min as usize {
        PredicateResult::new(
            Criterion::DistinctPages,
            true,
            format!("Account edited {pages} distinct article pages, meeting the required {min}."),
        )
    } else {
        PredicateResult::new(
            Criterion::DistinctPages,
            false,
            format!("Account edited only {pages} distinct article pages, fewer than the required {min}."),
        )
    }
}
