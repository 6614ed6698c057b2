//! Recent article activity.
//!
//! Passes iff there are at least `min` article edits and the `min`-th most
//! recent one lies within `window_days` of now. This enforces a volume
//! floor and a recency floor in one check.

use chrono::{DateTime, Duration, Utc};
use flagrev_core::models::{Contribution, Criterion, PredicateResult};

pub fn check(
    article_contributions: &[Contribution],
    now: DateTime<Utc>,
    min: u32,
    window_days: u32,
) -> PredicateResult {
    let window = Duration::days(i64::from(window_days));
    let within = |c: &Contribution| now - c.timestamp <= window;

    let met = match (min as usize).checked_sub(1) {
        None => true,
        Some(idx) => article_contributions.get(idx).is_some_and(within),
    };

    // Sequence is newest first, so the in-window edits form a prefix.
    let recent = article_contributions.iter().take_while(|c| within(*c)).count();

    if met {
        PredicateResult::new(
            Criterion::RecentArticleActivity,
            true,
            format!(
                "Account made {recent} article edits in the last {window_days} days, meeting the required {min}."
            ),
        )
    } else {
        PredicateResult::new(
            Criterion::RecentArticleActivity,
            false,
            format!(
                "Account made {recent} article edits in the last {window_days} days, fewer than the required {min}."
            ),
        )
    }
}
