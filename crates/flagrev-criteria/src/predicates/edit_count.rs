use flagrev_core::models::{Criterion, PredicateResult};

pub fn check(edit_count: u64, min: u64) -> PredicateResult {
    if edit_count >= min {
        PredicateResult::new(
            Criterion::EditCount,
            true,
            format!("Account has {edit_count} edits, meeting the required {min}."),
        )
    } else {
        PredicateResult::new(
            Criterion::EditCount,
            false,
            format!("Account has {edit_count} edits, fewer than the required {min}."),
        )
    }
}
