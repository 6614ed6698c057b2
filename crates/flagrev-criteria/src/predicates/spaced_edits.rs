//! Spaced edits: how many edits lie more than three days apart.
//!
//! Walks the sequence newest first. The newest edit counts and becomes the
//! anchor; every later edit more than three days older than the current
//! anchor counts and becomes the new anchor.

use chrono::Duration;
use flagrev_core::constants::SPACED_EDIT_GAP_DAYS;
use flagrev_core::models::{Contribution, Criterion, PredicateResult};

/// Number of spaced edits in `contributions` (newest first).
pub fn count(contributions: &[Contribution]) -> u32 {
    let gap = Duration::days(SPACED_EDIT_GAP_DAYS);
    let mut iter = contributions.iter();
    let Some(first) = iter.next() else {
        return 0;
    };

    let mut anchor = first.timestamp;
    let mut spaced = 1;
    for c in iter {
        if anchor - c.timestamp > gap {
            spaced += 1;
            anchor = c.timestamp;
        }
    }
    spaced
}

pub fn check(contributions: &[Contribution], min: u32) -> PredicateResult {
    if contributions.is_empty() {
        return PredicateResult::new(
            Criterion::SpacedEdits,
            false,
            format!(
                "Account has no edits yet, so fewer than {min} edits spaced more than {SPACED_EDIT_GAP_DAYS} days apart."
            ),
        );
    }

    let spaced = count(contributions);
    if spaced >= min {
        PredicateResult::new(
            Criterion::SpacedEdits,
            true,
            format!(
                "Account has {spaced} edits spaced more than {SPACED_EDIT_GAP_DAYS} days apart, meeting the required {min}."
            ),
        )
    } else {
        PredicateResult::new(
            Criterion::SpacedEdits,
            false,
            format!(
                "Account has {spaced} edits spaced more than {SPACED_EDIT_GAP_DAYS} days apart, fewer than the required {min}."
            ),
        )
    }
}
