//! Which tier, if any, a scanned account is proposed for.

use chrono::{DateTime, Utc};
use flagrev_core::models::{AccountInfo, ActivitySnapshot, Tier};
use flagrev_criteria::CriteriaEngine;

use crate::reported::ReportedCandidates;

/// Pick the tier to propose `account` for.
///
/// The reviewer tier is tried first. An account that qualifies for it but
/// was already listed falls through to the auto-reviewer tier, which is
/// skipped for holders of the autoreview right and for accounts already
/// listed there. Both tiers are judged on the same snapshot.
///
/// Accounts holding the review right are expected to be filtered out
/// beforehand.
pub fn select_tier(
    account: &AccountInfo,
    snapshot: &ActivitySnapshot,
    reported: &ReportedCandidates,
    engine: &CriteriaEngine,
    now: DateTime<Utc>,
) -> Option<Tier> {
    let name = account.name.as_str();

    let reviewer = engine.evaluate_at(Tier::Reviewer, snapshot, now);
    if reviewer.is_eligible() && !reported.is_reported_reviewer(name) {
        return Some(Tier::Reviewer);
    }

    if account.has_right(Tier::AutoReviewer.right()) || reported.is_reported_auto_reviewer(name) {
        return None;
    }

    engine
        .evaluate_at(Tier::AutoReviewer, snapshot, now)
        .is_eligible()
        .then_some(Tier::AutoReviewer)
}
