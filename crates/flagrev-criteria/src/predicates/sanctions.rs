//! Prior sanctions: review rights revoked, or the account blocked, at any
//! point in its log history.
//!
//! Rights and blocks are tracked independently, so a recent block does not
//! hide an older revocation or the other way round.

use flagrev_core::models::{Criterion, LogEvent, PredicateResult, Tier};

pub fn check(events: &[LogEvent]) -> Vec<PredicateResult> {
    let mut rights_revoked = false;
    let mut blocked = false;

    // Most recent first.
    for event in events.iter().rev() {
        if event.removes_group(Tier::Reviewer.group())
            || event.removes_group(Tier::AutoReviewer.group())
        {
            rights_revoked = true;
        }
        if event.is_block() {
            blocked = true;
        }
        if rights_revoked && blocked {
            break;
        }
    }

    let rights = if rights_revoked {
        PredicateResult::new(
            Criterion::ReviewRightsNeverRevoked,
            false,
            "Review rights were revoked from this account before.",
        )
    } else {
        PredicateResult::new(
            Criterion::ReviewRightsNeverRevoked,
            true,
            "Review rights have never been revoked from this account.",
        )
    };

    let block = if blocked {
        PredicateResult::new(Criterion::NeverBlocked, false, "Account was blocked before.")
    } else {
        PredicateResult::new(Criterion::NeverBlocked, true, "Account has never been blocked.")
    };

    vec![rights, block]
}
