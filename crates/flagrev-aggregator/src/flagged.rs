//! Reviewed ("flagged") edit counting.
//!
//! Candidates are the account's edits in reviewable namespaces, starting
//! `unreviewed_grace_days` before its last edit (newer edits may simply not
//! have been looked at yet) and never after the cutoff. Revision ids are
//! checked in batches of `flagged_batch_size`.
//!
//! Approximate mode always checks the first batch and then stops as soon as
//! `flagged_saturation` reviewed edits have been seen. Exact mode checks
//! every batch.

use chrono::{DateTime, Duration, Utc};
use flagrev_core::config::AggregationConfig;
use flagrev_core::errors::FlagrevResult;
use flagrev_core::models::{AccountInfo, NamespaceId};
use flagrev_core::traits::{ActivitySource, ContributionQuery};
use flagrev_observability::events;

/// Outcome of a reviewed-edit scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlaggedCount {
    pub count: u64,
    /// False when the scan stopped before checking every candidate.
    pub exact: bool,
}

/// Count reviewed edits of `info`'s account at or before `cutoff`.
pub fn count<S: ActivitySource + ?Sized>(
    source: &S,
    info: &AccountInfo,
    cutoff: DateTime<Utc>,
    config: &AggregationConfig,
    exact: bool,
) -> FlagrevResult<FlaggedCount> {
    let Some(last_edit) = info.last_edit else {
        return Ok(FlaggedCount {
            count: 0,
            exact: true,
        });
    };

    let grace = Duration::days(i64::from(config.unreviewed_grace_days));
    let start = (last_edit - grace).min(cutoff);
    let query = ContributionQuery::newest(config.contribution_limit)
        .starting_at(start)
        .in_namespaces(&NamespaceId::REVIEWABLE);

    let revision_ids: Vec<u64> = source
        .contributions(&info.account_ref(), &query)?
        .into_iter()
        .filter(|c| c.namespace.is_reviewable() && c.timestamp <= start)
        .map(|c| c.revision_id)
        .collect();

    let batch_size = config.flagged_batch_size.max(1);
    let mut batches = revision_ids.chunks(batch_size);
    let mut counted = 0u64;
    let mut scanned = 0usize;

    if let Some(first) = batches.next() {
        counted += source.reviewed_revision_count(first)?;
        scanned += first.len();
    }
    for batch in batches {
        if !exact && counted >= config.flagged_saturation {
            break;
        }
        counted += source.reviewed_revision_count(batch)?;
        scanned += batch.len();
    }

    let complete = scanned == revision_ids.len();
    if !complete {
        events::flagged_scan_stopped(&info.name, counted, revision_ids.len() - scanned);
    }

    Ok(FlaggedCount {
        count: counted,
        exact: complete,
    })
}
