//! Scanner: runs one daily scan end to end.

use chrono::{DateTime, Utc};
use flagrev_aggregator::SnapshotBuilder;
use flagrev_core::config::{AggregationConfig, FlagrevConfig};
use flagrev_core::errors::{FlagrevResult, SourceError};
use flagrev_core::models::{AccountRef, Tier};
use flagrev_core::traits::ActivitySource;
use flagrev_criteria::CriteriaEngine;
use flagrev_observability::events;

use crate::recent_changes::{candidate_usernames, scan_window, RecentChange, ScanWindow};
use crate::render::{edit_summary, render_section};
use crate::reported::ReportedCandidates;
use crate::selection::select_tier;

/// Log progress after this many accounts.
pub const PROGRESS_INTERVAL: usize = 100;

/// Everything a scan needs beyond per-account activity.
pub trait CandidateSource: ActivitySource {
    /// Recent changes with timestamps in `[start, end)`.
    fn recent_changes(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<RecentChange>, SourceError>;
}

/// Result of one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub window: ScanWindow,
    /// Accounts looked at, including skipped and failed ones.
    pub checked: usize,
    /// Proposed for reviewer rights, sorted by name.
    pub reviewers: Vec<String>,
    /// Proposed for auto-reviewer rights, sorted by name.
    pub auto_reviewers: Vec<String>,
    /// Accounts whose activity could not be gathered.
    pub failed: Vec<String>,
}

impl ScanOutcome {
    pub fn has_candidates(&self) -> bool {
        !self.reviewers.is_empty() || !self.auto_reviewers.is_empty()
    }

    /// Wikitext section for the report page.
    pub fn section(&self) -> String {
        render_section(self.window.start, &self.reviewers, &self.auto_reviewers)
    }

    pub fn summary(&self) -> String {
        edit_summary(self.window.start)
    }
}

/// Drives a scan: collect the previous day's editors, judge each one on a
/// snapshot cut off at the end of that day, and sort them into tiers.
pub struct Scanner<'a, S: CandidateSource + ?Sized> {
    source: &'a S,
    engine: CriteriaEngine,
    aggregation: AggregationConfig,
}

impl<'a, S: CandidateSource + ?Sized> Scanner<'a, S> {
    pub fn new(source: &'a S, config: &FlagrevConfig) -> Self {
        Self {
            source,
            engine: CriteriaEngine::new(config),
            aggregation: config.aggregation.clone(),
        }
    }

    /// Scan the day before `now`.
    ///
    /// Fails only if the recent changes cannot be listed. Accounts whose
    /// own data cannot be gathered are logged and reported in
    /// [`ScanOutcome::failed`].
    pub fn run(
        &self,
        now: DateTime<Utc>,
        reported: &ReportedCandidates,
    ) -> FlagrevResult<ScanOutcome> {
        let window = scan_window(now);
        let changes = self.source.recent_changes(window.start, window.end)?;
        let usernames = candidate_usernames(&changes);
        let total = usernames.len();
        tracing::info!(
            start = %window.start,
            end = %window.end,
            users = total,
            "starting candidate scan"
        );

        let builder = SnapshotBuilder::with_config(self.source, self.aggregation.clone());
        let mut outcome = ScanOutcome {
            window,
            checked: 0,
            reviewers: Vec::new(),
            auto_reviewers: Vec::new(),
            failed: Vec::new(),
        };

        // BTreeSet iteration keeps both lists sorted.
        for name in usernames {
            outcome.checked += 1;
            if outcome.checked % PROGRESS_INTERVAL == 0 {
                events::scan_progress(outcome.checked, total);
            }

            match self.check_account(&builder, &name, window.end, reported, now) {
                Ok(Some(tier)) => {
                    events::candidate_selected(&name, tier);
                    match tier {
                        Tier::Reviewer => outcome.reviewers.push(name),
                        Tier::AutoReviewer => outcome.auto_reviewers.push(name),
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    events::account_failed(&name, &e);
                    outcome.failed.push(name);
                }
            }
        }

        events::scan_completed(
            outcome.checked,
            outcome.reviewers.len(),
            outcome.auto_reviewers.len(),
            outcome.failed.len(),
        );
        Ok(outcome)
    }

    fn check_account(
        &self,
        builder: &SnapshotBuilder<'_, S>,
        name: &str,
        cutoff: DateTime<Utc>,
        reported: &ReportedCandidates,
        now: DateTime<Utc>,
    ) -> FlagrevResult<Option<Tier>> {
        let info = self.source.account_info(&AccountRef::new(name))?;
        if info.has_right(Tier::Reviewer.right()) {
            return Ok(None);
        }

        // Only the verdict matters here, so the approximate count suffices.
        let snapshot = builder.build_for(info, cutoff, false)?;
        Ok(select_tier(
            snapshot.account(),
            &snapshot,
            reported,
            &self.engine,
            now,
        ))
    }
}
