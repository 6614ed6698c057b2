//! In-memory activity source for aggregator tests.

use std::cell::RefCell;
use std::collections::HashSet;

use chrono::{DateTime, Duration, TimeZone, Utc};
use flagrev_core::errors::SourceError;
use flagrev_core::models::*;
use flagrev_core::traits::{ActivitySource, ContributionQuery};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    now() - Duration::days(days)
}

pub fn edit(ns: i32, days: i64, rev: u64) -> Contribution {
    Contribution {
        page: format!("Page {rev}"),
        namespace: NamespaceId(ns),
        timestamp: days_ago(days),
        summary: format!("summary {rev}"),
        revision_id: rev,
    }
}

pub struct FakeSource {
    pub info: AccountInfo,
    pub contributions: Vec<Contribution>,
    pub log_events: Vec<LogEvent>,
    pub creation_events: Vec<LogEvent>,
    pub reviewed: HashSet<u64>,
    pub record: Option<String>,
    /// Sizes of every reviewed-revision lookup, in call order.
    pub lookups: RefCell<Vec<usize>>,
}

impl FakeSource {
    pub fn new(info: AccountInfo) -> Self {
        Self {
            info,
            contributions: Vec::new(),
            log_events: Vec::new(),
            creation_events: Vec::new(),
            reviewed: HashSet::new(),
            record: None,
            lookups: RefCell::new(Vec::new()),
        }
    }
}

impl ActivitySource for FakeSource {
    fn account_info(&self, account: &AccountRef) -> Result<AccountInfo, SourceError> {
        if account.name != self.info.name {
            return Err(SourceError::AccountNotFound {
                name: account.name.clone(),
            });
        }
        Ok(self.info.clone())
    }

    fn contributions(
        &self,
        _account: &AccountRef,
        query: &ContributionQuery,
    ) -> Result<Vec<Contribution>, SourceError> {
        let mut out: Vec<Contribution> = self
            .contributions
            .iter()
            .filter(|c| query.start.map_or(true, |s| c.timestamp <= s))
            .filter(|c| {
                query
                    .namespaces
                    .as_ref()
                    .map_or(true, |ns| ns.contains(&c.namespace))
            })
            .cloned()
            .collect();
        if query.oldest_first {
            out.sort_by_key(|c| c.timestamp);
        } else {
            out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        }
        out.truncate(query.limit);
        Ok(out)
    }

    fn log_events(&self, _account: &AccountRef) -> Result<Vec<LogEvent>, SourceError> {
        Ok(self.log_events.clone())
    }

    fn creation_events(&self, _account: &AccountRef) -> Result<Vec<LogEvent>, SourceError> {
        Ok(self.creation_events.clone())
    }

    fn reviewed_revision_count(&self, revision_ids: &[u64]) -> Result<u64, SourceError> {
        self.lookups.borrow_mut().push(revision_ids.len());
        Ok(revision_ids
            .iter()
            .filter(|id| self.reviewed.contains(id))
            .count() as u64)
    }

    fn reviewer_record(&self, _account: &AccountRef) -> Result<Option<String>, SourceError> {
        Ok(self.record.clone())
    }
}
