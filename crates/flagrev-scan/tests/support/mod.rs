//! In-memory wiki for scan tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, TimeZone, Utc};
use flagrev_core::errors::SourceError;
use flagrev_core::models::*;
use flagrev_core::traits::{ActivitySource, ContributionQuery};
use flagrev_scan::{CandidateSource, ChangeKind, RecentChange};

/// Scan run time; the scanned day is 2024-09-01.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 2, 6, 0, 0).unwrap()
}

/// End of the scanned day, used as snapshot cutoff.
pub fn cutoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 2, 0, 0, 0).unwrap()
}

pub fn days_before_cutoff(days: i64) -> DateTime<Utc> {
    cutoff() - Duration::days(days)
}

#[derive(Debug, Clone)]
pub struct WikiAccount {
    pub info: AccountInfo,
    pub contributions: Vec<Contribution>,
    pub log_events: Vec<LogEvent>,
    pub record: Option<String>,
}

impl WikiAccount {
    pub fn new(name: &str, edit_count: u64, registered_days: i64) -> Self {
        let mut info = AccountInfo::new(name, edit_count);
        info.registration = Some(days_before_cutoff(registered_days));
        Self {
            info,
            contributions: Vec::new(),
            log_events: Vec::new(),
            record: None,
        }
    }

    /// Article edits at the given day offsets before the cutoff.
    pub fn article_edits(mut self, days: &[i64]) -> Self {
        let base = self.contributions.len() as u64;
        for (i, d) in days.iter().enumerate() {
            let rev = base + i as u64 + 1;
            self.contributions.push(Contribution {
                page: format!("{} {rev}", self.info.name),
                namespace: NamespaceId::MAIN,
                timestamp: days_before_cutoff(*d),
                summary: String::new(),
                revision_id: rev,
            });
        }
        self
    }

    pub fn record(mut self, raw: &str) -> Self {
        self.record = Some(raw.to_string());
        self
    }

    pub fn right(mut self, right: &str) -> Self {
        self.info.rights.push(right.to_string());
        self
    }

    /// Comfortably above every reviewer threshold.
    pub fn strong(name: &str) -> Self {
        let mut days = vec![0, 1, 2, 3, 4];
        days.extend((2..=20).map(|i| i * 4));
        let pages: Vec<String> = (0..40).map(|i| (1000 + i).to_string()).collect();
        Self::new(name, 1500, 800).article_edits(&days).record(&format!(
            "totalContentEdits=1100\nuniqueContentPages={}\neditComments=700\nrevertedEdits=5",
            pages.join(",")
        ))
    }

    /// Enough for auto-reviewer, but with no recent activity and too few
    /// edits for reviewer.
    pub fn occasional(name: &str) -> Self {
        let days: Vec<i64> = (0..30).map(|i| 40 + 6 * i).collect();
        let pages: Vec<String> = (0..20).map(|i| (2000 + i).to_string()).collect();
        Self::new(name, 200, 365).article_edits(&days).record(&format!(
            "totalContentEdits=180\nuniqueContentPages={}\neditComments=45",
            pages.join(",")
        ))
    }

    pub fn newcomer(name: &str) -> Self {
        Self::new(name, 10, 10).article_edits(&[0, 1, 2])
    }
}

#[derive(Debug, Default)]
pub struct FakeWiki {
    pub accounts: HashMap<String, WikiAccount>,
    pub changes: Vec<RecentChange>,
    pub reviewed: HashSet<u64>,
    pub recent_changes_down: bool,
    /// Number of account record lookups served.
    pub info_lookups: Cell<usize>,
}

impl FakeWiki {
    pub fn with(mut self, account: WikiAccount) -> Self {
        self.changes.push(edit_by(&account.info.name));
        self.accounts.insert(account.info.name.clone(), account);
        self
    }

    pub fn change(mut self, change: RecentChange) -> Self {
        self.changes.push(change);
        self
    }

    fn account(&self, account: &AccountRef) -> Result<&WikiAccount, SourceError> {
        self.accounts
            .get(&account.name)
            .ok_or_else(|| SourceError::AccountNotFound {
                name: account.name.clone(),
            })
    }
}

pub fn edit_by(user: &str) -> RecentChange {
    RecentChange {
        user: user.to_string(),
        kind: ChangeKind::Edit,
        anonymous: false,
        user_hidden: false,
    }
}

impl ActivitySource for FakeWiki {
    fn account_info(&self, account: &AccountRef) -> Result<AccountInfo, SourceError> {
        self.info_lookups.set(self.info_lookups.get() + 1);
        Ok(self.account(account)?.info.clone())
    }

    fn contributions(
        &self,
        account: &AccountRef,
        query: &ContributionQuery,
    ) -> Result<Vec<Contribution>, SourceError> {
        let mut out: Vec<Contribution> = self
            .account(account)?
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

    fn log_events(&self, account: &AccountRef) -> Result<Vec<LogEvent>, SourceError> {
        Ok(self.account(account)?.log_events.clone())
    }

    fn creation_events(&self, _account: &AccountRef) -> Result<Vec<LogEvent>, SourceError> {
        Ok(Vec::new())
    }

    fn reviewed_revision_count(&self, revision_ids: &[u64]) -> Result<u64, SourceError> {
        Ok(revision_ids
            .iter()
            .filter(|id| self.reviewed.contains(id))
            .count() as u64)
    }

    fn reviewer_record(&self, account: &AccountRef) -> Result<Option<String>, SourceError> {
        Ok(self.account(account)?.record.clone())
    }
}

impl CandidateSource for FakeWiki {
    fn recent_changes(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<RecentChange>, SourceError> {
        if self.recent_changes_down {
            return Err(SourceError::RequestFailed {
                reason: "recent changes unavailable".into(),
            });
        }
        assert!(start < end);
        Ok(self.changes.clone())
    }
}
