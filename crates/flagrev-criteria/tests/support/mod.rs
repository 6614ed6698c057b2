//! Snapshot construction helpers shared by criteria tests.
#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use flagrev_core::models::*;

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    now() - Duration::days(days)
}

pub fn edit_at(ns: i32, timestamp: DateTime<Utc>, rev: u64) -> Contribution {
    Contribution {
        page: format!("Page {rev}"),
        namespace: NamespaceId(ns),
        timestamp,
        summary: String::new(),
        revision_id: rev,
    }
}

/// Article edits at the given day offsets before `now()`.
pub fn article_edits(day_offsets: &[i64]) -> Vec<Contribution> {
    day_offsets
        .iter()
        .enumerate()
        .map(|(i, d)| edit_at(0, days_ago(*d), i as u64 + 1))
        .collect()
}

pub struct SnapshotFixture {
    pub parts: SnapshotParts,
}

impl SnapshotFixture {
    pub fn new() -> Self {
        Self {
            parts: SnapshotParts {
                account: AccountInfo::new("Example", 0),
                cutoff: now(),
                contributions: Vec::new(),
                flagged_edit_count: 0,
                flagged_count_exact: true,
                log_events: Vec::new(),
                registration: days_ago(365),
                reviewer_stats: ReviewerStats::default(),
            },
        }
    }

    /// An account that meets every reviewer-tier threshold.
    pub fn eligible_reviewer() -> Self {
        // One article edit every four days for 80 days (20 spaced edits),
        // plus a burst of six edits this week.
        let mut offsets: Vec<i64> = vec![0, 1, 2, 3, 4, 5];
        offsets.extend((2..=20).map(|i| i * 4));
        Self::new()
            .edit_count(1_000)
            .registered_days_ago(400)
            .contributions(article_edits(&offsets))
            .stats(
                "totalContentEdits=800\nuniqueContentPages=1,2,3,4,5,6,7,8,9,10,11,12,13,14,15\n\
                 editComments=120\nrevertedEdits=10",
            )
    }

    pub fn edit_count(mut self, n: u64) -> Self {
        self.parts.account.edit_count = n;
        self
    }

    pub fn registered_days_ago(mut self, days: i64) -> Self {
        self.parts.registration = days_ago(days);
        self
    }

    pub fn contributions(mut self, contributions: Vec<Contribution>) -> Self {
        self.parts.contributions = contributions;
        self
    }

    pub fn flagged(mut self, count: u64, exact: bool) -> Self {
        self.parts.flagged_edit_count = count;
        self.parts.flagged_count_exact = exact;
        self
    }

    pub fn stats(mut self, raw: &str) -> Self {
        self.parts.reviewer_stats = ReviewerStats::parse(raw).unwrap();
        self
    }

    pub fn blocked(mut self) -> Self {
        self.parts.account.blocked = true;
        self
    }

    pub fn bot(mut self) -> Self {
        self.parts.account.bot = true;
        self
    }

    pub fn log_event(mut self, event: LogEvent) -> Self {
        self.parts.log_events.push(event);
        self
    }

    pub fn build(self) -> ActivitySnapshot {
        ActivitySnapshot::from_parts(self.parts)
    }
}

pub fn block_event(days: i64) -> LogEvent {
    LogEvent {
        timestamp: days_ago(days),
        kind: LogEventKind::Block {
            action: "block".into(),
        },
    }
}

pub fn rights_event(days: i64, old: &[&str], new: &[&str]) -> LogEvent {
    LogEvent {
        timestamp: days_ago(days),
        kind: LogEventKind::Rights {
            old_groups: Some(old.iter().map(|s| s.to_string()).collect()),
            new_groups: Some(new.iter().map(|s| s.to_string()).collect()),
        },
    }
}
