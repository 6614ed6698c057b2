//! Recent-changes window and the usernames a scan looks at.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a recent-changes entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Edit,
    New,
    Log,
    Categorize,
    #[serde(other)]
    Other,
}

impl ChangeKind {
    /// Page edits and page creations; log entries and the rest are ignored.
    pub fn is_content_change(self) -> bool {
        matches!(self, ChangeKind::Edit | ChangeKind::New)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentChange {
    pub user: String,
    pub kind: ChangeKind,
    /// Made by an unregistered (IP) editor.
    #[serde(default)]
    pub anonymous: bool,
    /// The username was suppressed.
    #[serde(default)]
    pub user_hidden: bool,
}

/// Distinct registered users with at least one edit or page creation.
pub fn candidate_usernames<'a, I>(changes: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a RecentChange>,
{
    changes
        .into_iter()
        .filter(|c| !c.user_hidden && !c.anonymous && c.kind.is_content_change())
        .map(|c| c.user.clone())
        .collect()
}

/// Half-open time range `[start, end)` a scan covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// The previous full UTC day: yesterday 00:00 up to today 00:00.
pub fn scan_window(now: DateTime<Utc>) -> ScanWindow {
    let today = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    ScanWindow {
        start: today - Duration::days(1),
        end: today,
    }
}
