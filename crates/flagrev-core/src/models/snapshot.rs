//! Immutable per-account activity snapshot.
//!
//! Built once per evaluation window and shared by reference between tier
//! compositions. `from_parts` is the only constructor and normalizes the
//! raw parts:
//! - contributions and log events after the cutoff are dropped,
//! - contributions are ordered newest first,
//! - log events are ordered oldest first,
//! - the article sequence is the main-namespace subsequence of all contributions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccountInfo, Contribution, LogEvent, ReviewerStats};

/// Raw inputs for an [`ActivitySnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotParts {
    pub account: AccountInfo,
    pub cutoff: DateTime<Utc>,
    #[serde(default)]
    pub contributions: Vec<Contribution>,
    #[serde(default)]
    pub flagged_edit_count: u64,
    /// Whether `flagged_edit_count` came from a full scan.
    #[serde(default)]
    pub flagged_count_exact: bool,
    #[serde(default)]
    pub log_events: Vec<LogEvent>,
    pub registration: DateTime<Utc>,
    #[serde(default)]
    pub reviewer_stats: ReviewerStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SnapshotParts", into = "SnapshotParts")]
pub struct ActivitySnapshot {
    parts: SnapshotParts,
    article_contributions: Vec<Contribution>,
}

impl ActivitySnapshot {
    pub fn from_parts(mut parts: SnapshotParts) -> Self {
        let cutoff = parts.cutoff;

        parts.contributions.retain(|c| c.timestamp <= cutoff);
        parts
            .contributions
            .sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        parts.log_events.retain(|e| e.timestamp <= cutoff);
        parts.log_events.sort_by_key(|e| e.timestamp);

        let article_contributions = parts
            .contributions
            .iter()
            .filter(|c| c.namespace.is_article())
            .cloned()
            .collect();

        Self {
            parts,
            article_contributions,
        }
    }

    pub fn account(&self) -> &AccountInfo {
        &self.parts.account
    }

    pub fn edit_count(&self) -> u64 {
        self.parts.account.edit_count
    }

    pub fn cutoff(&self) -> DateTime<Utc> {
        self.parts.cutoff
    }

    /// All-namespace contributions, newest first.
    pub fn contributions(&self) -> &[Contribution] {
        &self.parts.contributions
    }

    /// Main-namespace contributions, newest first.
    pub fn article_contributions(&self) -> &[Contribution] {
        &self.article_contributions
    }

    pub fn flagged_edit_count(&self) -> u64 {
        self.parts.flagged_edit_count
    }

    pub fn flagged_count_exact(&self) -> bool {
        self.parts.flagged_count_exact
    }

    /// Log events, oldest first.
    pub fn log_events(&self) -> &[LogEvent] {
        &self.parts.log_events
    }

    pub fn registration(&self) -> DateTime<Utc> {
        self.parts.registration
    }

    pub fn reviewer_stats(&self) -> &ReviewerStats {
        &self.parts.reviewer_stats
    }
}

impl From<SnapshotParts> for ActivitySnapshot {
    fn from(parts: SnapshotParts) -> Self {
        Self::from_parts(parts)
    }
}

impl From<ActivitySnapshot> for SnapshotParts {
    fn from(snapshot: ActivitySnapshot) -> Self {
        snapshot.parts
    }
}
