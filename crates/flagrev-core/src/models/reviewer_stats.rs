//! Reviewer-program statistics for one account.
//!
//! The raw record is a newline-separated list of `key=value` lines. An account
//! without a record has empty statistics; a record that exists but has a line
//! without `=` (blank lines and blank records included), or a non-count value
//! under a count key, is rejected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::stat_keys;
use crate::errors::{FlagrevError, FlagrevResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct ReviewerStats {
    values: BTreeMap<String, String>,
}

impl ReviewerStats {
    /// Parse a raw parameter blob.
    ///
    /// The key is everything before the last `=` on a line. A single final
    /// line break is tolerated; any other empty line is malformed.
    pub fn parse(raw: &str) -> FlagrevResult<Self> {
        let body = raw
            .strip_suffix("\r\n")
            .or_else(|| raw.strip_suffix('\n'))
            .unwrap_or(raw);

        let mut values = BTreeMap::new();
        for line in body.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let (key, value) = line
                .rsplit_once('=')
                .ok_or_else(|| FlagrevError::MalformedStatistics {
                    line: line.to_string(),
                })?;
            values.insert(key.to_string(), value.to_string());
        }
        Self::from_map(values)
    }

    /// Build from already-split pairs, validating count keys.
    pub fn from_map(values: BTreeMap<String, String>) -> FlagrevResult<Self> {
        for key in stat_keys::NUMERIC {
            if let Some(value) = values.get(key) {
                if value.trim().parse::<u64>().is_err() {
                    return Err(FlagrevError::InvalidStatistic {
                        key: key.to_string(),
                        value: value.clone(),
                    });
                }
            }
        }
        Ok(Self { values })
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Numeric value of `key`, or `None` if absent or not a count.
    pub fn count(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }

    /// Content edits recorded by the reviewer program; absent means zero.
    pub fn total_content_edits(&self) -> u64 {
        self.count(stat_keys::TOTAL_CONTENT_EDITS).unwrap_or(0)
    }

    /// Edits with a hand-written summary; absent means zero.
    pub fn custom_summary_edits(&self) -> u64 {
        self.count(stat_keys::EDIT_COMMENTS).unwrap_or(0)
    }

    /// Reverted edits. `None` means the program recorded nothing.
    pub fn reverted_edits(&self) -> Option<u64> {
        self.count(stat_keys::REVERTED_EDITS)
    }

    /// Number of distinct content pages in the comma-separated page list.
    pub fn distinct_content_pages(&self) -> usize {
        match self.get(stat_keys::UNIQUE_CONTENT_PAGES) {
            None | Some("") => 0,
            Some(list) => list.split(',').count(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl TryFrom<BTreeMap<String, String>> for ReviewerStats {
    type Error = FlagrevError;

    fn try_from(values: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        Self::from_map(values)
    }
}

impl From<ReviewerStats> for BTreeMap<String, String> {
    fn from(stats: ReviewerStats) -> Self {
        stats.values
    }
}
