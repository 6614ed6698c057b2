use serde::{Deserialize, Serialize};

use super::defaults;

/// Snapshot aggregation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Maximum contributions fetched per account.
    pub contribution_limit: usize,
    /// Revision ids checked per reviewed-state lookup.
    pub flagged_batch_size: usize,
    /// Approximate mode stops scanning once this many reviewed edits were seen.
    pub flagged_saturation: u64,
    /// Edits newer than `last_edit - unreviewed_grace_days` are not counted
    /// as reviewed-edit candidates (they may simply not be reviewed yet).
    pub unreviewed_grace_days: u32,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            contribution_limit: defaults::DEFAULT_CONTRIBUTION_LIMIT,
            flagged_batch_size: defaults::DEFAULT_FLAGGED_BATCH_SIZE,
            flagged_saturation: defaults::DEFAULT_FLAGGED_SATURATION,
            unreviewed_grace_days: defaults::DEFAULT_UNREVIEWED_GRACE_DAYS,
        }
    }
}
