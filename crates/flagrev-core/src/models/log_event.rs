use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{BLOCK_ACTION, CREATION_ACTIONS};

/// An entry from the account's log (rights changes, blocks, creation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: LogEventKind,
}

/// Log entry payload, keyed by log type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogEventKind {
    /// Group membership change. Either side may be missing in old entries.
    Rights {
        #[serde(default)]
        old_groups: Option<Vec<String>>,
        #[serde(default)]
        new_groups: Option<Vec<String>>,
    },
    Block { action: String },
    NewUsers { action: String },
    Other { log_type: String, action: String },
}

impl LogEvent {
    /// True for a `block/block` entry. Unblocks and reblocks do not count.
    pub fn is_block(&self) -> bool {
        matches!(&self.kind, LogEventKind::Block { action } if action == BLOCK_ACTION)
    }

    /// True when this rights change took `group` away.
    pub fn removes_group(&self, group: &str) -> bool {
        match &self.kind {
            LogEventKind::Rights {
                old_groups: Some(old),
                new_groups: Some(new),
            } => old.iter().any(|g| g == group) && !new.iter().any(|g| g == group),
            _ => false,
        }
    }

    /// True for one of the recognized account-creation entries.
    pub fn is_account_creation(&self) -> bool {
        matches!(&self.kind, LogEventKind::NewUsers { action } if CREATION_ACTIONS.contains(&action.as_str()))
    }
}
