use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference to a wiki account by user name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountRef {
    pub name: String,
}

impl AccountRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for AccountRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Account record as reported by the wiki.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub name: String,
    /// Total edit count across all namespaces.
    pub edit_count: u64,
    /// Recorded registration time. Missing for very old accounts.
    #[serde(default)]
    pub registration: Option<DateTime<Utc>>,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub rights: Vec<String>,
    #[serde(default)]
    pub last_edit: Option<DateTime<Utc>>,
}

impl AccountInfo {
    /// Minimal record: a named account with no flags, groups or history.
    pub fn new(name: impl Into<String>, edit_count: u64) -> Self {
        Self {
            name: name.into(),
            edit_count,
            registration: None,
            blocked: false,
            bot: false,
            groups: Vec::new(),
            rights: Vec::new(),
            last_edit: None,
        }
    }

    pub fn account_ref(&self) -> AccountRef {
        AccountRef::new(self.name.clone())
    }

    pub fn has_right(&self, right: &str) -> bool {
        self.rights.iter().any(|r| r == right)
    }
}
