use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wiki namespace number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceId(pub i32);

impl NamespaceId {
    pub const MAIN: Self = Self(0);
    pub const FILE: Self = Self(6);
    pub const TEMPLATE: Self = Self(10);
    pub const CATEGORY: Self = Self(14);
    pub const MODULE: Self = Self(828);

    /// Namespaces whose revisions can carry a reviewed flag.
    pub const REVIEWABLE: [Self; 5] = [
        Self::MAIN,
        Self::FILE,
        Self::TEMPLATE,
        Self::CATEGORY,
        Self::MODULE,
    ];

    pub fn is_article(self) -> bool {
        self == Self::MAIN
    }

    pub fn is_reviewable(self) -> bool {
        Self::REVIEWABLE.contains(&self)
    }
}

/// A single edit made by the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub page: String,
    pub namespace: NamespaceId,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub summary: String,
    pub revision_id: u64,
}
