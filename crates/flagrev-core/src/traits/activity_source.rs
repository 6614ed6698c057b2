use chrono::{DateTime, Utc};

use crate::errors::SourceError;
use crate::models::{AccountInfo, AccountRef, Contribution, LogEvent, NamespaceId};

/// Contribution listing parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionQuery {
    /// Restrict to these namespaces. `None` lists all namespaces.
    pub namespaces: Option<Vec<NamespaceId>>,
    /// Newest timestamp to include. `None` starts at the latest edit.
    pub start: Option<DateTime<Utc>>,
    pub limit: usize,
    /// List oldest edits first instead of newest first.
    pub oldest_first: bool,
}

impl ContributionQuery {
    pub fn newest(limit: usize) -> Self {
        Self {
            namespaces: None,
            start: None,
            limit,
            oldest_first: false,
        }
    }

    pub fn starting_at(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn in_namespaces(mut self, namespaces: &[NamespaceId]) -> Self {
        self.namespaces = Some(namespaces.to_vec());
        self
    }

    /// The single oldest edit of the account.
    pub fn oldest() -> Self {
        Self {
            namespaces: None,
            start: None,
            limit: 1,
            oldest_first: true,
        }
    }
}

/// Data-access collaborator the aggregator fetches raw facts from.
///
/// Implementations wrap the wiki API, logs and database; none ship with
/// this workspace. Calls are blocking.
pub trait ActivitySource {
    fn account_info(&self, account: &AccountRef) -> Result<AccountInfo, SourceError>;

    fn contributions(
        &self,
        account: &AccountRef,
        query: &ContributionQuery,
    ) -> Result<Vec<Contribution>, SourceError>;

    /// Log entries targeting the account's user page (rights changes, blocks).
    fn log_events(&self, account: &AccountRef) -> Result<Vec<LogEvent>, SourceError>;

    /// `newusers` log entries performed by the account.
    fn creation_events(&self, account: &AccountRef) -> Result<Vec<LogEvent>, SourceError>;

    /// How many of the given revisions currently carry a reviewed flag.
    fn reviewed_revision_count(&self, revision_ids: &[u64]) -> Result<u64, SourceError>;

    /// Raw reviewer-program record, or `None` if the account has none.
    fn reviewer_record(&self, account: &AccountRef) -> Result<Option<String>, SourceError>;
}
