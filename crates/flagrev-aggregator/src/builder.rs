use chrono::{DateTime, Utc};
use flagrev_core::config::AggregationConfig;
use flagrev_core::errors::FlagrevResult;
use flagrev_core::models::{AccountInfo, AccountRef, ActivitySnapshot, SnapshotParts};
use flagrev_core::traits::{ActivitySource, ContributionQuery};
use flagrev_observability::events;

use crate::{flagged, registration, stats};

/// Builds one [`ActivitySnapshot`] per account and evaluation window.
///
/// Holds no state between builds; each call fetches afresh from the source.
pub struct SnapshotBuilder<'a, S: ActivitySource + ?Sized> {
    source: &'a S,
    config: AggregationConfig,
}

impl<'a, S: ActivitySource + ?Sized> SnapshotBuilder<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self::with_config(source, AggregationConfig::default())
    }

    pub fn with_config(source: &'a S, config: AggregationConfig) -> Self {
        Self { source, config }
    }

    /// Collect everything known about `account` at or before `cutoff`.
    ///
    /// `exact_flagged_count` forces a full reviewed-edit scan; use it whenever
    /// the number itself will be shown, not just the pass/fail outcome.
    pub fn build(
        &self,
        account: &AccountRef,
        cutoff: DateTime<Utc>,
        exact_flagged_count: bool,
    ) -> FlagrevResult<ActivitySnapshot> {
        let info = self.source.account_info(account)?;
        self.build_for(info, cutoff, exact_flagged_count)
    }

    /// Like [`build`](Self::build), for an account record the caller has
    /// already fetched.
    pub fn build_for(
        &self,
        info: AccountInfo,
        cutoff: DateTime<Utc>,
        exact_flagged_count: bool,
    ) -> FlagrevResult<ActivitySnapshot> {
        let account = info.account_ref();

        let contributions = self.source.contributions(
            &account,
            &ContributionQuery::newest(self.config.contribution_limit).starting_at(cutoff),
        )?;

        let flagged = flagged::count(
            self.source,
            &info,
            cutoff,
            &self.config,
            exact_flagged_count,
        )?;

        let log_events = self.source.log_events(&account)?;
        let (registered, _) = registration::resolve(self.source, &info)?;
        let reviewer_stats = stats::fetch(self.source, &account)?;

        let snapshot = ActivitySnapshot::from_parts(SnapshotParts {
            account: info,
            cutoff,
            contributions,
            flagged_edit_count: flagged.count,
            flagged_count_exact: flagged.exact,
            log_events,
            registration: registered,
            reviewer_stats,
        });

        events::snapshot_built(
            &account.name,
            snapshot.contributions().len(),
            snapshot.flagged_edit_count(),
            snapshot.flagged_count_exact(),
        );
        tracing::debug!(
            account = %account,
            articles = snapshot.article_contributions().len(),
            log_events = snapshot.log_events().len(),
            stats = !snapshot.reviewer_stats().is_empty(),
            "snapshot contents"
        );

        Ok(snapshot)
    }
}
