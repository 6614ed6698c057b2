//! Registration time resolution.
//!
//! Fallback chain, first success wins:
//! 1. the account record's registration timestamp,
//! 2. the earliest account-creation log entry,
//! 3. the timestamp of the single oldest contribution.
//!
//! If all three come up empty the account cannot be evaluated.

use chrono::{DateTime, Utc};
use flagrev_core::errors::{FlagrevError, FlagrevResult};
use flagrev_core::models::AccountInfo;
use flagrev_core::traits::{ActivitySource, ContributionQuery};
use flagrev_observability::events::{self, RegistrationSource};

/// Resolve when `info`'s account was registered.
pub fn resolve<S: ActivitySource + ?Sized>(
    source: &S,
    info: &AccountInfo,
) -> FlagrevResult<(DateTime<Utc>, RegistrationSource)> {
    let resolved = resolve_inner(source, info)?;
    events::registration_resolved(&info.name, resolved.1);
    Ok(resolved)
}

fn resolve_inner<S: ActivitySource + ?Sized>(
    source: &S,
    info: &AccountInfo,
) -> FlagrevResult<(DateTime<Utc>, RegistrationSource)> {
    if let Some(registered) = info.registration {
        return Ok((registered, RegistrationSource::AccountRecord));
    }

    let account = info.account_ref();

    let created = source
        .creation_events(&account)?
        .into_iter()
        .filter(|e| e.is_account_creation())
        .map(|e| e.timestamp)
        .min();
    if let Some(created) = created {
        return Ok((created, RegistrationSource::CreationLog));
    }

    // Old accounts predate both the registration field and the creation log.
    let oldest = source.contributions(&account, &ContributionQuery::oldest())?;
    if let Some(first) = oldest.first() {
        return Ok((first.timestamp, RegistrationSource::OldestContribution));
    }

    Err(FlagrevError::RegistrationUnresolvable {
        account: info.name.clone(),
    })
}
