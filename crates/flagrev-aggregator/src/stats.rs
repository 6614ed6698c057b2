use flagrev_core::errors::FlagrevResult;
use flagrev_core::models::{AccountRef, ReviewerStats};
use flagrev_core::traits::ActivitySource;

/// Fetch and parse the reviewer-program record.
///
/// No record at all yields empty statistics. A record that exists but does
/// not parse is an error.
pub fn fetch<S: ActivitySource + ?Sized>(
    source: &S,
    account: &AccountRef,
) -> FlagrevResult<ReviewerStats> {
    match source.reviewer_record(account)? {
        Some(raw) => ReviewerStats::parse(&raw),
        None => Ok(ReviewerStats::default()),
    }
}
