//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

use flagrev_core::models::{EligibilityReport, Tier};

/// How the registration time of an account was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationSource {
    AccountRecord,
    CreationLog,
    OldestContribution,
}

impl RegistrationSource {
    pub fn as_str(self) -> &'static str {
        match self {
            RegistrationSource::AccountRecord => "account_record",
            RegistrationSource::CreationLog => "creation_log",
            RegistrationSource::OldestContribution => "oldest_contribution",
        }
    }
}

/// Log which fallback step supplied the registration time.
pub fn registration_resolved(account: &str, source: RegistrationSource) {
    tracing::debug!(
        event = "registration_resolved",
        account = %account,
        source = source.as_str(),
        "registration time resolved"
    );
}

/// Log an approximate reviewed-edit scan that stopped at saturation.
pub fn flagged_scan_stopped(account: &str, counted: u64, unscanned: usize) {
    tracing::debug!(
        event = "flagged_scan_stopped",
        account = %account,
        counted = counted,
        unscanned = unscanned,
        "reviewed-edit scan saturated"
    );
}

/// Log a completed snapshot.
pub fn snapshot_built(account: &str, contributions: usize, flagged: u64, exact: bool) {
    tracing::info!(
        event = "snapshot_built",
        account = %account,
        contributions = contributions,
        flagged = flagged,
        exact = exact,
        "activity snapshot built"
    );
}

/// Log a tier evaluation outcome.
pub fn tier_evaluated(account: &str, report: &EligibilityReport) {
    tracing::info!(
        event = "tier_evaluated",
        account = %account,
        tier = %report.tier,
        eligible = report.is_eligible(),
        passed = report.passed_count(),
        total = report.len(),
        "tier evaluated"
    );
}

/// Log a candidate picked up by a scan.
pub fn candidate_selected(account: &str, tier: Tier) {
    tracing::info!(
        event = "candidate_selected",
        account = %account,
        tier = %tier,
        "candidate selected"
    );
}

/// Log scan progress.
pub fn scan_progress(checked: usize, total: usize) {
    tracing::info!(
        event = "scan_progress",
        checked = checked,
        total = total,
        "checked users"
    );
}

/// Log an account a scan had to leave out.
pub fn account_failed(account: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(
        event = "account_failed",
        account = %account,
        error = %error,
        "could not evaluate account"
    );
}

/// Log the totals of a finished scan.
pub fn scan_completed(checked: usize, reviewers: usize, auto_reviewers: usize, failed: usize) {
    tracing::info!(
        event = "scan_completed",
        checked = checked,
        reviewers = reviewers,
        auto_reviewers = auto_reviewers,
        failed = failed,
        "candidate scan completed"
    );
}
