//! # flagrev-core
//!
//! Foundation crate for the reviewer-rights eligibility engine.
//! Defines the activity snapshot, predicate results, thresholds, errors,
//! and the data-access traits every other crate in the workspace builds on.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FlagrevConfig;
pub use errors::{FlagrevError, FlagrevResult, SourceError};
pub use models::{
    AccountInfo, AccountRef, ActivitySnapshot, Contribution, Criterion, EligibilityReport,
    LogEvent, LogEventKind, NamespaceId, PredicateResult, ReviewerStats, SnapshotParts, Tier,
};
