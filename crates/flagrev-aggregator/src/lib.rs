//! # flagrev-aggregator
//!
//! Collects the raw facts about one account from an
//! [`ActivitySource`](flagrev_core::traits::ActivitySource) into an
//! immutable [`ActivitySnapshot`](flagrev_core::ActivitySnapshot).
//!
//! ## Steps
//! 1. **Account record**: edit count, flags, groups, last edit
//! 2. **Contributions**: newest first, up to the cutoff
//! 3. **Reviewed edits**: approximate (saturating) or exact scan
//! 4. **Log events**: rights changes and blocks on the user page
//! 5. **Registration**: record, creation log, or oldest edit
//! 6. **Reviewer-program statistics**: parsed `key=value` record

pub mod builder;
pub mod flagged;
pub mod registration;
pub mod stats;

pub use builder::SnapshotBuilder;
pub use flagged::FlaggedCount;
