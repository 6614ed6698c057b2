//! # flagrev-scan
//!
//! The daily candidate scan: which accounts edited in the last day, which
//! of them qualify for reviewer or auto-reviewer rights, and the wikitext
//! section that lists them on the report page.
//!
//! Everything here is transport-free. [`Scanner`] drives a scan over a
//! [`CandidateSource`]; the remaining modules are pure helpers it uses.

pub mod recent_changes;
pub mod render;
pub mod reported;
pub mod scanner;
pub mod selection;

pub use recent_changes::{candidate_usernames, scan_window, ChangeKind, RecentChange, ScanWindow};
pub use render::{date_heading, edit_summary, render_section};
pub use reported::ReportedCandidates;
pub use scanner::{CandidateSource, ScanOutcome, Scanner};
pub use selection::select_tier;
