// Single source of truth for all default values.

// --- Reviewer tier ---
pub const DEFAULT_REVIEWER_MIN_AGE_DAYS: u32 = 60;
pub const DEFAULT_REVIEWER_MIN_EDIT_COUNT: u64 = 300;
pub const DEFAULT_REVIEWER_MIN_CONTENT_EDITS: u64 = 300;
pub const DEFAULT_REVIEWER_MIN_REVIEWED_EDITS: u64 = 200;
pub const DEFAULT_REVIEWER_MIN_SPACED_EDITS: u32 = 15;
pub const DEFAULT_REVIEWER_MIN_DISTINCT_PAGES: u32 = 14;
pub const DEFAULT_REVIEWER_MIN_RECENT_EDITS: u32 = 5;
pub const DEFAULT_REVIEWER_RECENT_WINDOW_DAYS: u32 = 30;
pub const DEFAULT_REVIEWER_MIN_CUSTOM_SUMMARIES: u64 = 30;
pub const DEFAULT_REVIEWER_MAX_REVERT_RATIO: f64 = 0.03;

// --- Auto-reviewer tier ---
pub const DEFAULT_AUTO_REVIEWER_MIN_AGE_DAYS: u32 = 30;
pub const DEFAULT_AUTO_REVIEWER_MIN_CONTENT_EDITS: u64 = 150;
pub const DEFAULT_AUTO_REVIEWER_MIN_REVIEWED_EDITS: u64 = 50;
pub const DEFAULT_AUTO_REVIEWER_MIN_SPACED_EDITS: u32 = 7;
pub const DEFAULT_AUTO_REVIEWER_MIN_DISTINCT_PAGES: u32 = 8;
pub const DEFAULT_AUTO_REVIEWER_MIN_CUSTOM_SUMMARIES: u64 = 20;

// --- Aggregation ---
pub const DEFAULT_CONTRIBUTION_LIMIT: usize = 5_000;
pub const DEFAULT_FLAGGED_BATCH_SIZE: usize = 500;
pub const DEFAULT_FLAGGED_SATURATION: u64 = 200;
pub const DEFAULT_UNREVIEWED_GRACE_DAYS: u32 = 2;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
