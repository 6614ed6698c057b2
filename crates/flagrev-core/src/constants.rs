/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum gap between two edits for both to count as "spaced".
pub const SPACED_EDIT_GAP_DAYS: i64 = 3;

/// Wiki group held by reviewers.
pub const REVIEWER_GROUP: &str = "editor";

/// Wiki group held by auto-reviewers.
pub const AUTO_REVIEWER_GROUP: &str = "autoreview";

/// User right granted with the reviewer group.
pub const REVIEW_RIGHT: &str = "review";

/// User right granted with the auto-reviewer group.
pub const AUTO_REVIEW_RIGHT: &str = "autoreview";

/// Log action recorded when an account is blocked.
pub const BLOCK_ACTION: &str = "block";

/// `newusers` log actions that mark an account's creation.
pub const CREATION_ACTIONS: [&str; 4] = ["newusers", "create", "autocreate", "create2"];

/// Reviewer-program record keys.
pub mod stat_keys {
    pub const TOTAL_CONTENT_EDITS: &str = "totalContentEdits";
    pub const UNIQUE_CONTENT_PAGES: &str = "uniqueContentPages";
    pub const EDIT_COMMENTS: &str = "editComments";
    pub const REVERTED_EDITS: &str = "revertedEdits";

    /// Keys whose values must parse as unsigned integers.
    pub const NUMERIC: [&str; 3] = [TOTAL_CONTENT_EDITS, EDIT_COMMENTS, REVERTED_EDITS];
}
