pub mod account;
pub mod contribution;
pub mod log_event;
pub mod predicate_result;
pub mod report;
pub mod reviewer_stats;
pub mod snapshot;

pub use account::{AccountInfo, AccountRef};
pub use contribution::{Contribution, NamespaceId};
pub use log_event::{LogEvent, LogEventKind};
pub use predicate_result::{Criterion, PredicateResult};
pub use report::{EligibilityReport, Tier};
pub use reviewer_stats::ReviewerStats;
pub use snapshot::{ActivitySnapshot, SnapshotParts};
