mod source_error;

pub use source_error::SourceError;

/// Result alias used across the workspace.
pub type FlagrevResult<T> = Result<T, FlagrevError>;

/// Top-level error for snapshot building and configuration.
///
/// Predicates never fail: every "missing data" case has a defined default.
/// Only structurally broken inputs surface here.
#[derive(Debug, thiserror::Error)]
pub enum FlagrevError {
    #[error("registration time of account {account} cannot be resolved")]
    RegistrationUnresolvable { account: String },

    #[error("malformed reviewer statistics line: {line:?}")]
    MalformedStatistics { line: String },

    #[error("reviewer statistic {key} is not a count: {value:?}")]
    InvalidStatistic { key: String, value: String },

    #[error("activity source error: {0}")]
    Source(#[from] SourceError),

    #[error("configuration error: {reason}")]
    Config { reason: String },
}
