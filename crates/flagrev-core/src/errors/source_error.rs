/// Failures reported by an [`ActivitySource`](crate::traits::ActivitySource) implementation.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("account not found: {name}")]
    AccountNotFound { name: String },

    #[error("request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("unexpected response shape: {details}")]
    UnexpectedShape { details: String },
}
