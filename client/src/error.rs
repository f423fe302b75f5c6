use thiserror::Error;

/// Errors surfaced by a [`GovernanceClient`](crate::GovernanceClient)
/// implementation.
///
/// The workflow layer distinguishes read failures from rejected transactions;
/// implementations must map a contract revert or rejection to
/// [`Rejected`](ClientError::Rejected) and transport-level failures to the
/// other variants.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("gateway error: {0}")]
    Gateway(String),

    #[error("invalid gateway response: {0}")]
    InvalidResponse(String),

    #[error("transaction rejected: {0}")]
    Rejected(String),
}
