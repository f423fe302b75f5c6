use omega_client::ClientError;
use thiserror::Error;

/// Terminal outcomes of one `submit_votes` invocation.
///
/// None of these are retried automatically; retry is a user-initiated
/// re-invocation. A proposal in the wrong state for an action is a normal
/// skip, never an error.
#[derive(Debug, Error)]
pub enum VotingError {
    /// The delegation transaction was rejected or reverted.
    /// No votes were attempted.
    #[error("delegation transaction failed: {0}")]
    DelegationFailed(#[source] ClientError),

    /// A vote transaction in the sweep was rejected.
    #[error("vote transaction failed: {0}")]
    VoteFailed(#[source] ClientError),

    /// An execution transaction in the sweep was rejected.
    #[error("execution transaction failed: {0}")]
    ExecutionFailed(#[source] ClientError),

    /// A governance client read failed before anything was submitted
    /// (delegation lookup or a fresh proposal-state read).
    #[error("governance client unavailable: {0}")]
    ClientUnavailable(#[source] ClientError),

    /// Another `submit_votes` run is still outstanding for this voter.
    #[error("a vote submission is already in flight")]
    InFlight,

    /// `submit_votes` was invoked with no choices.
    #[error("ballot contains no vote choices")]
    EmptyBallot,
}
