//! Client-side governance voting workflow.
//!
//! The one piece of real protocol logic in the DAO client: driving a "submit
//! votes" action to completion against the external governance contracts.
//! Three strictly ordered phases — delegation pre-check, state-gated vote
//! sweep, execution sweep — with scatter-gather concurrency across proposals
//! inside each phase.
//!
//! The workflow is a pure service over an injected
//! [`GovernanceClient`](omega_client::GovernanceClient); it holds no state
//! beyond an in-flight flag and renders nothing.

pub mod ballot;
pub mod error;
pub mod orchestrator;
pub mod roster;
pub mod tally;

pub use ballot::build_ballot;
pub use error::VotingError;
pub use orchestrator::{ProposalOutcome, VoteOutcome, VoteReport, VotingOrchestrator};
pub use roster::{fetch_roster, join_members};
pub use tally::{participation_percent, TallyView};
