//! Governance client capability.
//!
//! [`GovernanceClient`] is the abstract interface the voting workflow is
//! written against: proposal reads, vote and execution transactions, token
//! delegation, and the membership/roster reads for the member page. All
//! consensus, token accounting, and voting logic live in external smart
//! contracts behind this boundary.
//!
//! [`GatewayClient`] is the production implementation, speaking JSON-RPC to
//! an off-repository governance gateway that wraps the contracts.

pub mod error;
pub mod gateway;

pub use error::ClientError;
pub use gateway::GatewayClient;

use omega_types::{Address, HolderBalance, Proposal, ProposalId, ProposalState, VoteType};
use std::future::Future;

/// Abstract capability over the external governance contracts.
///
/// Implementations submit signed transactions for the mutating operations;
/// their timeout and retry behavior is their own contract, the workflow layer
/// adds none.
pub trait GovernanceClient {
    /// Snapshot read of all proposals.
    fn list_proposals(&self) -> impl Future<Output = Result<Vec<Proposal>, ClientError>>;

    /// Whether `voter` has already cast a vote on `proposal`.
    fn has_voted(
        &self,
        proposal: &ProposalId,
        voter: &Address,
    ) -> impl Future<Output = Result<bool, ClientError>>;

    /// Fresh (never cached) read of a proposal's live state.
    fn get_proposal_state(
        &self,
        proposal: &ProposalId,
    ) -> impl Future<Output = Result<ProposalState, ClientError>>;

    /// Submit a vote transaction.
    fn cast_vote(
        &self,
        proposal: &ProposalId,
        vote: VoteType,
    ) -> impl Future<Output = Result<(), ClientError>>;

    /// Submit an execution transaction.
    fn execute_proposal(
        &self,
        proposal: &ProposalId,
    ) -> impl Future<Output = Result<(), ClientError>>;

    /// Current delegatee of `holder`'s governance tokens.
    /// The zero address means undelegated.
    fn get_delegation(
        &self,
        holder: &Address,
    ) -> impl Future<Output = Result<Address, ClientError>>;

    /// Submit a delegation transaction for the caller's tokens.
    fn delegate(&self, to: &Address) -> impl Future<Output = Result<(), ClientError>>;

    /// Membership NFT balance of `holder`; non-zero means DAO member.
    fn membership_balance(
        &self,
        holder: &Address,
    ) -> impl Future<Output = Result<u64, ClientError>>;

    /// All addresses that have claimed the membership NFT.
    fn list_claimers(&self) -> impl Future<Output = Result<Vec<Address>, ClientError>>;

    /// All governance token holders with their balances.
    fn list_holder_balances(
        &self,
    ) -> impl Future<Output = Result<Vec<HolderBalance>, ClientError>>;
}
