//! The voting orchestrator — drives one "submit votes" action to completion.

use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::try_join_all;

use omega_client::GovernanceClient;
use omega_types::{Address, ProposalId, ProposalState, VoteChoice};

use crate::error::VotingError;

/// What happened to one proposal within one sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The transaction was submitted.
    Submitted,
    /// The proposal's live state did not admit the action; nothing was sent.
    Skipped(ProposalState),
}

/// Per-proposal outcome of a sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProposalOutcome {
    pub proposal: ProposalId,
    pub outcome: VoteOutcome,
}

/// Summary of a successful `submit_votes` run.
#[derive(Clone, Debug)]
pub struct VoteReport {
    /// Whether a delegate-to-self transaction was issued first.
    pub delegated: bool,
    /// Vote-sweep outcome per proposal.
    pub votes: Vec<ProposalOutcome>,
    /// Execution-sweep outcome per proposal.
    pub executions: Vec<ProposalOutcome>,
}

impl VoteReport {
    /// Number of vote transactions actually submitted.
    pub fn votes_submitted(&self) -> usize {
        self.votes
            .iter()
            .filter(|o| o.outcome == VoteOutcome::Submitted)
            .count()
    }

    /// Number of execution transactions actually submitted.
    pub fn executions_submitted(&self) -> usize {
        self.executions
            .iter()
            .filter(|o| o.outcome == VoteOutcome::Submitted)
            .count()
    }
}

/// Drives the voting workflow against an injected governance client.
///
/// The three phases are strictly ordered: delegation pre-check, then the vote
/// sweep, then the execution sweep — each must fully finish before the next
/// starts. Within a sweep the per-proposal operations are independent and run
/// scatter-gather. Proposal state is re-read immediately before every action;
/// the window between read and action is accepted eventual consistency, since
/// closing it would need contract-level guarantees this side cannot provide.
///
/// At most one run may be in flight per orchestrator; a second concurrent
/// invocation is rejected with [`VotingError::InFlight`].
pub struct VotingOrchestrator<C> {
    client: C,
    in_flight: AtomicBool,
}

impl<C: GovernanceClient> VotingOrchestrator<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            in_flight: AtomicBool::new(false),
        }
    }

    /// The injected governance client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Whether a `submit_votes` run is currently outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Submit `choices` on behalf of `voter`.
    ///
    /// Exactly one terminal result is reported: `Ok` only if every phase
    /// completed without an unrecovered failure, otherwise the first
    /// classified error. Sweeps are all-or-nothing — one failed transaction
    /// aborts the remaining work in that pass.
    ///
    /// Re-invoking after a success is safe only insofar as the contract
    /// rejects double-voting; no "already voted" state is tracked here beyond
    /// what is queried fresh each call.
    pub async fn submit_votes(
        &self,
        choices: &[VoteChoice],
        voter: &Address,
    ) -> Result<VoteReport, VotingError> {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;

        if choices.is_empty() {
            return Err(VotingError::EmptyBallot);
        }

        let delegated = self.ensure_delegated(voter).await?;

        // Vote sweep: all proposals at once, first failure aborts the pass.
        let votes = try_join_all(choices.iter().map(|choice| self.vote_one(choice))).await?;

        // Execution sweep: conditioned on the vote sweep completing, not on
        // individual vote outcomes.
        let executions =
            try_join_all(choices.iter().map(|choice| self.execute_one(&choice.proposal))).await?;

        let report = VoteReport {
            delegated,
            votes,
            executions,
        };
        tracing::info!(
            voter = %voter,
            votes = report.votes_submitted(),
            executions = report.executions_submitted(),
            "vote submission complete"
        );
        Ok(report)
    }

    /// Phase 1: make sure the voter's tokens are delegated before voting.
    ///
    /// Returns whether a delegate-to-self transaction was issued.
    async fn ensure_delegated(&self, voter: &Address) -> Result<bool, VotingError> {
        let delegation = self
            .client
            .get_delegation(voter)
            .await
            .map_err(VotingError::ClientUnavailable)?;

        if !delegation.is_zero() {
            return Ok(false);
        }

        tracing::info!(voter = %voter, "tokens undelegated, delegating to self before voting");
        self.client
            .delegate(voter)
            .await
            .map_err(VotingError::DelegationFailed)?;
        Ok(true)
    }

    /// Phase 2, per proposal: re-read live state, vote only if Active.
    async fn vote_one(&self, choice: &VoteChoice) -> Result<ProposalOutcome, VotingError> {
        let state = self
            .client
            .get_proposal_state(&choice.proposal)
            .await
            .map_err(VotingError::ClientUnavailable)?;

        if !state.is_open_for_voting() {
            // A proposal closing between fetch and submission is expected.
            tracing::debug!(proposal = %choice.proposal, %state, "not open for voting, skipping");
            return Ok(ProposalOutcome {
                proposal: choice.proposal.clone(),
                outcome: VoteOutcome::Skipped(state),
            });
        }

        self.client
            .cast_vote(&choice.proposal, choice.vote)
            .await
            .map_err(VotingError::VoteFailed)?;
        tracing::info!(proposal = %choice.proposal, vote = ?choice.vote, "vote submitted");
        Ok(ProposalOutcome {
            proposal: choice.proposal.clone(),
            outcome: VoteOutcome::Submitted,
        })
    }

    /// Phase 3, per proposal: re-read live state, execute only if ready.
    async fn execute_one(&self, proposal: &ProposalId) -> Result<ProposalOutcome, VotingError> {
        let state = self
            .client
            .get_proposal_state(proposal)
            .await
            .map_err(VotingError::ClientUnavailable)?;

        if !state.is_executable() {
            tracing::debug!(proposal = %proposal, %state, "not executable, skipping");
            return Ok(ProposalOutcome {
                proposal: proposal.clone(),
                outcome: VoteOutcome::Skipped(state),
            });
        }

        self.client
            .execute_proposal(proposal)
            .await
            .map_err(VotingError::ExecutionFailed)?;
        tracing::info!(proposal = %proposal, "proposal executed");
        Ok(ProposalOutcome {
            proposal: proposal.clone(),
            outcome: VoteOutcome::Submitted,
        })
    }
}

/// RAII guard for the in-flight flag; released on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, VotingError> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| VotingError::InFlight)?;
        Ok(Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
