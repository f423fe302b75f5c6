//! Governance proposals and their lifecycle.

use crate::vote::VoteOption;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque proposal identifier assigned by the governance contract.
///
/// Transported as decimal big-integer text; never interpreted locally.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProposalId(String);

impl ProposalId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProposalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a governance proposal, as maintained by the
/// governance contract.
///
/// Wire representation is the contract's u8 state code. Only two states are
/// actionable from the client side: [`Active`](Self::Active) proposals accept
/// votes and [`Succeeded`](Self::Succeeded) proposals accept execution.
/// Everything else is "not actionable" and skipped, never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProposalState {
    /// Created, voting has not opened yet.
    Pending,
    /// Open for voting.
    Active,
    /// Withdrawn by the proposer.
    Canceled,
    /// Voting closed without reaching quorum / majority.
    Defeated,
    /// Voting passed; ready to be executed.
    Succeeded,
    /// Queued in a timelock awaiting execution.
    Queued,
    /// Queued but the execution window elapsed.
    Expired,
    /// Executed on chain; terminal.
    Executed,
}

impl ProposalState {
    /// Decode the contract's numeric state code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Pending),
            1 => Some(Self::Active),
            2 => Some(Self::Canceled),
            3 => Some(Self::Defeated),
            4 => Some(Self::Succeeded),
            5 => Some(Self::Queued),
            6 => Some(Self::Expired),
            7 => Some(Self::Executed),
            _ => None,
        }
    }

    /// The contract's numeric state code.
    pub fn code(&self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Active => 1,
            Self::Canceled => 2,
            Self::Defeated => 3,
            Self::Succeeded => 4,
            Self::Queued => 5,
            Self::Expired => 6,
            Self::Executed => 7,
        }
    }

    /// Whether votes may be cast in this state.
    pub fn is_open_for_voting(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Whether the proposal is ready to be executed.
    pub fn is_executable(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

impl fmt::Display for ProposalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Vote counts per option for one proposal.
///
/// Point-in-time display data; the orchestrator never acts on tallies, only
/// on a freshly fetched [`ProposalState`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub against: u64,
    pub in_favor: u64,
    pub abstain: u64,
}

impl VoteTally {
    /// Total votes cast across all options.
    pub fn total(&self) -> u64 {
        self.against + self.in_favor + self.abstain
    }
}

/// A read-only snapshot of a governance proposal.
///
/// Fetched per orchestration run and never mutated locally; submitting a vote
/// changes state only on the remote ledger. Because state can move between
/// fetch and action, any state-gated action must re-read the live state first.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Proposal {
    /// Contract-assigned identifier.
    pub id: ProposalId,
    /// Human-readable description.
    pub description: String,
    /// State at snapshot time.
    pub state: ProposalState,
    /// Selectable vote options.
    pub options: Vec<VoteOption>,
    /// Vote counts at snapshot time.
    pub tally: VoteTally,
}
