//! Nullable governance client — record transactions without submitting them.

use std::collections::HashMap;
use std::sync::Mutex;

use omega_client::{ClientError, GovernanceClient};
use omega_types::{Address, HolderBalance, Proposal, ProposalId, ProposalState, VoteType};

#[derive(Default)]
struct State {
    /// Proposals returned by `list_proposals`.
    proposals: Vec<Proposal>,
    /// Scripted live states per proposal, consumed one per read.
    /// The last entry repeats once the script is exhausted.
    state_scripts: HashMap<String, Vec<ProposalState>>,
    /// Delegations per holder; absent means the zero address.
    delegations: HashMap<String, Address>,
    /// Prior-vote flags per (proposal, voter).
    voted: HashMap<(String, String), bool>,
    /// Membership NFT balances per holder.
    memberships: HashMap<String, u64>,
    /// Claimer list for the roster.
    claimers: Vec<Address>,
    /// Holder balances for the roster.
    holder_balances: Vec<HolderBalance>,

    /// Injected failures, consumed on the next matching call.
    fail_reads: Option<String>,
    fail_delegate: Option<String>,
    fail_vote: Option<String>,
    fail_execute: Option<String>,

    /// All transactions "submitted".
    delegate_calls: Vec<Address>,
    vote_calls: Vec<(ProposalId, VoteType)>,
    execute_calls: Vec<ProposalId>,
    /// All live-state reads, in order.
    state_reads: Vec<ProposalId>,
    /// Every call in invocation order, for ordering assertions.
    /// Entries look like `delegate`, `vote:12`, `execute:12`, `state:12`.
    actions: Vec<String>,
}

/// A test client that records transactions instead of submitting them.
pub struct NullGovernanceClient {
    state: Mutex<State>,
}

impl NullGovernanceClient {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
        }
    }

    // ── Scripting ───────────────────────────────────────────────────────

    /// Set the proposals served by `list_proposals`.
    pub fn set_proposals(&self, proposals: Vec<Proposal>) {
        self.state.lock().unwrap().proposals = proposals;
    }

    /// Script the live states a proposal reads as, one per
    /// `get_proposal_state` call. The last state repeats once the script
    /// runs out, so `[Active, Defeated]` reads Active at vote time and
    /// Defeated from the execution sweep onward.
    pub fn script_states(&self, proposal: &ProposalId, states: Vec<ProposalState>) {
        assert!(!states.is_empty(), "state script must not be empty");
        self.state
            .lock()
            .unwrap()
            .state_scripts
            .insert(proposal.as_str().to_string(), states);
    }

    /// Set the current delegatee for a holder.
    pub fn set_delegation(&self, holder: &Address, delegatee: Address) {
        self.state
            .lock()
            .unwrap()
            .delegations
            .insert(holder.as_str().to_string(), delegatee);
    }

    /// Mark whether a voter has already voted on a proposal.
    pub fn set_voted(&self, proposal: &ProposalId, voter: &Address, voted: bool) {
        self.state
            .lock()
            .unwrap()
            .voted
            .insert((proposal.as_str().to_string(), voter.as_str().to_string()), voted);
    }

    /// Set a holder's membership NFT balance.
    pub fn set_membership(&self, holder: &Address, balance: u64) {
        self.state
            .lock()
            .unwrap()
            .memberships
            .insert(holder.as_str().to_string(), balance);
    }

    /// Set the roster source collections.
    pub fn set_roster(&self, claimers: Vec<Address>, balances: Vec<HolderBalance>) {
        let mut state = self.state.lock().unwrap();
        state.claimers = claimers;
        state.holder_balances = balances;
    }

    // ── Failure injection ───────────────────────────────────────────────

    /// Make every read call fail with an HTTP error.
    pub fn fail_reads(&self, message: &str) {
        self.state.lock().unwrap().fail_reads = Some(message.to_string());
    }

    /// Make the next delegation transaction be rejected.
    pub fn fail_delegate(&self, message: &str) {
        self.state.lock().unwrap().fail_delegate = Some(message.to_string());
    }

    /// Make every vote transaction be rejected.
    pub fn fail_vote(&self, message: &str) {
        self.state.lock().unwrap().fail_vote = Some(message.to_string());
    }

    /// Make every execution transaction be rejected.
    pub fn fail_execute(&self, message: &str) {
        self.state.lock().unwrap().fail_execute = Some(message.to_string());
    }

    // ── Assertions ──────────────────────────────────────────────────────

    /// All delegation transactions recorded so far.
    pub fn delegate_calls(&self) -> Vec<Address> {
        self.state.lock().unwrap().delegate_calls.clone()
    }

    /// All vote transactions recorded so far.
    pub fn vote_calls(&self) -> Vec<(ProposalId, VoteType)> {
        self.state.lock().unwrap().vote_calls.clone()
    }

    /// All execution transactions recorded so far.
    pub fn execute_calls(&self) -> Vec<ProposalId> {
        self.state.lock().unwrap().execute_calls.clone()
    }

    /// All live-state reads, in call order.
    pub fn state_reads(&self) -> Vec<ProposalId> {
        self.state.lock().unwrap().state_reads.clone()
    }

    /// Every call in invocation order (`delegate`, `vote:<id>`,
    /// `execute:<id>`, `state:<id>`).
    pub fn actions(&self) -> Vec<String> {
        self.state.lock().unwrap().actions.clone()
    }

    /// Clear all recorded calls and scripted behavior.
    pub fn reset(&self) {
        *self.state.lock().unwrap() = State::default();
    }
}

impl Default for NullGovernanceClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GovernanceClient for NullGovernanceClient {
    async fn list_proposals(&self) -> Result<Vec<Proposal>, ClientError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = &state.fail_reads {
            return Err(ClientError::Http(msg.clone()));
        }
        Ok(state.proposals.clone())
    }

    async fn has_voted(
        &self,
        proposal: &ProposalId,
        voter: &Address,
    ) -> Result<bool, ClientError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = &state.fail_reads {
            return Err(ClientError::Http(msg.clone()));
        }
        Ok(*state
            .voted
            .get(&(proposal.as_str().to_string(), voter.as_str().to_string()))
            .unwrap_or(&false))
    }

    async fn get_proposal_state(
        &self,
        proposal: &ProposalId,
    ) -> Result<ProposalState, ClientError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = &state.fail_reads {
            return Err(ClientError::Http(msg.clone()));
        }
        state.state_reads.push(proposal.clone());
        let entry = format!("state:{proposal}");
        state.actions.push(entry);

        let script = state
            .state_scripts
            .get_mut(proposal.as_str())
            .ok_or_else(|| ClientError::Gateway(format!("unknown proposal {proposal}")))?;
        // Consume one scripted state, keeping the last one in place.
        if script.len() > 1 {
            Ok(script.remove(0))
        } else {
            Ok(script[0])
        }
    }

    async fn cast_vote(&self, proposal: &ProposalId, vote: VoteType) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = &state.fail_vote {
            return Err(ClientError::Rejected(msg.clone()));
        }
        state.vote_calls.push((proposal.clone(), vote));
        let entry = format!("vote:{proposal}");
        state.actions.push(entry);
        Ok(())
    }

    async fn execute_proposal(&self, proposal: &ProposalId) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = &state.fail_execute {
            return Err(ClientError::Rejected(msg.clone()));
        }
        state.execute_calls.push(proposal.clone());
        let entry = format!("execute:{proposal}");
        state.actions.push(entry);
        Ok(())
    }

    async fn get_delegation(&self, holder: &Address) -> Result<Address, ClientError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = &state.fail_reads {
            return Err(ClientError::Http(msg.clone()));
        }
        Ok(state
            .delegations
            .get(holder.as_str())
            .cloned()
            .unwrap_or_else(Address::zero))
    }

    async fn delegate(&self, to: &Address) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.fail_delegate.take() {
            return Err(ClientError::Rejected(msg));
        }
        // A successful delegation is visible to subsequent reads.
        state
            .delegations
            .insert(to.as_str().to_string(), to.clone());
        state.delegate_calls.push(to.clone());
        state.actions.push("delegate".to_string());
        Ok(())
    }

    async fn membership_balance(&self, holder: &Address) -> Result<u64, ClientError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = &state.fail_reads {
            return Err(ClientError::Http(msg.clone()));
        }
        Ok(*state.memberships.get(holder.as_str()).unwrap_or(&0))
    }

    async fn list_claimers(&self) -> Result<Vec<Address>, ClientError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = &state.fail_reads {
            return Err(ClientError::Http(msg.clone()));
        }
        Ok(state.claimers.clone())
    }

    async fn list_holder_balances(&self) -> Result<Vec<HolderBalance>, ClientError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = &state.fail_reads {
            return Err(ClientError::Http(msg.clone()));
        }
        Ok(state.holder_balances.clone())
    }
}
