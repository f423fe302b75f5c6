//! Integration tests for the voting workflow, driven against the nullable
//! governance client.

use std::collections::HashMap;

use omega_governance::{build_ballot, VoteOutcome, VotingError, VotingOrchestrator};
use omega_nullables::NullGovernanceClient;
use omega_types::{
    Address, Proposal, ProposalId, ProposalState, VoteChoice, VoteTally, VoteType,
};

fn voter() -> Address {
    Address::parse("0x00000000000000000000000000000000000000aa").unwrap()
}

fn pid(raw: &str) -> ProposalId {
    ProposalId::new(raw)
}

fn proposal(id: &str, state: ProposalState) -> Proposal {
    Proposal {
        id: pid(id),
        description: format!("proposal {id}"),
        state,
        options: vec![],
        tally: VoteTally::default(),
    }
}

/// Client with the voter already delegated to themselves.
fn delegated_client() -> NullGovernanceClient {
    let client = NullGovernanceClient::new();
    client.set_delegation(&voter(), voter());
    client
}

#[tokio::test]
async fn undelegated_voter_is_delegated_exactly_once_before_any_vote() {
    let client = NullGovernanceClient::new();
    client.script_states(&pid("1"), vec![ProposalState::Active]);
    client.script_states(&pid("2"), vec![ProposalState::Active]);

    let orchestrator = VotingOrchestrator::new(client);
    let choices = vec![VoteChoice::abstain(pid("1")), VoteChoice::abstain(pid("2"))];
    let report = orchestrator.submit_votes(&choices, &voter()).await.unwrap();

    assert!(report.delegated);
    let client = orchestrator.client();
    assert_eq!(client.delegate_calls(), vec![voter()]);

    // The single delegation strictly precedes every vote submission.
    let actions = client.actions();
    let delegate_at = actions.iter().position(|a| a == "delegate").unwrap();
    let first_vote_at = actions.iter().position(|a| a.starts_with("vote:")).unwrap();
    assert!(delegate_at < first_vote_at);
    assert_eq!(actions.iter().filter(|a| *a == "delegate").count(), 1);
}

#[tokio::test]
async fn delegation_failure_aborts_with_no_votes_and_no_executions() {
    let client = NullGovernanceClient::new();
    client.script_states(&pid("1"), vec![ProposalState::Active]);
    client.fail_delegate("out of gas");

    let orchestrator = VotingOrchestrator::new(client);
    let choices = vec![VoteChoice::abstain(pid("1"))];
    let err = orchestrator
        .submit_votes(&choices, &voter())
        .await
        .unwrap_err();

    assert!(matches!(err, VotingError::DelegationFailed(_)));
    assert!(orchestrator.client().vote_calls().is_empty());
    assert!(orchestrator.client().execute_calls().is_empty());
}

#[tokio::test]
async fn already_delegated_voter_is_not_redelegated() {
    let client = delegated_client();
    client.script_states(&pid("1"), vec![ProposalState::Active]);

    let orchestrator = VotingOrchestrator::new(client);
    let report = orchestrator
        .submit_votes(&[VoteChoice::abstain(pid("1"))], &voter())
        .await
        .unwrap();

    assert!(!report.delegated);
    assert!(orchestrator.client().delegate_calls().is_empty());
}

#[tokio::test]
async fn inactive_proposals_are_skipped_without_error() {
    let client = delegated_client();
    client.script_states(&pid("1"), vec![ProposalState::Pending]);
    client.script_states(&pid("2"), vec![ProposalState::Defeated]);

    let orchestrator = VotingOrchestrator::new(client);
    let choices = vec![VoteChoice::abstain(pid("1")), VoteChoice::abstain(pid("2"))];
    let report = orchestrator.submit_votes(&choices, &voter()).await.unwrap();

    assert_eq!(report.votes_submitted(), 0);
    assert_eq!(
        report.votes[0].outcome,
        VoteOutcome::Skipped(ProposalState::Pending)
    );
    assert!(orchestrator.client().vote_calls().is_empty());
}

#[tokio::test]
async fn executable_proposals_are_executed_regardless_of_vote_outcome() {
    let client = delegated_client();
    // Vote skipped (already Defeated at vote time), yet executable at sweep
    // time — still executed exactly once.
    client.script_states(
        &pid("1"),
        vec![ProposalState::Defeated, ProposalState::Succeeded],
    );
    // Voted and then ready.
    client.script_states(
        &pid("2"),
        vec![ProposalState::Active, ProposalState::Succeeded],
    );

    let orchestrator = VotingOrchestrator::new(client);
    let choices = vec![VoteChoice::abstain(pid("1")), VoteChoice::abstain(pid("2"))];
    let report = orchestrator.submit_votes(&choices, &voter()).await.unwrap();

    assert_eq!(report.votes_submitted(), 1);
    assert_eq!(report.executions_submitted(), 2);

    let mut executed = orchestrator.client().execute_calls();
    executed.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    assert_eq!(executed, vec![pid("1"), pid("2")]);
}

#[tokio::test]
async fn default_ballot_casts_abstain() {
    let client = delegated_client();
    client.script_states(&pid("1"), vec![ProposalState::Active]);

    let proposals = vec![proposal("1", ProposalState::Active)];
    let choices = build_ballot(&proposals, &HashMap::new());

    let orchestrator = VotingOrchestrator::new(client);
    orchestrator.submit_votes(&choices, &voter()).await.unwrap();

    let votes = orchestrator.client().vote_calls();
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].1, VoteType::Abstain);
    assert_eq!(votes[0].1.code(), 2);
}

#[tokio::test]
async fn two_active_then_executable_proposals_fully_succeed() {
    let client = delegated_client();
    for id in ["1", "2"] {
        client.script_states(
            &pid(id),
            vec![ProposalState::Active, ProposalState::Succeeded],
        );
    }

    let orchestrator = VotingOrchestrator::new(client);
    let choices = vec![
        VoteChoice::new(pid("1"), VoteType::For),
        VoteChoice::new(pid("2"), VoteType::Against),
    ];
    let report = orchestrator.submit_votes(&choices, &voter()).await.unwrap();

    assert_eq!(report.votes_submitted(), 2);
    assert_eq!(report.executions_submitted(), 2);
    assert_eq!(orchestrator.client().vote_calls().len(), 2);
    assert_eq!(orchestrator.client().execute_calls().len(), 2);
}

#[tokio::test]
async fn proposal_defeated_between_vote_and_sweep_is_not_executed() {
    let client = delegated_client();
    client.script_states(
        &pid("1"),
        vec![ProposalState::Active, ProposalState::Defeated],
    );

    let orchestrator = VotingOrchestrator::new(client);
    let report = orchestrator
        .submit_votes(&[VoteChoice::abstain(pid("1"))], &voter())
        .await
        .unwrap();

    assert_eq!(orchestrator.client().vote_calls().len(), 1);
    assert!(orchestrator.client().execute_calls().is_empty());
    assert_eq!(
        report.executions[0].outcome,
        VoteOutcome::Skipped(ProposalState::Defeated)
    );
}

#[tokio::test]
async fn rejected_vote_fails_the_run_before_the_execution_sweep() {
    let client = delegated_client();
    client.script_states(&pid("1"), vec![ProposalState::Active]);
    client.fail_vote("Governor: vote already cast");

    let orchestrator = VotingOrchestrator::new(client);
    let err = orchestrator
        .submit_votes(&[VoteChoice::abstain(pid("1"))], &voter())
        .await
        .unwrap_err();

    assert!(matches!(err, VotingError::VoteFailed(_)));
    assert!(orchestrator.client().execute_calls().is_empty());
}

#[tokio::test]
async fn rejected_execution_fails_the_run() {
    let client = delegated_client();
    client.script_states(
        &pid("1"),
        vec![ProposalState::Active, ProposalState::Succeeded],
    );
    client.fail_execute("timelock not ready");

    let orchestrator = VotingOrchestrator::new(client);
    let err = orchestrator
        .submit_votes(&[VoteChoice::abstain(pid("1"))], &voter())
        .await
        .unwrap_err();

    assert!(matches!(err, VotingError::ExecutionFailed(_)));
    assert_eq!(orchestrator.client().vote_calls().len(), 1);
}

#[tokio::test]
async fn read_failure_is_client_unavailable() {
    let client = NullGovernanceClient::new();
    client.fail_reads("connection refused");

    let orchestrator = VotingOrchestrator::new(client);
    let err = orchestrator
        .submit_votes(&[VoteChoice::abstain(pid("1"))], &voter())
        .await
        .unwrap_err();

    assert!(matches!(err, VotingError::ClientUnavailable(_)));
    assert!(orchestrator.client().delegate_calls().is_empty());
}

#[tokio::test]
async fn empty_ballot_is_rejected() {
    let orchestrator = VotingOrchestrator::new(delegated_client());
    let err = orchestrator.submit_votes(&[], &voter()).await.unwrap_err();
    assert!(matches!(err, VotingError::EmptyBallot));
    assert!(!orchestrator.is_in_flight());
}

#[tokio::test]
async fn state_is_reread_before_both_sweeps() {
    let client = delegated_client();
    client.script_states(
        &pid("1"),
        vec![ProposalState::Active, ProposalState::Succeeded],
    );

    let orchestrator = VotingOrchestrator::new(client);
    orchestrator
        .submit_votes(&[VoteChoice::abstain(pid("1"))], &voter())
        .await
        .unwrap();

    // One fresh read per sweep, never a trusted earlier snapshot.
    assert_eq!(orchestrator.client().state_reads(), vec![pid("1"), pid("1")]);
}
