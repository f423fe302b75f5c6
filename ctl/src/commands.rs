//! Subcommand implementations.

use std::collections::HashMap;

use anyhow::{bail, Context};

use omega_client::{GatewayClient, GovernanceClient};
use omega_governance::{
    build_ballot, fetch_roster, participation_percent, TallyView, VotingOrchestrator,
};
use omega_types::{Address, ProposalId, VoteType};

use crate::config::CtlConfig;

/// Resolve and validate the voter address from config.
fn voter_address(config: &CtlConfig) -> anyhow::Result<Address> {
    let raw = config
        .voter
        .as_deref()
        .context("no voter address configured (set --voter, OMEGA_VOTER, or the config file)")?;
    Address::parse(raw).with_context(|| format!("invalid voter address {raw:?}"))
}

/// Membership gate: everything past the landing page is members-only.
async fn require_member(client: &GatewayClient, voter: &Address) -> anyhow::Result<()> {
    let balance = client.membership_balance(voter).await?;
    if balance == 0 {
        bail!(
            "{} holds no membership NFT — mint one to access the DAO",
            voter.shorten()
        );
    }
    Ok(())
}

pub async fn proposals(client: &GatewayClient) -> anyhow::Result<()> {
    let proposals = client.list_proposals().await?;
    if proposals.is_empty() {
        println!("no proposals");
        return Ok(());
    }
    let member_count = client.list_claimers().await?.len();

    for proposal in &proposals {
        let view = TallyView::from_tally(&proposal.tally);
        println!("#{} [{}] {}", proposal.id, proposal.state, proposal.description);
        println!(
            "    {} of {} members voted ({:.0}%)",
            view.total_votes,
            member_count,
            participation_percent(view.total_votes, member_count)
        );
        println!(
            "    for {:.1}%, against {:.1}%, abstain {:.1}%",
            view.percent_for, view.percent_against, view.percent_abstain
        );
        for option in &proposal.options {
            println!("    option {}: {}", option.vote.code(), option.label);
        }
    }
    Ok(())
}

pub async fn members(client: &GatewayClient, config: &CtlConfig) -> anyhow::Result<()> {
    let voter = voter_address(config)?;
    require_member(client, &voter).await?;

    let roster = fetch_roster(client).await?;
    println!("{:<14}  {}", "Address", "Token Amount");
    for member in &roster {
        println!("{:<14}  {}", member.address.shorten(), member.token_amount);
    }
    println!("{} members", roster.len());
    Ok(())
}

pub async fn status(client: &GatewayClient, config: &CtlConfig) -> anyhow::Result<()> {
    let voter = voter_address(config)?;

    let membership = client.membership_balance(&voter).await?;
    println!(
        "membership: {}",
        if membership > 0 { "member" } else { "not a member" }
    );
    if membership == 0 {
        return Ok(());
    }

    let delegation = client.get_delegation(&voter).await?;
    if delegation.is_zero() {
        println!("delegation: none (a vote will first delegate to self)");
    } else {
        println!("delegation: {}", delegation.shorten());
    }

    // Prior-vote status against the newest proposal, as the member page shows.
    let proposals = client.list_proposals().await?;
    match proposals.first() {
        Some(proposal) => {
            let voted = client.has_voted(&proposal.id, &voter).await?;
            println!(
                "proposal #{}: {}",
                proposal.id,
                if voted { "already voted" } else { "not voted yet" }
            );
        }
        None => println!("no proposals"),
    }
    Ok(())
}

pub async fn vote(
    client: GatewayClient,
    config: &CtlConfig,
    raw_selections: &[String],
) -> anyhow::Result<()> {
    let voter = voter_address(config)?;
    require_member(&client, &voter).await?;

    let selections = parse_selections(raw_selections)?;
    let proposals = client.list_proposals().await?;
    if proposals.is_empty() {
        bail!("no proposals to vote on");
    }
    let choices = build_ballot(&proposals, &selections);

    let orchestrator = VotingOrchestrator::new(client);
    let report = orchestrator.submit_votes(&choices, &voter).await?;

    if report.delegated {
        println!("delegated governance tokens to self");
    }
    println!(
        "votes submitted: {} ({} skipped)",
        report.votes_submitted(),
        report.votes.len() - report.votes_submitted()
    );
    println!("proposals executed: {}", report.executions_submitted());
    Ok(())
}

/// Parse `--select` arguments of the form `<proposal-id>=<choice>`.
fn parse_selections(raw: &[String]) -> anyhow::Result<HashMap<ProposalId, VoteType>> {
    let mut selections = HashMap::new();
    for entry in raw {
        let (id, choice) = entry
            .split_once('=')
            .with_context(|| format!("invalid selection {entry:?}, expected ID=CHOICE"))?;
        let vote = match choice.to_ascii_lowercase().as_str() {
            "against" => VoteType::Against,
            "for" => VoteType::For,
            "abstain" => VoteType::Abstain,
            other => bail!("unknown vote choice {other:?}, expected against/for/abstain"),
        };
        selections.insert(ProposalId::new(id), vote);
    }
    Ok(selections)
}
