//! Ballot construction with the abstain-by-default policy.

use std::collections::HashMap;

use omega_types::{Proposal, ProposalId, VoteChoice, VoteType};

/// Build one [`VoteChoice`] per proposal from a sparse set of explicit
/// selections.
///
/// A proposal with no explicit selection gets [`VoteType::Abstain`] — a vote
/// is always cast, never "no vote".
pub fn build_ballot(
    proposals: &[Proposal],
    selections: &HashMap<ProposalId, VoteType>,
) -> Vec<VoteChoice> {
    proposals
        .iter()
        .map(|proposal| match selections.get(&proposal.id) {
            Some(&vote) => VoteChoice::new(proposal.id.clone(), vote),
            None => VoteChoice::abstain(proposal.id.clone()),
        })
        .collect()
}
