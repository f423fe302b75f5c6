//! Vote options and per-proposal vote choices.

use crate::proposal::ProposalId;
use serde::{Deserialize, Serialize};

/// The three vote options the governance contract understands.
///
/// Wire representation is the contract's u8 option code. The default is
/// [`Abstain`](Self::Abstain): a ballot with no explicit selection still
/// casts a vote, never "no vote".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteType {
    Against,
    For,
    #[default]
    Abstain,
}

impl VoteType {
    /// Decode the contract's numeric option code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Against),
            1 => Some(Self::For),
            2 => Some(Self::Abstain),
            _ => None,
        }
    }

    /// The contract's numeric option code.
    pub fn code(&self) -> u8 {
        match self {
            Self::Against => 0,
            Self::For => 1,
            Self::Abstain => 2,
        }
    }
}

/// One selectable option a proposal offers, with its display label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteOption {
    pub vote: VoteType,
    pub label: String,
}

/// A voter's selection for one proposal.
///
/// Constructed fresh per submission attempt; ephemeral.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteChoice {
    pub proposal: ProposalId,
    pub vote: VoteType,
}

impl VoteChoice {
    pub fn new(proposal: ProposalId, vote: VoteType) -> Self {
        Self { proposal, vote }
    }

    /// The default choice when the voter made no explicit selection.
    pub fn abstain(proposal: ProposalId) -> Self {
        Self {
            proposal,
            vote: VoteType::Abstain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_codes_round_trip() {
        for code in 0..=2u8 {
            assert_eq!(VoteType::from_code(code).unwrap().code(), code);
        }
        assert_eq!(VoteType::from_code(3), None);
    }

    #[test]
    fn default_is_abstain() {
        assert_eq!(VoteType::default(), VoteType::Abstain);
        assert_eq!(VoteType::default().code(), 2);
    }

    #[test]
    fn abstain_choice() {
        let choice = VoteChoice::abstain(ProposalId::new("7"));
        assert_eq!(choice.vote, VoteType::Abstain);
    }
}
