//! Fundamental types for the Omega DAO governance client.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: addresses, proposal identifiers, proposal lifecycle states,
//! vote options, token amounts, and member records.

pub mod address;
pub mod amount;
pub mod member;
pub mod proposal;
pub mod vote;

pub use address::{Address, AddressParseError};
pub use amount::TokenAmount;
pub use member::{HolderBalance, MemberRecord};
pub use proposal::{Proposal, ProposalId, ProposalState, VoteTally};
pub use vote::{VoteChoice, VoteOption, VoteType};
