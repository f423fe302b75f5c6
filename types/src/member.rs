//! DAO member records for the roster display.

use crate::address::Address;
use crate::amount::TokenAmount;
use serde::{Deserialize, Serialize};

/// One entry from the governance token's holder list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolderBalance {
    pub holder: Address,
    pub balance: TokenAmount,
}

/// A DAO member as shown in the roster: an address that claimed the
/// membership NFT, paired with its governance token balance.
///
/// A display projection joined from two independently fetched collections;
/// not authoritative.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub address: Address,
    pub token_amount: TokenAmount,
}
