//! Member roster projection for the DAO member page.

use futures_util::try_join;

use omega_client::{ClientError, GovernanceClient};
use omega_types::{Address, HolderBalance, MemberRecord, TokenAmount};

/// Join membership NFT claimers with governance token balances into the
/// roster display list.
///
/// Claimer order is preserved; a claimer without a balance entry shows a
/// zero amount. Purely a display projection, not authoritative.
pub fn join_members(claimers: &[Address], balances: &[HolderBalance]) -> Vec<MemberRecord> {
    claimers
        .iter()
        .map(|address| {
            let token_amount = balances
                .iter()
                .find(|entry| &entry.holder == address)
                .map(|entry| entry.balance)
                .unwrap_or(TokenAmount::ZERO);
            MemberRecord {
                address: address.clone(),
                token_amount,
            }
        })
        .collect()
}

/// Fetch both roster source collections and join them.
///
/// The two reads are independent, so they are issued together.
pub async fn fetch_roster<C: GovernanceClient>(
    client: &C,
) -> Result<Vec<MemberRecord>, ClientError> {
    let (claimers, balances) = try_join!(client.list_claimers(), client.list_holder_balances())?;
    Ok(join_members(&claimers, &balances))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u8) -> Address {
        Address::parse(&format!("0x{:040x}", n)).unwrap()
    }

    #[test]
    fn join_preserves_claimer_order() {
        let claimers = vec![addr(3), addr(1), addr(2)];
        let balances = vec![
            HolderBalance {
                holder: addr(1),
                balance: TokenAmount::new(10),
            },
            HolderBalance {
                holder: addr(3),
                balance: TokenAmount::new(30),
            },
        ];

        let roster = join_members(&claimers, &balances);

        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].address, addr(3));
        assert_eq!(roster[0].token_amount, TokenAmount::new(30));
        assert_eq!(roster[1].token_amount, TokenAmount::new(10));
        assert_eq!(roster[2].token_amount, TokenAmount::ZERO);
    }

    #[test]
    fn holders_without_claim_are_not_members() {
        let claimers = vec![addr(1)];
        let balances = vec![
            HolderBalance {
                holder: addr(1),
                balance: TokenAmount::new(5),
            },
            HolderBalance {
                holder: addr(9),
                balance: TokenAmount::new(99),
            },
        ];

        let roster = join_members(&claimers, &balances);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].address, addr(1));
    }
}
