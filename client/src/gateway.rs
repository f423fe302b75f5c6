//! JSON-RPC client for the governance gateway.
//!
//! The gateway is an off-repository service that wraps the DAO's smart
//! contracts (membership NFT drop, governance token, vote module) behind one
//! HTTP endpoint. Requests are a single JSON object with an `action` field;
//! responses carry either an `error` string or a `result` payload.

use std::time::Duration;

use serde::Deserialize;

use omega_types::{
    Address, HolderBalance, Proposal, ProposalId, ProposalState, TokenAmount, VoteOption,
    VoteTally, VoteType,
};

use crate::error::ClientError;
use crate::GovernanceClient;

/// HTTP client for the governance gateway.
///
/// Wraps `reqwest::Client` with the gateway's base URL and provides typed
/// methods for each action the workflow needs.
#[derive(Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    gateway_url: String,
}

impl GatewayClient {
    /// Create a new client targeting the given base URL
    /// (e.g. `http://127.0.0.1:8545`).
    pub fn new(gateway_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ClientError::Http(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            gateway_url: gateway_url.into(),
        })
    }

    /// The configured gateway URL.
    pub fn gateway_url(&self) -> &str {
        &self.gateway_url
    }

    /// Send one gateway request and return the `result` field.
    async fn rpc_call(
        &self,
        action: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, ClientError> {
        let mut body = params;
        body.as_object_mut()
            .ok_or_else(|| ClientError::Http("params must be a JSON object".into()))?
            .insert("action".to_string(), serde_json::json!(action));

        let response = self
            .http
            .post(&self.gateway_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Http(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ClientError::Http(format!(
                "gateway returned HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("invalid JSON: {e}")))?;

        if let Some(err) = json.get("error").and_then(|e| e.as_str()) {
            return Err(ClientError::Gateway(err.to_string()));
        }

        Ok(json.get("result").cloned().unwrap_or(json))
    }

    /// Submit a transaction action and map a rejection to
    /// [`ClientError::Rejected`].
    async fn tx_call(
        &self,
        action: &str,
        params: serde_json::Value,
    ) -> Result<(), ClientError> {
        let result = self.rpc_call(action, params).await?;
        let tx: TxResult = serde_json::from_value(result)
            .map_err(|e| ClientError::InvalidResponse(format!("invalid {action} response: {e}")))?;

        if !tx.accepted {
            return Err(ClientError::Rejected(
                tx.detail.unwrap_or_else(|| "transaction reverted".into()),
            ));
        }
        tracing::debug!(action, tx_hash = %tx.tx_hash, "transaction accepted");
        Ok(())
    }
}

impl GovernanceClient for GatewayClient {
    async fn list_proposals(&self) -> Result<Vec<Proposal>, ClientError> {
        let result = self.rpc_call("proposal_list", serde_json::json!({})).await?;

        let entries: Vec<ProposalEntry> = serde_json::from_value(result)
            .map_err(|e| ClientError::InvalidResponse(format!("invalid proposal list: {e}")))?;

        entries.into_iter().map(ProposalEntry::into_proposal).collect()
    }

    async fn has_voted(
        &self,
        proposal: &ProposalId,
        voter: &Address,
    ) -> Result<bool, ClientError> {
        let result = self
            .rpc_call(
                "has_voted",
                serde_json::json!({
                    "proposal_id": proposal.as_str(),
                    "voter": voter.as_str(),
                }),
            )
            .await?;

        result
            .get("has_voted")
            .and_then(|v| v.as_bool())
            .ok_or_else(|| ClientError::InvalidResponse("missing has_voted field".into()))
    }

    async fn get_proposal_state(
        &self,
        proposal: &ProposalId,
    ) -> Result<ProposalState, ClientError> {
        let result = self
            .rpc_call(
                "proposal_state",
                serde_json::json!({ "proposal_id": proposal.as_str() }),
            )
            .await?;

        let code = result
            .get("state")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| ClientError::InvalidResponse("missing state field".into()))?;

        u8::try_from(code)
            .ok()
            .and_then(ProposalState::from_code)
            .ok_or_else(|| ClientError::InvalidResponse(format!("unknown state code {code}")))
    }

    async fn cast_vote(&self, proposal: &ProposalId, vote: VoteType) -> Result<(), ClientError> {
        self.tx_call(
            "vote_cast",
            serde_json::json!({
                "proposal_id": proposal.as_str(),
                "vote": vote.code(),
            }),
        )
        .await
    }

    async fn execute_proposal(&self, proposal: &ProposalId) -> Result<(), ClientError> {
        self.tx_call(
            "proposal_execute",
            serde_json::json!({ "proposal_id": proposal.as_str() }),
        )
        .await
    }

    async fn get_delegation(&self, holder: &Address) -> Result<Address, ClientError> {
        let result = self
            .rpc_call(
                "delegation_of",
                serde_json::json!({ "holder": holder.as_str() }),
            )
            .await?;

        let raw = result
            .get("delegatee")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ClientError::InvalidResponse("missing delegatee field".into()))?;

        Address::parse(raw)
            .map_err(|e| ClientError::InvalidResponse(format!("invalid delegatee address: {e}")))
    }

    async fn delegate(&self, to: &Address) -> Result<(), ClientError> {
        self.tx_call("delegate", serde_json::json!({ "to": to.as_str() }))
            .await
    }

    async fn membership_balance(&self, holder: &Address) -> Result<u64, ClientError> {
        let result = self
            .rpc_call(
                "membership_balance",
                serde_json::json!({ "holder": holder.as_str() }),
            )
            .await?;

        result
            .get("balance")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| ClientError::InvalidResponse("missing balance field".into()))
    }

    async fn list_claimers(&self) -> Result<Vec<Address>, ClientError> {
        let result = self.rpc_call("claimer_list", serde_json::json!({})).await?;

        let raw: Vec<String> = serde_json::from_value(result)
            .map_err(|e| ClientError::InvalidResponse(format!("invalid claimer list: {e}")))?;

        raw.iter()
            .map(|s| {
                Address::parse(s).map_err(|e| {
                    ClientError::InvalidResponse(format!("invalid claimer address: {e}"))
                })
            })
            .collect()
    }

    async fn list_holder_balances(&self) -> Result<Vec<HolderBalance>, ClientError> {
        let result = self
            .rpc_call("holder_balances", serde_json::json!({}))
            .await?;

        let entries: Vec<HolderEntry> = serde_json::from_value(result)
            .map_err(|e| ClientError::InvalidResponse(format!("invalid holder list: {e}")))?;

        entries
            .into_iter()
            .map(|entry| {
                let holder = Address::parse(&entry.holder).map_err(|e| {
                    ClientError::InvalidResponse(format!("invalid holder address: {e}"))
                })?;
                let raw = entry.balance.parse::<u128>().map_err(|e| {
                    ClientError::InvalidResponse(format!("invalid balance value: {e}"))
                })?;
                Ok(HolderBalance {
                    holder,
                    balance: TokenAmount::new(raw),
                })
            })
            .collect()
    }
}

// ── Wire formats ────────────────────────────────────────────────────────

/// One proposal as the gateway reports it.
#[derive(Debug, Clone, Deserialize)]
struct ProposalEntry {
    proposal_id: String,
    #[serde(default)]
    description: String,
    state: u8,
    #[serde(default)]
    options: Vec<OptionEntry>,
    #[serde(default)]
    tally: TallyEntry,
}

#[derive(Debug, Clone, Deserialize)]
struct OptionEntry {
    vote: u8,
    label: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TallyEntry {
    #[serde(default)]
    against: u64,
    #[serde(default, rename = "for")]
    in_favor: u64,
    #[serde(default)]
    abstain: u64,
}

/// One holder balance as the gateway reports it.
#[derive(Debug, Clone, Deserialize)]
struct HolderEntry {
    holder: String,
    balance: String,
}

/// Response to a transaction submission.
#[derive(Debug, Clone, Deserialize)]
struct TxResult {
    tx_hash: String,
    accepted: bool,
    #[serde(default)]
    detail: Option<String>,
}

impl ProposalEntry {
    fn into_proposal(self) -> Result<Proposal, ClientError> {
        let state = ProposalState::from_code(self.state).ok_or_else(|| {
            ClientError::InvalidResponse(format!("unknown state code {}", self.state))
        })?;

        let options = self
            .options
            .into_iter()
            .map(|o| {
                let vote = VoteType::from_code(o.vote).ok_or_else(|| {
                    ClientError::InvalidResponse(format!("unknown vote code {}", o.vote))
                })?;
                Ok(VoteOption {
                    vote,
                    label: o.label,
                })
            })
            .collect::<Result<Vec<_>, ClientError>>()?;

        Ok(Proposal {
            id: ProposalId::new(self.proposal_id),
            description: self.description,
            state,
            options,
            tally: VoteTally {
                against: self.tally.against,
                in_favor: self.tally.in_favor,
                abstain: self.tally.abstain,
            },
        })
    }
}
