use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::msg::{EncodeObject, ExecuteMsg, MsgExecuteContract, QueryMsg};
use crate::order::OsmosisCrossChainOrder;
use crate::settings::FactorySettings;

/// Fee selection handed to the signing client.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Fee {
    /// Simulate and use the client's default gas multiplier.
    #[default]
    Auto,
    /// Simulate and scale the estimate by the given multiplier.
    Multiplier(f64),
}

/// Result of a broadcast transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverTxResponse {
    pub transaction_hash: String,
    pub height: u64,
    /// Non-zero when the transaction was included but failed
    pub code: u32,
}

/// Signs and broadcasts transactions on behalf of a signer address.
#[async_trait]
pub trait TxBroadcaster: Send + Sync {
    async fn sign_and_broadcast(
        &self,
        signer: &str,
        messages: Vec<EncodeObject>,
        fee: Fee,
    ) -> Result<DeliverTxResponse>;
}

/// Read-only CosmWasm smart queries.
#[async_trait]
pub trait ContractQuerier: Send + Sync {
    async fn query_contract_smart(&self, contract: &str, query: &Value) -> Result<Value>;
}

/// Client for the escrow factory contract.
///
/// Every call is a single remote round trip. Nothing is retried and client
/// errors are returned as they come, so a timed-out call may already have
/// landed on chain.
pub struct OsmosisEscrowFactory {
    broadcaster: Arc<dyn TxBroadcaster>,
    querier: Arc<dyn ContractQuerier>,
    contract_address: String,
    fee: Fee,
}

impl OsmosisEscrowFactory {
    pub fn new(
        broadcaster: Arc<dyn TxBroadcaster>,
        querier: Arc<dyn ContractQuerier>,
        contract_address: String,
    ) -> Self {
        Self {
            broadcaster,
            querier,
            contract_address,
            fee: Fee::Auto,
        }
    }

    pub fn from_settings(
        settings: &FactorySettings,
        broadcaster: Arc<dyn TxBroadcaster>,
        querier: Arc<dyn ContractQuerier>,
    ) -> Self {
        Self::new(broadcaster, querier, settings.contract_address.clone()).with_fee(settings.fee())
    }

    pub fn with_fee(mut self, fee: Fee) -> Self {
        self.fee = fee;
        self
    }

    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    /// Create a new escrow order, returns the transaction hash
    pub async fn create_order(&self, order: &OsmosisCrossChainOrder) -> Result<String> {
        let message = order.to_cosmos_msg()?.with_contract(&self.contract_address);
        let signer = order.maker().to_string();

        tracing::info!(maker = %signer, contract = %self.contract_address, "Creating escrow order");
        self.broadcast(&signer, message).await
    }

    /// Withdraw from escrow by revealing the secret. The secret is not checked
    /// against the hash-lock before submission.
    pub async fn withdraw_escrow(&self, escrow_address: &str, secret: &str) -> Result<String> {
        let body = ExecuteMsg::Withdraw {
            secret: secret.to_string(),
        };

        tracing::info!(escrow = %escrow_address, "Withdrawing from escrow");
        self.execute_as(escrow_address, &body).await
    }

    pub async fn cancel_escrow(&self, escrow_address: &str) -> Result<String> {
        tracing::info!(escrow = %escrow_address, "Cancelling escrow");
        self.execute_as(escrow_address, &ExecuteMsg::Cancel {}).await
    }

    /// Escrow state as reported by the contract, untyped.
    pub async fn escrow_status(&self, escrow_address: &str) -> Result<Value> {
        let query = serde_json::to_value(QueryMsg::GetEscrow {
            address: escrow_address.to_string(),
        })?;

        tracing::debug!(escrow = %escrow_address, "Querying escrow status");
        self.querier
            .query_contract_smart(&self.contract_address, &query)
            .await
    }

    async fn execute_as(&self, sender: &str, body: &ExecuteMsg) -> Result<String> {
        let value = MsgExecuteContract::new(sender.to_string(), self.contract_address.clone(), body)?;
        self.broadcast(sender, EncodeObject::execute_contract(value)).await
    }

    async fn broadcast(&self, signer: &str, message: EncodeObject) -> Result<String> {
        let response = self
            .broadcaster
            .sign_and_broadcast(signer, vec![message], self.fee)
            .await?;

        if response.code != 0 {
            tracing::warn!(
                tx_hash = %response.transaction_hash,
                code = response.code,
                "Transaction delivered with non-zero code"
            );
        } else {
            tracing::info!(tx_hash = %response.transaction_hash, height = response.height, "Transaction broadcast");
        }
        Ok(response.transaction_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::OsmosisAddress;
    use crate::chains::Network;
    use crate::domains::{AuctionDetails, HashLock, TimeLocks};
    use crate::msg::{MSG_EXECUTE_CONTRACT_TYPE_URL, UNBOUND_CONTRACT};
    use crate::order::{Details, EscrowParams, OrderInfo};
    use alloy::primitives::U256;
    use serde_json::json;
    use std::sync::Mutex;

    const FACTORY: &str = "osmo1factorycontract";

    #[derive(Default)]
    struct RecordingClient {
        broadcasts: Mutex<Vec<(String, Vec<EncodeObject>, Fee)>>,
        queries: Mutex<Vec<(String, Value)>>,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl TxBroadcaster for RecordingClient {
        async fn sign_and_broadcast(
            &self,
            signer: &str,
            messages: Vec<EncodeObject>,
            fee: Fee,
        ) -> Result<DeliverTxResponse> {
            if let Some(reason) = &self.fail_with {
                return Err(anyhow::anyhow!("{reason}"));
            }
            let mut broadcasts = self.broadcasts.lock().unwrap();
            broadcasts.push((signer.to_string(), messages, fee));
            Ok(DeliverTxResponse {
                transaction_hash: format!("TXHASH{}", broadcasts.len()),
                height: 42,
                code: 0,
            })
        }
    }

    #[async_trait]
    impl ContractQuerier for RecordingClient {
        async fn query_contract_smart(&self, contract: &str, query: &Value) -> Result<Value> {
            if let Some(reason) = &self.fail_with {
                return Err(anyhow::anyhow!("{reason}"));
            }
            self.queries
                .lock()
                .unwrap()
                .push((contract.to_string(), query.clone()));
            Ok(json!({ "status": "active" }))
        }
    }

    fn factory(client: &Arc<RecordingClient>) -> OsmosisEscrowFactory {
        OsmosisEscrowFactory::new(client.clone(), client.clone(), FACTORY.to_string())
    }

    fn order() -> OsmosisCrossChainOrder {
        OsmosisCrossChainOrder::new(
            OrderInfo {
                maker_asset: OsmosisAddress::NATIVE,
                taker_asset: OsmosisAddress::from_string("osmo1def456").unwrap().into(),
                making_amount: U256::from(1_000_000u64),
                taking_amount: U256::from(2_000_000u64),
                maker: OsmosisAddress::from_string("osmo1maker123").unwrap(),
                salt: None,
                receiver: None,
            },
            EscrowParams {
                hash_lock: HashLock::for_single_fill("secret"),
                time_locks: TimeLocks::new(3600, 1800, 900, 300),
                src_safety_deposit: U256::from(10_000u64),
                dst_safety_deposit: U256::from(20_000u64),
                dst_chain_id: Network::Ethereum,
            },
            Details {
                auction: AuctionDetails::new(1_000_000, 3600, 0),
            },
        )
    }

    fn body(message: &EncodeObject) -> Value {
        serde_json::from_slice(&message.value.msg).unwrap()
    }

    #[tokio::test]
    async fn test_create_order_binds_factory_contract() {
        let client = Arc::new(RecordingClient::default());
        let order = order();

        let tx_hash = factory(&client).create_order(&order).await.unwrap();
        assert_eq!(tx_hash, "TXHASH1");

        let broadcasts = client.broadcasts.lock().unwrap();
        let (signer, messages, fee) = &broadcasts[0];
        assert_eq!(signer, "osmo1maker123");
        assert_eq!(*fee, Fee::Auto);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].type_url, MSG_EXECUTE_CONTRACT_TYPE_URL);
        assert_eq!(messages[0].value.contract, FACTORY);
        assert_ne!(messages[0].value.contract, UNBOUND_CONTRACT);
        assert_eq!(messages[0].value.sender, "osmo1maker123");
        assert_eq!(body(&messages[0])["create_escrow"]["making_amount"], json!("1000000"));
    }

    #[tokio::test]
    async fn test_withdraw_escrow() {
        let client = Arc::new(RecordingClient::default());

        let tx_hash = factory(&client)
            .withdraw_escrow("osmo1escrow", "my-secret")
            .await
            .unwrap();
        assert_eq!(tx_hash, "TXHASH1");

        let broadcasts = client.broadcasts.lock().unwrap();
        let (signer, messages, _) = &broadcasts[0];
        assert_eq!(signer, "osmo1escrow");
        assert_eq!(messages[0].value.sender, "osmo1escrow");
        assert_eq!(messages[0].value.contract, FACTORY);
        assert_eq!(body(&messages[0]), json!({ "withdraw": { "secret": "my-secret" } }));
    }

    #[tokio::test]
    async fn test_cancel_escrow() {
        let client = Arc::new(RecordingClient::default());

        factory(&client).cancel_escrow("osmo1escrow").await.unwrap();

        let broadcasts = client.broadcasts.lock().unwrap();
        let (signer, messages, _) = &broadcasts[0];
        assert_eq!(signer, "osmo1escrow");
        assert_eq!(body(&messages[0]), json!({ "cancel": {} }));
    }

    #[tokio::test]
    async fn test_escrow_status_is_returned_verbatim() {
        let client = Arc::new(RecordingClient::default());

        let status = factory(&client).escrow_status("osmo1escrow").await.unwrap();
        assert_eq!(status, json!({ "status": "active" }));

        let queries = client.queries.lock().unwrap();
        assert_eq!(queries[0].0, FACTORY);
        assert_eq!(queries[0].1, json!({ "get_escrow": { "address": "osmo1escrow" } }));
    }

    #[tokio::test]
    async fn test_client_errors_propagate_unchanged() {
        let client = Arc::new(RecordingClient {
            fail_with: Some("account sequence mismatch".to_string()),
            ..Default::default()
        });
        let factory = factory(&client);

        let err = factory.create_order(&order()).await.unwrap_err();
        assert_eq!(err.to_string(), "account sequence mismatch");

        let err = factory.escrow_status("osmo1escrow").await.unwrap_err();
        assert_eq!(err.to_string(), "account sequence mismatch");
        assert!(client.broadcasts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_configured_fee_is_used() {
        let client = Arc::new(RecordingClient::default());
        let factory = factory(&client).with_fee(Fee::Multiplier(1.5));

        factory.cancel_escrow("osmo1escrow").await.unwrap();

        let broadcasts = client.broadcasts.lock().unwrap();
        assert_eq!(broadcasts[0].2, Fee::Multiplier(1.5));
    }
}
