//! CosmWasm wire types for the escrow factory contract.

use serde::{Deserialize, Serialize};

pub const MSG_EXECUTE_CONTRACT_TYPE_URL: &str = "/cosmwasm.wasm.v1.MsgExecuteContract";

/// Placeholder contract an order message is built with, bound later by the factory.
pub const UNBOUND_CONTRACT: &str = "osmo1contract...";

/// Execute message bodies accepted by the escrow contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    CreateEscrow(CreateEscrowMsg),
    Withdraw { secret: String },
    Cancel {},
}

/// Body of `create_escrow`. Integers are decimal strings so that values above
/// 2^53 survive JSON tooling on the other end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEscrowMsg {
    pub hash_lock: String,
    pub time_lock: String,
    pub maker: String,
    pub maker_asset: String,
    pub making_amount: String,
    pub taker_asset: String,
    pub taking_amount: String,
    pub receiver: String,
    pub deadline: String,
    pub safety_deposit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    GetEscrow { address: String },
}

/// `MsgExecuteContract` value; `msg` holds the UTF-8 JSON of an [`ExecuteMsg`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgExecuteContract {
    pub sender: String,
    pub contract: String,
    pub msg: Vec<u8>,
}

impl MsgExecuteContract {
    pub fn new(sender: String, contract: String, body: &ExecuteMsg) -> serde_json::Result<Self> {
        Ok(Self {
            sender,
            contract,
            msg: serde_json::to_vec(body)?,
        })
    }

    pub fn with_contract(mut self, contract: impl Into<String>) -> Self {
        self.contract = contract.into();
        self
    }

    pub fn decode_msg(&self) -> serde_json::Result<ExecuteMsg> {
        serde_json::from_slice(&self.msg)
    }
}

/// Typed message as handed to a signing client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeObject {
    pub type_url: String,
    pub value: MsgExecuteContract,
}

impl EncodeObject {
    pub fn execute_contract(value: MsgExecuteContract) -> Self {
        Self {
            type_url: MSG_EXECUTE_CONTRACT_TYPE_URL.to_string(),
            value,
        }
    }

    pub fn with_contract(self, contract: impl Into<String>) -> Self {
        Self {
            value: self.value.with_contract(contract),
            ..self
        }
    }
}
