use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use crate::address::{DstAddress, OsmosisAddress};
use crate::chains::Network;
use crate::domains::{AuctionDetails, HashLock, TimeLocks};

/// Order economics
#[derive(Debug, Clone)]
pub struct OrderInfo {
    /// Source chain asset (Osmosis)
    pub maker_asset: OsmosisAddress,
    /// Destination chain asset
    pub taker_asset: DstAddress,
    /// Source chain amount
    pub making_amount: U256,
    /// Destination chain min amount
    pub taking_amount: U256,
    pub maker: OsmosisAddress,
    pub salt: Option<U256>,
    /// Destination chain receiver address. If not set, `maker` is used
    pub receiver: Option<DstAddress>,
}

#[derive(Debug, Clone)]
pub struct EscrowParams {
    pub hash_lock: HashLock,
    pub time_locks: TimeLocks,
    /// Paid by the resolver into the source escrow, forfeited on misbehaviour
    pub src_safety_deposit: U256,
    /// Paid by the resolver into the destination escrow
    pub dst_safety_deposit: U256,
    pub dst_chain_id: Network,
}

#[derive(Debug, Clone)]
pub struct Details {
    pub auction: AuctionDetails,
}

/// Flat snapshot of an order for persistence or transmission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsmosisOrderJson {
    pub maker_asset: String,
    pub taker_asset: String,
    pub making_amount: String,
    pub taking_amount: String,
    pub maker: String,
    pub salt: String,
    pub receiver: String,
    pub hash_lock: String,
    pub time_locks: String,
    pub src_safety_deposit: String,
    pub dst_safety_deposit: String,
    /// Carries the destination chain id, see `OsmosisCrossChainOrder::to_json`
    pub src_chain_id: Network,
    pub dst_chain_id: Network,
    pub deadline: String,
    pub auction_start_time: String,
    pub auction_end_time: String,
    pub partial_fill_allowed: bool,
    pub multiple_fills_allowed: bool,
    pub src_asset_is_native: bool,
}

/// Hash preimage. Field order is part of the hash and must not change.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct OrderHashInput<'a> {
    pub src_chain_id: Network,
    pub dst_chain_id: Network,
    pub maker: &'a str,
    pub maker_asset: &'a str,
    pub making_amount: String,
    pub taker_asset: String,
    pub taking_amount: String,
    pub receiver: String,
    pub hash_lock: String,
    pub time_locks: String,
    pub deadline: String,
    pub salt: String,
}
