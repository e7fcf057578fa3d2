mod types;

use alloy::primitives::U256;
use sha2::{Digest, Sha256};

use crate::address::{AddressLike, DstAddress, OsmosisAddress};
use crate::chains::Network;
use crate::domains::{FlatAuctionCalculator, HashLock, TimeLocks};
use crate::msg::{CreateEscrowMsg, EncodeObject, ExecuteMsg, MsgExecuteContract, UNBOUND_CONTRACT};

pub use types::{Details, EscrowParams, OrderInfo, OsmosisOrderJson};
use types::OrderHashInput;

/// Seconds an order stays fillable after its auction ends.
pub const ORDER_EXPIRATION_DELAY: u64 = 12;

/// A swap order whose source side lives on Osmosis.
///
/// Immutable after construction; derived fields (`receiver`, `deadline`,
/// `src_asset_is_native`) are fixed in [`OsmosisCrossChainOrder::new`].
#[derive(Debug, Clone)]
pub struct OsmosisCrossChainOrder {
    hash_lock: HashLock,
    time_locks: TimeLocks,
    src_safety_deposit: U256,
    dst_safety_deposit: U256,
    dst_chain_id: Network,
    maker: OsmosisAddress,
    taker_asset: DstAddress,
    maker_asset: OsmosisAddress,
    taking_amount: U256,
    making_amount: U256,
    receiver: DstAddress,
    deadline: U256,
    auction_start_time: u64,
    auction_end_time: U256,
    partial_fill_allowed: bool,
    multiple_fills_allowed: bool,
    src_asset_is_native: bool,
    salt: U256,
}

impl OsmosisCrossChainOrder {
    /// Inputs are taken as given: amounts, party distinctness and chain
    /// support are not checked here.
    pub fn new(order_info: OrderInfo, escrow_params: EscrowParams, details: Details) -> Self {
        let src_asset_is_native = order_info.maker_asset.is_native();
        let receiver = order_info
            .receiver
            .unwrap_or_else(|| DstAddress::Osmosis(order_info.maker.clone()));
        let auction_end_time = details.auction.end_time();

        let order = Self {
            hash_lock: escrow_params.hash_lock,
            time_locks: escrow_params.time_locks,
            src_safety_deposit: escrow_params.src_safety_deposit,
            dst_safety_deposit: escrow_params.dst_safety_deposit,
            dst_chain_id: escrow_params.dst_chain_id,
            maker: order_info.maker,
            taker_asset: order_info.taker_asset,
            maker_asset: order_info.maker_asset,
            taking_amount: order_info.taking_amount,
            making_amount: order_info.making_amount,
            receiver,
            deadline: auction_end_time + U256::from(ORDER_EXPIRATION_DELAY),
            auction_start_time: details.auction.start_time,
            auction_end_time,
            partial_fill_allowed: true,
            multiple_fills_allowed: true,
            src_asset_is_native,
            salt: order_info.salt.unwrap_or(U256::ZERO),
        };

        tracing::debug!(
            maker = %order.maker,
            dst_chain_id = %order.dst_chain_id,
            deadline = %order.deadline,
            "Built osmosis cross chain order"
        );
        order
    }

    /// `create_escrow` message for this order.
    ///
    /// The contract is a placeholder; the factory binds the real address
    /// before broadcasting.
    pub fn to_cosmos_msg(&self) -> serde_json::Result<EncodeObject> {
        let body = ExecuteMsg::CreateEscrow(CreateEscrowMsg {
            hash_lock: self.hash_lock.to_string(),
            time_lock: self.time_locks.to_string(),
            maker: self.maker.to_string(),
            maker_asset: self.maker_asset.to_string(),
            making_amount: self.making_amount.to_string(),
            taker_asset: self.taker_asset.to_string(),
            taking_amount: self.taking_amount.to_string(),
            receiver: self.receiver.to_string(),
            deadline: self.deadline.to_string(),
            safety_deposit: self.src_safety_deposit.to_string(),
        });

        let value = MsgExecuteContract::new(self.maker.to_string(), UNBOUND_CONTRACT.to_string(), &body)?;
        Ok(EncodeObject::execute_contract(value))
    }

    /// `0x`-prefixed hex of [`Self::order_hash_bytes`].
    pub fn order_hash(&self, src_chain_id: Network) -> String {
        format!("0x{}", hex::encode(self.order_hash_bytes(src_chain_id)))
    }

    /// SHA-256 over the compact JSON of the order's identifying fields.
    pub fn order_hash_bytes(&self, src_chain_id: Network) -> [u8; 32] {
        let input = OrderHashInput {
            src_chain_id,
            dst_chain_id: self.dst_chain_id,
            maker: self.maker.as_str(),
            maker_asset: self.maker_asset.as_str(),
            making_amount: self.making_amount.to_string(),
            taker_asset: self.taker_asset.to_string(),
            taking_amount: self.taking_amount.to_string(),
            receiver: self.receiver.to_string(),
            hash_lock: self.hash_lock.to_string(),
            time_locks: self.time_locks.to_string(),
            deadline: self.deadline.to_string(),
            salt: self.salt.to_string(),
        };

        let preimage = serde_json::to_vec(&input).expect("order hash input serializes");
        Sha256::digest(&preimage).into()
    }

    /// Rate-bump calculator for the auction. Currently flat.
    pub fn calculator(&self) -> FlatAuctionCalculator {
        FlatAuctionCalculator
    }

    /// Snapshot of every field.
    ///
    /// `srcChainId` is populated with the destination chain id, as existing
    /// consumers of this snapshot expect.
    pub fn to_json(&self) -> OsmosisOrderJson {
        OsmosisOrderJson {
            maker_asset: self.maker_asset.to_string(),
            taker_asset: self.taker_asset.to_string(),
            making_amount: self.making_amount.to_string(),
            taking_amount: self.taking_amount.to_string(),
            maker: self.maker.to_string(),
            salt: self.salt.to_string(),
            receiver: self.receiver.to_string(),
            hash_lock: self.hash_lock.to_string(),
            time_locks: self.time_locks.to_string(),
            src_safety_deposit: self.src_safety_deposit.to_string(),
            dst_safety_deposit: self.dst_safety_deposit.to_string(),
            src_chain_id: self.dst_chain_id,
            dst_chain_id: self.dst_chain_id,
            deadline: self.deadline.to_string(),
            auction_start_time: self.auction_start_time.to_string(),
            auction_end_time: self.auction_end_time.to_string(),
            partial_fill_allowed: self.partial_fill_allowed,
            multiple_fills_allowed: self.multiple_fills_allowed,
            src_asset_is_native: self.src_asset_is_native,
        }
    }

    pub fn hash_lock(&self) -> &HashLock {
        &self.hash_lock
    }

    pub fn time_locks(&self) -> &TimeLocks {
        &self.time_locks
    }

    pub fn src_safety_deposit(&self) -> U256 {
        self.src_safety_deposit
    }

    pub fn dst_safety_deposit(&self) -> U256 {
        self.dst_safety_deposit
    }

    pub fn dst_chain_id(&self) -> Network {
        self.dst_chain_id
    }

    pub fn maker(&self) -> &OsmosisAddress {
        &self.maker
    }

    pub fn taker_asset(&self) -> &DstAddress {
        &self.taker_asset
    }

    pub fn maker_asset(&self) -> &OsmosisAddress {
        &self.maker_asset
    }

    pub fn taking_amount(&self) -> U256 {
        self.taking_amount
    }

    pub fn making_amount(&self) -> U256 {
        self.making_amount
    }

    pub fn receiver(&self) -> &DstAddress {
        &self.receiver
    }

    pub fn deadline(&self) -> U256 {
        self.deadline
    }

    pub fn auction_start_time(&self) -> u64 {
        self.auction_start_time
    }

    pub fn auction_end_time(&self) -> U256 {
        self.auction_end_time
    }

    pub fn partial_fill_allowed(&self) -> bool {
        self.partial_fill_allowed
    }

    pub fn multiple_fills_allowed(&self) -> bool {
        self.multiple_fills_allowed
    }

    pub fn src_asset_is_native(&self) -> bool {
        self.src_asset_is_native
    }

    pub fn salt(&self) -> U256 {
        self.salt
    }
}
