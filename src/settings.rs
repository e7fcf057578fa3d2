use alloy::primitives::U256;
use anyhow::Result;
use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;

use crate::address::{DstAddress, OsmosisAddress};
use crate::chains::Network;
use crate::domains::{AuctionDetails, HashLock, TimeLocks};
use crate::factory::Fee;
use crate::order::{Details, EscrowParams, OrderInfo, OsmosisCrossChainOrder};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub factory: FactorySettings,
    pub order: Option<OrderSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FactorySettings {
    pub contract_address: String,
    /// Scales the simulated gas; `auto` fees when unset
    pub gas_multiplier: Option<f64>,
}

/// Order template. Amounts are decimal strings so they are not capped at i64.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderSettings {
    pub src_chain_id: Network,
    pub dst_chain_id: Network,
    pub maker: String,
    pub maker_asset: String,
    pub taker_asset: String,
    pub making_amount: String,
    pub taking_amount: String,
    pub receiver: Option<String>,
    pub salt: Option<String>,
    pub secret: String,
    pub src_safety_deposit: String,
    pub dst_safety_deposit: String,
    pub time_locks: TimeLockSettings,
    pub auction: AuctionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeLockSettings {
    pub src_withdrawal: u32,
    pub src_cancellation: u32,
    pub dst_withdrawal: u32,
    pub dst_cancellation: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuctionSettings {
    pub start_time: u64,
    pub duration: u64,
    #[serde(default)]
    pub initial_rate_bump: u32,
}

impl Settings {
    pub fn from_toml(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(path))
            .build()?
            .try_deserialize()
    }

    pub fn from_str(toml_str: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml_str, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

impl FactorySettings {
    pub fn fee(&self) -> Fee {
        self.gas_multiplier.map_or(Fee::Auto, Fee::Multiplier)
    }
}

impl OrderSettings {
    pub fn to_order(&self) -> Result<OsmosisCrossChainOrder> {
        let receiver = self
            .receiver
            .as_deref()
            .map(str::parse::<DstAddress>)
            .transpose()?;
        let salt = self.salt.as_deref().map(parse_amount).transpose()?;

        let order_info = OrderInfo {
            maker_asset: OsmosisAddress::from_string(&self.maker_asset)?,
            taker_asset: self.taker_asset.parse()?,
            making_amount: parse_amount(&self.making_amount)?,
            taking_amount: parse_amount(&self.taking_amount)?,
            maker: OsmosisAddress::from_string(&self.maker)?,
            salt,
            receiver,
        };

        let escrow_params = EscrowParams {
            hash_lock: HashLock::for_single_fill(&self.secret),
            time_locks: TimeLocks::new(
                self.time_locks.src_withdrawal,
                self.time_locks.src_cancellation,
                self.time_locks.dst_withdrawal,
                self.time_locks.dst_cancellation,
            ),
            src_safety_deposit: parse_amount(&self.src_safety_deposit)?,
            dst_safety_deposit: parse_amount(&self.dst_safety_deposit)?,
            dst_chain_id: self.dst_chain_id,
        };

        let details = Details {
            auction: AuctionDetails::new(
                self.auction.start_time,
                self.auction.duration,
                self.auction.initial_rate_bump,
            ),
        };

        Ok(OsmosisCrossChainOrder::new(order_info, escrow_params, details))
    }
}

fn parse_amount(value: &str) -> Result<U256> {
    U256::from_str_radix(value, 10).map_err(|e| anyhow::anyhow!("Invalid amount {value}: {e}"))
}
