use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Network identifiers understood by the cross-chain order layer.
///
/// The numeric value is the code used on the wire (order hash input, JSON
/// snapshot). Cosmos networks are told apart by membership, not by range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u64", try_from = "u64")]
#[repr(u64)]
pub enum Network {
    Ethereum = 1,
    Polygon = 137,
    ZkSync = 324,
    Binance = 56,
    Arbitrum = 42161,
    Avalanche = 43114,
    Optimism = 10,
    Fantom = 250,
    Gnosis = 100,
    Coinbase = 8453,
    Linea = 59144,
    Sonic = 146,
    Unichain = 130,
    Solana = 501,
    OsmosisTestnet = 1000,
    OsmosisMainnet = 1001,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown network id: {0}")]
pub struct UnknownNetwork(pub u64);

pub const SUPPORTED_CHAINS: [Network; 15] = [
    Network::Ethereum,
    Network::Polygon,
    Network::Binance,
    Network::Optimism,
    Network::Arbitrum,
    Network::Avalanche,
    Network::Gnosis,
    Network::Coinbase,
    Network::ZkSync,
    Network::Linea,
    Network::Sonic,
    Network::Unichain,
    Network::Solana,
    Network::OsmosisTestnet,
    Network::OsmosisMainnet,
];

const ALL_NETWORKS: [Network; 16] = [
    Network::Ethereum,
    Network::Polygon,
    Network::ZkSync,
    Network::Binance,
    Network::Arbitrum,
    Network::Avalanche,
    Network::Optimism,
    Network::Fantom,
    Network::Gnosis,
    Network::Coinbase,
    Network::Linea,
    Network::Sonic,
    Network::Unichain,
    Network::Solana,
    Network::OsmosisTestnet,
    Network::OsmosisMainnet,
];

impl Network {
    pub fn id(self) -> u64 {
        self as u64
    }
}

impl From<Network> for u64 {
    fn from(network: Network) -> Self {
        network.id()
    }
}

impl TryFrom<u64> for Network {
    type Error = UnknownNetwork;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        ALL_NETWORKS
            .iter()
            .copied()
            .find(|network| network.id() == id)
            .ok_or(UnknownNetwork(id))
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

pub fn is_supported_chain(chain: Network) -> bool {
    SUPPORTED_CHAINS.contains(&chain)
}

pub fn is_evm(chain: Network) -> bool {
    is_supported_chain(chain) && !is_solana(chain) && !is_cosmos(chain)
}

pub fn is_solana(chain: Network) -> bool {
    chain == Network::Solana
}

pub fn is_cosmos(chain: Network) -> bool {
    matches!(chain, Network::OsmosisTestnet | Network::OsmosisMainnet)
}

/// Osmosis is the only Cosmos network wired in so far.
pub fn is_osmosis(chain: Network) -> bool {
    is_cosmos(chain)
}
