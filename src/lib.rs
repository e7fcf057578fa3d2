//! Osmosis side of cross-chain swap orders: order construction and hashing,
//! CosmWasm message encoding, and a client for the escrow factory contract.

pub mod address;
pub mod chains;
pub mod domains;
pub mod factory;
pub mod msg;
pub mod order;
pub mod settings;

pub use address::{AddressComplement, AddressError, AddressLike, DstAddress, EvmAddress, OsmosisAddress};
pub use chains::{Network, is_cosmos, is_evm, is_osmosis, is_solana, is_supported_chain};
pub use factory::{ContractQuerier, DeliverTxResponse, Fee, OsmosisEscrowFactory, TxBroadcaster};
pub use order::{Details, EscrowParams, OrderInfo, OsmosisCrossChainOrder, OsmosisOrderJson};
