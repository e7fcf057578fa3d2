//! Address value types for the chains an order can touch.

mod complement;
mod dst;
mod evm;
mod osmosis;

use std::fmt;

use thiserror::Error;

pub use complement::AddressComplement;
pub use dst::DstAddress;
pub use evm::EvmAddress;
pub use osmosis::OsmosisAddress;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid address format: {0}")]
    InvalidFormat(String),
    #[error("Cannot create address from: {0}")]
    InvalidInput(String),
}

/// Behaviour shared by every chain-specific address.
///
/// `to_string` (via `Display`) must return the canonical textual form, since
/// cross-type equality is defined on it.
pub trait AddressLike: fmt::Display {
    fn is_native(&self) -> bool;
    fn is_zero(&self) -> bool;
    fn to_hex(&self) -> String;
}
