use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{AddressError, AddressLike, EvmAddress, OsmosisAddress};

/// Address on the destination side of an order: the taker asset or the receiver.
///
/// Rendered through `Display` only, so the wire form is the underlying
/// address string either way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DstAddress {
    Osmosis(OsmosisAddress),
    Evm(EvmAddress),
}

impl DstAddress {
    pub fn as_osmosis(&self) -> Option<&OsmosisAddress> {
        match self {
            DstAddress::Osmosis(address) => Some(address),
            DstAddress::Evm(_) => None,
        }
    }

    pub fn as_evm(&self) -> Option<&EvmAddress> {
        match self {
            DstAddress::Osmosis(_) => None,
            DstAddress::Evm(address) => Some(address),
        }
    }
}

impl AddressLike for DstAddress {
    fn is_native(&self) -> bool {
        match self {
            DstAddress::Osmosis(address) => address.is_native(),
            DstAddress::Evm(address) => address.is_native(),
        }
    }

    fn is_zero(&self) -> bool {
        match self {
            DstAddress::Osmosis(address) => address.is_zero(),
            DstAddress::Evm(address) => address.is_zero(),
        }
    }

    fn to_hex(&self) -> String {
        match self {
            DstAddress::Osmosis(address) => address.to_hex(),
            DstAddress::Evm(address) => address.to_hex(),
        }
    }
}

/// `0x`-prefixed input is read as an EVM address, anything else as Osmosis.
impl FromStr for DstAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("0x") {
            return EvmAddress::from_str(s).map(DstAddress::Evm);
        }
        OsmosisAddress::from_string(s).map(DstAddress::Osmosis)
    }
}

impl TryFrom<String> for DstAddress {
    type Error = AddressError;

    fn try_from(address: String) -> Result<Self, Self::Error> {
        address.parse()
    }
}

impl From<DstAddress> for String {
    fn from(address: DstAddress) -> Self {
        address.to_string()
    }
}

impl From<OsmosisAddress> for DstAddress {
    fn from(address: OsmosisAddress) -> Self {
        DstAddress::Osmosis(address)
    }
}

impl From<EvmAddress> for DstAddress {
    fn from(address: EvmAddress) -> Self {
        DstAddress::Evm(address)
    }
}

impl PartialEq<OsmosisAddress> for DstAddress {
    fn eq(&self, other: &OsmosisAddress) -> bool {
        self.as_osmosis() == Some(other)
    }
}

impl fmt::Display for DstAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DstAddress::Osmosis(address) => fmt::Display::fmt(address, f),
            DstAddress::Evm(address) => fmt::Display::fmt(address, f),
        }
    }
}
