use std::fmt;
use std::str::FromStr;

use alloy::primitives::{Address, address};

use super::{AddressError, AddressLike};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvmAddress(Address);

impl EvmAddress {
    pub const ZERO: EvmAddress = EvmAddress(Address::ZERO);
    /// Conventional placeholder for the chain's gas token.
    pub const NATIVE: EvmAddress = EvmAddress(address!("eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee"));

    pub fn new(address: Address) -> Self {
        Self(address)
    }

    pub fn inner(&self) -> Address {
        self.0
    }
}

impl FromStr for EvmAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_str(s)
            .map(Self)
            .map_err(|_| AddressError::InvalidFormat(s.to_string()))
    }
}

impl AddressLike for EvmAddress {
    fn is_native(&self) -> bool {
        *self == Self::NATIVE
    }

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    fn to_hex(&self) -> String {
        alloy::hex::encode_prefixed(self.0)
    }
}

/// Lowercase hex, so that string equality with other address types is stable.
impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
