use std::fmt;

use alloy::primitives::U256;

/// High-order part of an address that does not fit into an EVM address.
///
/// Non-EVM addresses are carried through EVM-shaped structures as an
/// `(AddressComplement, EvmAddress)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressComplement(U256);

impl AddressComplement {
    pub const ZERO: AddressComplement = AddressComplement(U256::ZERO);

    pub fn new(value: U256) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for AddressComplement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
