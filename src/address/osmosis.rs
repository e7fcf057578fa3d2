use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use bigdecimal::num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{AddressComplement, AddressError, AddressLike, EvmAddress};

const NATIVE_DENOM: &str = "uosmo";
const BECH32_PREFIX: &str = "osmo1";

/// An Osmosis account address or the native `uosmo` denom.
///
/// Only the prefix is checked; the bech32 checksum is left to the chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct OsmosisAddress(Cow<'static, str>);

impl OsmosisAddress {
    /// Native gas token.
    pub const NATIVE: OsmosisAddress = OsmosisAddress(Cow::Borrowed(NATIVE_DENOM));
    /// Canonical burn address.
    pub const ZERO: OsmosisAddress = OsmosisAddress(Cow::Borrowed(
        "osmo1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq0eht8c",
    ));

    pub fn from_string(address: &str) -> Result<Self, AddressError> {
        if !Self::is_valid_format(address) {
            return Err(AddressError::InvalidFormat(address.to_string()));
        }
        Ok(Self(Cow::Owned(address.to_string())))
    }

    /// Accepts only JSON strings; anything else is `InvalidInput`.
    pub fn from_unknown(address: &Value) -> Result<Self, AddressError> {
        match address {
            Value::String(s) => Self::from_string(s),
            other => Err(AddressError::InvalidInput(other.to_string())),
        }
    }

    fn is_valid_format(address: &str) -> bool {
        address == NATIVE_DENOM || address.starts_with(BECH32_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn native_as_zero(&self) -> OsmosisAddress {
        if self.is_native() {
            return Self::ZERO;
        }
        self.clone()
    }

    pub fn zero_as_native(&self) -> OsmosisAddress {
        if self.is_zero() {
            return Self::NATIVE;
        }
        self.clone()
    }

    pub fn to_buffer(&self) -> Vec<u8> {
        self.0.as_bytes().to_vec()
    }

    /// Big-endian integer of the UTF-8 bytes. Not a public key encoding.
    pub fn to_bigint(&self) -> BigUint {
        BigUint::from_bytes_be(self.0.as_bytes())
    }

    pub fn equal(&self, other: &impl AddressLike) -> bool {
        self.as_str() == other.to_string()
    }

    // TODO: decompose the bech32 payload once escrows on EVM chains need to
    // address Osmosis accounts.
    pub fn split_to_parts(&self) -> (AddressComplement, EvmAddress) {
        (AddressComplement::ZERO, EvmAddress::ZERO)
    }
}

impl AddressLike for OsmosisAddress {
    fn is_native(&self) -> bool {
        self.as_str() == NATIVE_DENOM
    }

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0.as_bytes()))
    }
}

impl FromStr for OsmosisAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<String> for OsmosisAddress {
    type Error = AddressError;

    fn try_from(address: String) -> Result<Self, Self::Error> {
        if !Self::is_valid_format(&address) {
            return Err(AddressError::InvalidFormat(address));
        }
        Ok(Self(Cow::Owned(address)))
    }
}

impl From<OsmosisAddress> for String {
    fn from(address: OsmosisAddress) -> Self {
        address.0.into_owned()
    }
}

impl fmt::Display for OsmosisAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_create_osmosis_address() {
        let address = OsmosisAddress::from_string("osmo1abc123def456").unwrap();
        assert_eq!(address.to_string(), "osmo1abc123def456");
        assert!(!address.is_native());
        assert!(!address.is_zero());
    }

    #[test]
    fn test_native_token() {
        let native = OsmosisAddress::NATIVE;
        assert_eq!(native.to_string(), "uosmo");
        assert!(native.is_native());
        assert!(!native.is_zero());
        assert!(OsmosisAddress::ZERO.is_zero());
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(
            OsmosisAddress::from_string("cosmos1abc"),
            Err(AddressError::InvalidFormat("cosmos1abc".to_string()))
        );
        assert!(OsmosisAddress::from_string("").is_err());
        assert!(OsmosisAddress::from_string("UOSMO").is_err());
    }

    #[test]
    fn test_from_unknown() {
        let address = OsmosisAddress::from_unknown(&json!("osmo1maker123")).unwrap();
        assert_eq!(address.as_str(), "osmo1maker123");

        assert!(matches!(
            OsmosisAddress::from_unknown(&json!(42)),
            Err(AddressError::InvalidInput(_))
        ));
        assert!(matches!(
            OsmosisAddress::from_unknown(&json!(null)),
            Err(AddressError::InvalidInput(_))
        ));
        assert!(matches!(
            OsmosisAddress::from_unknown(&json!("0xdead")),
            Err(AddressError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_sentinel_substitution() {
        let native = OsmosisAddress::NATIVE;
        assert_eq!(native.native_as_zero(), OsmosisAddress::ZERO);
        assert_eq!(native.native_as_zero().zero_as_native(), native);

        let zero = OsmosisAddress::ZERO;
        assert_eq!(zero.zero_as_native(), OsmosisAddress::NATIVE);
    }

    #[test]
    fn test_byte_encodings() {
        let address = OsmosisAddress::NATIVE;
        assert_eq!(address.to_buffer(), b"uosmo".to_vec());
        assert_eq!(address.to_hex(), "0x756f736d6f");
        assert_eq!(address.to_bigint(), BigUint::from(0x756f736d6fu64));
    }

    #[test]
    fn test_equal_across_address_types() {
        let address = OsmosisAddress::from_string("osmo1abc").unwrap();
        assert!(address.equal(&OsmosisAddress::from_string("osmo1abc").unwrap()));
        assert!(!address.equal(&OsmosisAddress::NATIVE));
        assert!(!address.equal(&EvmAddress::ZERO));
    }

    #[test]
    fn test_split_to_parts_is_zero() {
        let (complement, evm) = OsmosisAddress::from_string("osmo1abc").unwrap().split_to_parts();
        assert!(complement.is_zero());
        assert!(evm.is_zero());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let address = OsmosisAddress::from_string("osmo1receiver456").unwrap();
        assert_eq!(serde_json::to_value(&address).unwrap(), json!("osmo1receiver456"));

        let parsed: OsmosisAddress = serde_json::from_value(json!("uosmo")).unwrap();
        assert!(parsed.is_native());
        assert!(serde_json::from_value::<OsmosisAddress>(json!("juno1abc")).is_err());
    }

    proptest! {
        #[test]
        fn prop_prefixed_strings_round_trip(suffix in "[a-z0-9]{0,58}") {
            let input = format!("osmo1{suffix}");
            let address = OsmosisAddress::from_string(&input).unwrap();
            prop_assert_eq!(address.to_string(), input);
        }

        #[test]
        fn prop_other_strings_are_rejected(input in "\\PC*") {
            prop_assume!(input != "uosmo" && !input.starts_with("osmo1"));
            prop_assert_eq!(
                OsmosisAddress::from_string(&input),
                Err(AddressError::InvalidFormat(input.clone()))
            );
        }

        #[test]
        fn prop_substitution_is_noop_for_regular_addresses(suffix in "[a-z0-9]{1,38}") {
            let address = OsmosisAddress::from_string(&format!("osmo1{suffix}")).unwrap();
            prop_assume!(!address.is_zero());
            prop_assert_eq!(address.native_as_zero(), address.clone());
            prop_assert_eq!(address.zero_as_native(), address.clone());
        }
    }
}
