use std::fmt;
use std::str::FromStr;

use alloy::primitives::B256;
use sha2::{Digest, Sha256};

/// Commitment to the secret that unlocks an escrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashLock(B256);

impl HashLock {
    /// SHA-256 of the secret as the escrow contract computes it on withdraw.
    pub fn hash_secret(secret: &str) -> B256 {
        B256::from_slice(&Sha256::digest(secret.as_bytes()))
    }

    pub fn for_single_fill(secret: &str) -> Self {
        Self(Self::hash_secret(secret))
    }

    pub fn from_hash(hash: B256) -> Self {
        Self(hash)
    }

    pub fn inner(&self) -> B256 {
        self.0
    }
}

impl FromStr for HashLock {
    type Err = alloy::hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        B256::from_str(s).map(Self)
    }
}

impl fmt::Display for HashLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_fill_hash_lock() {
        let hash_lock = HashLock::for_single_fill("0x1234");
        let rendered = hash_lock.to_string();

        assert_eq!(rendered.len(), 66);
        assert_eq!(hash_lock, HashLock::for_single_fill("0x1234"));
        assert_ne!(hash_lock, HashLock::for_single_fill("0x1235"));
        assert_eq!(HashLock::from_str(&rendered).unwrap(), hash_lock);
    }

    #[test]
    fn test_known_digest() {
        // sha256("abc")
        let hash_lock = HashLock::for_single_fill("abc");
        assert_eq!(
            hash_lock.to_string(),
            "0xba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
