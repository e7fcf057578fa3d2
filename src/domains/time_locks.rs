use std::fmt;

use alloy::primitives::U256;

/// Durations (seconds from escrow deployment) gating each escrow stage.
///
/// Packed into one integer, 32 bits per stage, lowest stage first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeLocks {
    pub src_withdrawal: u32,
    pub src_cancellation: u32,
    pub dst_withdrawal: u32,
    pub dst_cancellation: u32,
}

impl TimeLocks {
    pub fn new(
        src_withdrawal: u32,
        src_cancellation: u32,
        dst_withdrawal: u32,
        dst_cancellation: u32,
    ) -> Self {
        Self {
            src_withdrawal,
            src_cancellation,
            dst_withdrawal,
            dst_cancellation,
        }
    }

    pub fn build(&self) -> U256 {
        [
            self.src_withdrawal,
            self.src_cancellation,
            self.dst_withdrawal,
            self.dst_cancellation,
        ]
        .iter()
        .enumerate()
        .fold(U256::ZERO, |packed, (stage, duration)| {
            packed | (U256::from(*duration) << (stage * 32))
        })
    }
}

impl fmt::Display for TimeLocks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing() {
        assert_eq!(TimeLocks::new(1, 0, 0, 0).to_string(), "1");
        assert_eq!(TimeLocks::new(0, 1, 0, 0).to_string(), "4294967296");
        assert_eq!(
            TimeLocks::new(3600, 1800, 900, 300).build(),
            U256::from(3600u64)
                + (U256::from(1800u64) << 32)
                + (U256::from(900u64) << 64)
                + (U256::from(300u64) << 96)
        );
    }
}
