use alloy::primitives::U256;

/// Dutch auction window of an order, in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuctionDetails {
    pub start_time: u64,
    pub duration: u64,
    pub initial_rate_bump: u32,
}

impl AuctionDetails {
    pub fn new(start_time: u64, duration: u64, initial_rate_bump: u32) -> Self {
        Self {
            start_time,
            duration,
            initial_rate_bump,
        }
    }

    /// Widened so that `start_time + duration` never wraps or clamps.
    pub fn end_time(&self) -> U256 {
        U256::from(self.start_time) + U256::from(self.duration)
    }
}

pub trait AuctionCalculator {
    fn calc_rate_bump(&self, time: u64) -> u64;
    fn calc_auction_taking_amount(&self, taking_amount: U256, rate_bump: u64) -> U256;
}

/// No price movement over the auction: zero bump, taking amount unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlatAuctionCalculator;

impl AuctionCalculator for FlatAuctionCalculator {
    fn calc_rate_bump(&self, _time: u64) -> u64 {
        0
    }

    fn calc_auction_taking_amount(&self, taking_amount: U256, _rate_bump: u64) -> U256 {
        taking_amount
    }
}
