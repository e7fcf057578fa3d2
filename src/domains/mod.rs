//! Order collaborators: the hash-lock, the time-lock schedule and the auction.
//!
//! These carry just enough behaviour for an order to be built, hashed and
//! serialized.

mod auction;
mod hash_lock;
mod time_locks;

pub use auction::{AuctionCalculator, AuctionDetails, FlatAuctionCalculator};
pub use hash_lock::HashLock;
pub use time_locks::TimeLocks;
