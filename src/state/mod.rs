pub mod balance;
pub mod mining;

pub use balance::BalanceTicker;
pub use mining::{MiningSession, MiningStatus};
