pub mod bids;
pub mod contracts;
