//! Search-based algorithms over the clock mappers.

pub mod split_interval;

pub use split_interval::{split_hold_interval, BucketAllocation};
