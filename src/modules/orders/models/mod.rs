pub mod earning_bucket;
pub mod order;

pub use earning_bucket::{EarningBucket, EarningRange, Granularity};
pub use order::Order;
