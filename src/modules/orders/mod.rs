pub mod models;
pub mod repositories;

pub use models::{EarningBucket, EarningRange, Granularity, Order};
pub use repositories::{MySqlOrderRepository, OrderRepository};
