pub mod earning_series;
pub mod seller_dashboard;

pub use earning_series::{BucketTotals, EarningSeries};
pub use seller_dashboard::{DashboardWindows, SellerDashboard, DEFAULT_DAYS, DEFAULT_MONTHS};
