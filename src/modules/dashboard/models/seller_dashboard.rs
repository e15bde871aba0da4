use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::dashboard::models::EarningSeries;
use crate::modules::orders::models::Order;
use crate::modules::products::models::Product;

pub const DEFAULT_DAYS: u32 = 30;
pub const DEFAULT_MONTHS: u32 = 12;

/// Number of daily and monthly buckets to report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardWindows {
    pub days: u32,
    pub months: u32,
}

impl DashboardWindows {
    /// Both windows must hold at least one bucket
    pub fn new(days: u32, months: u32) -> Result<Self> {
        if days == 0 {
            return Err(AppError::validation("days must be at least 1"));
        }
        if months == 0 {
            return Err(AppError::validation("months must be at least 1"));
        }

        Ok(Self { days, months })
    }

    /// Reject windows larger than the configured maxima
    pub fn ensure_within(&self, max_days: u32, max_months: u32) -> Result<()> {
        if self.days > max_days {
            return Err(AppError::validation(format!(
                "days must not exceed {} (got {})",
                max_days, self.days
            )));
        }
        if self.months > max_months {
            return Err(AppError::validation(format!(
                "months must not exceed {} (got {})",
                max_months, self.months
            )));
        }

        Ok(())
    }
}

impl Default for DashboardWindows {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            months: DEFAULT_MONTHS,
        }
    }
}

/// Everything shown on a seller's dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerDashboard {
    pub seller_id: u64,
    pub products: Vec<Product>,
    /// All-time revenue from paid orders
    pub total_revenue: Decimal,
    pub paid_orders: Vec<Order>,
    pub pending_orders: Vec<Order>,
    /// One bucket per day, ending today
    pub earning_history: EarningSeries,
    /// One bucket per month, ending with the current month
    pub monthly_earning_history: EarningSeries,
    /// Local instant the windows were anchored to
    pub generated_at: NaiveDateTime,
}

impl SellerDashboard {
    pub fn has_activity(&self) -> bool {
        !self.paid_orders.is_empty() || !self.pending_orders.is_empty()
    }
}
