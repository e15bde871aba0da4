use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product order placed with a seller (`product_orders` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: u64,
    /// Seller who owns the ordered product
    pub creator_id: u64,
    pub product_id: u64,
    pub total_price: Decimal,
    pub is_paid: bool,
    pub paid_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl Order {
    /// Instant the order counts towards earnings: `paid_at`, falling back to `created_at`
    pub fn effective_at(&self) -> NaiveDateTime {
        self.paid_at.unwrap_or(self.created_at)
    }

    /// Calendar date of [`Order::effective_at`]
    pub fn effective_date(&self) -> NaiveDate {
        self.effective_at().date()
    }
}
