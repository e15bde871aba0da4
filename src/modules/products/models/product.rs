use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product listed by a seller (`products` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: u64,
    /// Owning seller
    pub creator_id: u64,
    pub name: String,
    pub price: Decimal,
    pub created_at: NaiveDateTime,
}
