use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Revenue and order count accumulated in one bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketTotals {
    pub total: Decimal,
    pub orders: i64,
}

/// Chart-ready series: `labels`, `data` and `orders` always have the same length
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarningSeries {
    pub labels: Vec<String>,
    /// Revenue per bucket
    pub data: Vec<Decimal>,
    /// Paid order count per bucket
    pub orders: Vec<i64>,
}

impl EarningSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            data: Vec::with_capacity(capacity),
            orders: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, label: String, totals: BucketTotals) {
        self.labels.push(label);
        self.data.push(totals.total);
        self.orders.push(totals.orders);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total_revenue(&self) -> Decimal {
        self.data.iter().copied().sum()
    }

    pub fn total_orders(&self) -> i64 {
        self.orders.iter().sum()
    }
}
