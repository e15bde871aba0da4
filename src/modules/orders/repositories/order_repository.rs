use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::orders::models::{EarningBucket, EarningRange, Granularity, Order};

/// Read-only access to a seller's orders
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// All orders for the seller with the given paid flag, newest first
    async fn list_by_creator(&self, creator_id: u64, is_paid: bool) -> Result<Vec<Order>>;

    /// Sum of `total_price` over all paid orders of the seller
    async fn total_paid_revenue(&self, creator_id: u64) -> Result<Decimal>;

    /// Paid-order sums and counts grouped by calendar bucket of the effective
    /// timestamp, restricted to effective timestamps inside `range`.
    ///
    /// Buckets without orders are not returned.
    async fn aggregate_paid_earnings(
        &self,
        creator_id: u64,
        granularity: Granularity,
        range: EarningRange,
    ) -> Result<Vec<EarningBucket>>;
}

pub struct MySqlOrderRepository {
    pool: MySqlPool,
}

impl MySqlOrderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for MySqlOrderRepository {
    async fn list_by_creator(&self, creator_id: u64, is_paid: bool) -> Result<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT CAST(id AS UNSIGNED) AS id,
                   CAST(creator_id AS UNSIGNED) AS creator_id,
                   CAST(product_id AS UNSIGNED) AS product_id,
                   CAST(total_price AS DECIMAL(20, 2)) AS total_price,
                   is_paid, paid_at, created_at
            FROM product_orders
            WHERE creator_id = ? AND is_paid = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(creator_id)
        .bind(is_paid)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    async fn total_paid_revenue(&self, creator_id: u64) -> Result<Decimal> {
        let total: Option<Decimal> = sqlx::query_scalar(
            r#"
            SELECT CAST(SUM(total_price) AS DECIMAL(20, 2))
            FROM product_orders
            WHERE creator_id = ? AND is_paid = TRUE
            "#,
        )
        .bind(creator_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total.unwrap_or(Decimal::ZERO))
    }

    async fn aggregate_paid_earnings(
        &self,
        creator_id: u64,
        granularity: Granularity,
        range: EarningRange,
    ) -> Result<Vec<EarningBucket>> {
        // The same COALESCE expression drives both the filter and the grouping key
        let bucket = granularity.bucket_sql();
        let query = format!(
            r#"
            SELECT {bucket} AS bucket,
                   CAST(SUM(total_price) AS DECIMAL(20, 2)) AS total,
                   CAST(COUNT(*) AS SIGNED) AS orders
            FROM product_orders
            WHERE creator_id = ?
              AND is_paid = TRUE
              AND COALESCE(paid_at, created_at) >= ?
              AND COALESCE(paid_at, created_at) < ?
            GROUP BY {bucket}
            ORDER BY bucket
            "#
        );

        let buckets = sqlx::query_as::<_, EarningBucket>(&query)
            .bind(creator_id)
            .bind(range.start)
            .bind(range.end)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(
            creator_id,
            ?granularity,
            buckets = buckets.len(),
            "Aggregated paid earnings"
        );

        Ok(buckets)
    }
}
