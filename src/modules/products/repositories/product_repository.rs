use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::products::models::Product;

/// Read-only access to a seller's catalogue
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products owned by the seller, newest first
    async fn list_by_creator(&self, creator_id: u64) -> Result<Vec<Product>>;
}

pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn list_by_creator(&self, creator_id: u64) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT CAST(id AS UNSIGNED) AS id,
                   CAST(creator_id AS UNSIGNED) AS creator_id,
                   name,
                   CAST(price AS DECIMAL(20, 2)) AS price,
                   created_at
            FROM products
            WHERE creator_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(creator_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}
