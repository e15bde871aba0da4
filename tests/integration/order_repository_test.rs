//! Integration tests for the MySQL repositories
//!
//! Runs the SQL behind `MySqlOrderRepository` and `MySqlProductRepository`
//! against a real database. Requires TEST_DATABASE_URL (or DATABASE_URL):
//!
//!   cargo test --test order_repository_test -- --ignored

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use rust_decimal_macros::dec;

use helpers::*;
use seller_dashboard::dashboard::DashboardService;
use seller_dashboard::orders::{
    EarningRange, Granularity, MySqlOrderRepository, OrderRepository,
};
use seller_dashboard::products::{MySqlProductRepository, ProductRepository};

fn mysql_service(pool: &sqlx::MySqlPool) -> DashboardService {
    let orders: Arc<dyn OrderRepository> = Arc::new(MySqlOrderRepository::new(pool.clone()));
    let products: Arc<dyn ProductRepository> = Arc::new(MySqlProductRepository::new(pool.clone()));
    DashboardService::new(orders, products)
}

/// Daily example: D=3, today 2024-01-10, one unpaid order today
#[tokio::test]
#[ignore = "Requires test database configuration"]
async fn test_daily_series_example_from_mysql() {
    let pool = create_test_pool().await;
    let seller = unique_seller_id();

    seed_order(&pool, seller, dec!(100), true, Some(noon(2024, 1, 9)), noon(2024, 1, 9)).await;
    seed_order(&pool, seller, dec!(50), true, Some(noon(2024, 1, 8)), noon(2024, 1, 8)).await;
    seed_order(&pool, seller, dec!(999), false, None, noon(2024, 1, 10)).await;

    let series = mysql_service(&pool)
        .daily_earnings(seller, 3, at(2024, 1, 10, 15, 0, 0))
        .await
        .unwrap();

    cleanup_seller(&pool, seller).await;

    assert_eq!(series.labels, vec!["08 Jan", "09 Jan", "10 Jan"]);
    assert_eq!(series.data, vec![dec!(50), dec!(100), dec!(0)]);
    assert_eq!(series.orders, vec![1, 1, 0]);
}

/// Monthly example: M=2, current month 2024-02, paid order without paid_at
#[tokio::test]
#[ignore = "Requires test database configuration"]
async fn test_monthly_series_example_from_mysql() {
    let pool = create_test_pool().await;
    let seller = unique_seller_id();

    seed_order(&pool, seller, dec!(200), true, None, noon(2024, 1, 15)).await;

    let series = mysql_service(&pool)
        .monthly_earnings(seller, 2, noon(2024, 2, 20))
        .await
        .unwrap();

    cleanup_seller(&pool, seller).await;

    assert_eq!(series.labels, vec!["Jan 2024", "Feb 2024"]);
    assert_eq!(series.data, vec![dec!(200), dec!(0)]);
    assert_eq!(series.orders, vec![1, 0]);
}

/// paid_at decides the bucket and the range check, not created_at
#[tokio::test]
#[ignore = "Requires test database configuration"]
async fn test_aggregate_groups_by_paid_at_when_present() {
    let pool = create_test_pool().await;
    let seller = unique_seller_id();
    let repo = MySqlOrderRepository::new(pool.clone());

    // Created before the range but paid inside it
    seed_order(&pool, seller, dec!(40), true, Some(noon(2024, 1, 9)), noon(2023, 12, 1)).await;
    // Created inside the range but paid after it
    seed_order(&pool, seller, dec!(70), true, Some(noon(2024, 1, 11)), noon(2024, 1, 9)).await;

    let range = EarningRange::new(at(2024, 1, 8, 0, 0, 0), at(2024, 1, 11, 0, 0, 0));
    let rows = repo
        .aggregate_paid_earnings(seller, Granularity::Day, range)
        .await
        .unwrap();

    cleanup_seller(&pool, seller).await;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].bucket, noon(2024, 1, 9).date());
    assert_eq!(rows[0].total, dec!(40));
    assert_eq!(rows[0].orders, 1);
}

/// The range is half-open: its first instant counts, its end does not
#[tokio::test]
#[ignore = "Requires test database configuration"]
async fn test_aggregate_range_is_half_open() {
    let pool = create_test_pool().await;
    let seller = unique_seller_id();
    let repo = MySqlOrderRepository::new(pool.clone());

    seed_order(&pool, seller, dec!(1), true, Some(at(2024, 1, 8, 0, 0, 0)), noon(2024, 1, 1)).await;
    seed_order(&pool, seller, dec!(2), true, Some(at(2024, 1, 10, 23, 59, 59)), noon(2024, 1, 1)).await;
    seed_order(&pool, seller, dec!(4), true, Some(at(2024, 1, 11, 0, 0, 0)), noon(2024, 1, 1)).await;
    seed_order(&pool, seller, dec!(8), true, Some(at(2024, 1, 7, 23, 59, 59)), noon(2024, 1, 1)).await;

    let range = EarningRange::new(at(2024, 1, 8, 0, 0, 0), at(2024, 1, 11, 0, 0, 0));
    let rows = repo
        .aggregate_paid_earnings(seller, Granularity::Day, range)
        .await
        .unwrap();

    cleanup_seller(&pool, seller).await;

    let totals: Vec<_> = rows.iter().map(|r| (r.bucket, r.total, r.orders)).collect();
    assert_eq!(
        totals,
        vec![
            (noon(2024, 1, 8).date(), dec!(1), 1),
            (noon(2024, 1, 10).date(), dec!(2), 1),
        ]
    );
}

/// Monthly buckets start on the first of the month
#[tokio::test]
#[ignore = "Requires test database configuration"]
async fn test_aggregate_monthly_buckets_start_on_first() {
    let pool = create_test_pool().await;
    let seller = unique_seller_id();
    let repo = MySqlOrderRepository::new(pool.clone());

    seed_order(&pool, seller, dec!(10.25), true, Some(noon(2024, 1, 3)), noon(2024, 1, 3)).await;
    seed_order(&pool, seller, dec!(5.50), true, Some(noon(2024, 1, 31)), noon(2024, 1, 31)).await;

    let range = EarningRange::new(at(2023, 12, 1, 0, 0, 0), at(2024, 2, 1, 0, 0, 0));
    let rows = repo
        .aggregate_paid_earnings(seller, Granularity::Month, range)
        .await
        .unwrap();

    cleanup_seller(&pool, seller).await;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].bucket, noon(2024, 1, 1).date());
    assert_eq!(rows[0].total, dec!(15.75));
    assert_eq!(rows[0].orders, 2);
}

/// Order and product rows decode from BIGINT UNSIGNED columns
#[tokio::test]
#[ignore = "Requires test database configuration"]
async fn test_lists_and_revenue_decode_unsigned_ids() {
    let pool = create_test_pool().await;
    let seller = unique_seller_id();
    let orders = MySqlOrderRepository::new(pool.clone());
    let products = MySqlProductRepository::new(pool.clone());

    let older = seed_order(&pool, seller, dec!(30), true, Some(noon(2024, 1, 2)), noon(2024, 1, 2)).await;
    let newer = seed_order(&pool, seller, dec!(20.50), true, None, noon(2024, 1, 5)).await;
    let pending = seed_order(&pool, seller, dec!(999), false, None, noon(2024, 1, 6)).await;
    let product = seed_product(&pool, seller, "Design course", dec!(150)).await;

    let paid = orders.list_by_creator(seller, true).await.unwrap();
    let unpaid = orders.list_by_creator(seller, false).await.unwrap();
    let revenue = orders.total_paid_revenue(seller).await.unwrap();
    let listed = products.list_by_creator(seller).await.unwrap();

    cleanup_seller(&pool, seller).await;

    assert_eq!(paid.iter().map(|o| o.id).collect::<Vec<_>>(), vec![newer, older]);
    assert!(paid.iter().all(|o| o.creator_id == seller && o.is_paid));
    assert_eq!(paid[0].paid_at, None);
    assert_eq!(unpaid.len(), 1);
    assert_eq!(unpaid[0].id, pending);
    assert_eq!(revenue, dec!(50.50));

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, product);
    assert_eq!(listed[0].creator_id, seller);
    assert_eq!(listed[0].price, dec!(150));
}

/// A seller without rows gets zero revenue rather than NULL
#[tokio::test]
#[ignore = "Requires test database configuration"]
async fn test_total_revenue_is_zero_without_orders() {
    let pool = create_test_pool().await;
    let repo = MySqlOrderRepository::new(pool);

    let revenue = repo.total_paid_revenue(unique_seller_id()).await.unwrap();

    assert_eq!(revenue, dec!(0));
}
