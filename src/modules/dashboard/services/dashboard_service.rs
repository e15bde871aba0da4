use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::core::Result;
use crate::modules::dashboard::models::{DashboardWindows, EarningSeries, SellerDashboard};
use crate::modules::dashboard::services::series_builder::SeriesWindow;
use crate::modules::orders::models::Granularity;
use crate::modules::orders::repositories::OrderRepository;
use crate::modules::products::repositories::ProductRepository;

/// Assembles seller dashboards from the order and product stores
pub struct DashboardService {
    order_repo: Arc<dyn OrderRepository>,
    product_repo: Arc<dyn ProductRepository>,
}

impl DashboardService {
    pub fn new(
        order_repo: Arc<dyn OrderRepository>,
        product_repo: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            order_repo,
            product_repo,
        }
    }

    /// Generate the full dashboard for a seller.
    ///
    /// `now` anchors both earning windows: the daily series ends with the date of
    /// `now`, the monthly series with its month. A seller without orders gets
    /// all-zero series. Store failures are returned as-is.
    pub async fn generate_dashboard(
        &self,
        seller_id: u64,
        windows: DashboardWindows,
        now: NaiveDateTime,
    ) -> Result<SellerDashboard> {
        info!(
            seller_id,
            days = windows.days,
            months = windows.months,
            %now,
            "Generating seller dashboard"
        );

        let products = self.product_repo.list_by_creator(seller_id).await?;
        let total_revenue = self.order_repo.total_paid_revenue(seller_id).await?;
        let paid_orders = self.order_repo.list_by_creator(seller_id, true).await?;
        let pending_orders = self.order_repo.list_by_creator(seller_id, false).await?;

        let earning_history = self.daily_earnings(seller_id, windows.days, now).await?;
        let monthly_earning_history = self
            .monthly_earnings(seller_id, windows.months, now)
            .await?;

        debug!(
            seller_id,
            products = products.len(),
            paid_orders = paid_orders.len(),
            pending_orders = pending_orders.len(),
            %total_revenue,
            "Seller dashboard generated"
        );

        Ok(SellerDashboard {
            seller_id,
            products,
            total_revenue,
            paid_orders,
            pending_orders,
            earning_history,
            monthly_earning_history,
            generated_at: now,
        })
    }

    /// Paid earnings for each of the last `days` days, today included
    pub async fn daily_earnings(
        &self,
        seller_id: u64,
        days: u32,
        now: NaiveDateTime,
    ) -> Result<EarningSeries> {
        self.earnings(seller_id, Granularity::Day, days, now).await
    }

    /// Paid earnings for each of the last `months` months, the current month included
    pub async fn monthly_earnings(
        &self,
        seller_id: u64,
        months: u32,
        now: NaiveDateTime,
    ) -> Result<EarningSeries> {
        self.earnings(seller_id, Granularity::Month, months, now).await
    }

    async fn earnings(
        &self,
        seller_id: u64,
        granularity: Granularity,
        count: u32,
        now: NaiveDateTime,
    ) -> Result<EarningSeries> {
        let window = SeriesWindow::ending_at(granularity, now.date(), count)?;
        let range = window.range()?;

        let rows = self
            .order_repo
            .aggregate_paid_earnings(seller_id, granularity, range)
            .await?;

        debug!(
            seller_id,
            ?granularity,
            buckets = count,
            non_empty = rows.len(),
            "Filling earning series"
        );

        Ok(window.fill(rows))
    }
}

// Service behaviour is exercised against an in-memory store in
// tests/integration/dashboard_service_test.rs
