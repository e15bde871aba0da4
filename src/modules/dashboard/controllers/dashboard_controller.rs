use std::sync::Arc;

use actix_web::{web, HttpResponse};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;
use crate::core::{AppError, Clock};
use crate::middleware::auth::SellerId;
use crate::modules::dashboard::models::{EarningSeries, SellerDashboard};
use crate::modules::dashboard::services::DashboardService;
use crate::modules::orders::models::Order;
use crate::modules::products::models::Product;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Optional window sizes for the dashboard endpoint
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub days: Option<u32>,
    pub months: Option<u32>,
}

/// Response structure for the seller dashboard
#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub products: Vec<ProductResponse>,
    pub total_revenue: String, // Decimal as string for JSON precision
    pub paid_orders: Vec<OrderResponse>,
    pub pending_orders: Vec<OrderResponse>,
    pub summary: DashboardSummary,
    pub earning_history: SeriesResponse,
    pub monthly_earning_history: SeriesResponse,
    pub generated_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub product_count: usize,
    pub paid_order_count: usize,
    pub pending_order_count: usize,
    /// Whether the seller has any paid or pending order
    pub has_activity: bool,
}

/// Parallel sequences ready for a chart: one entry per bucket
#[derive(Debug, Serialize, Deserialize)]
pub struct SeriesResponse {
    pub labels: Vec<String>,
    pub data: Vec<String>,
    pub orders: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: u64,
    pub name: String,
    pub price: String,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: u64,
    pub product_id: u64,
    pub total_price: String,
    pub is_paid: bool,
    pub paid_at: Option<String>,
    pub created_at: String,
}

fn format_datetime(value: NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

impl From<SellerDashboard> for DashboardResponse {
    fn from(dashboard: SellerDashboard) -> Self {
        let summary = DashboardSummary {
            product_count: dashboard.products.len(),
            paid_order_count: dashboard.paid_orders.len(),
            pending_order_count: dashboard.pending_orders.len(),
            has_activity: dashboard.has_activity(),
        };

        Self {
            products: dashboard
                .products
                .into_iter()
                .map(ProductResponse::from)
                .collect(),
            total_revenue: dashboard.total_revenue.to_string(),
            paid_orders: dashboard
                .paid_orders
                .into_iter()
                .map(OrderResponse::from)
                .collect(),
            pending_orders: dashboard
                .pending_orders
                .into_iter()
                .map(OrderResponse::from)
                .collect(),
            summary,
            earning_history: SeriesResponse::from(dashboard.earning_history),
            monthly_earning_history: SeriesResponse::from(dashboard.monthly_earning_history),
            generated_at: format_datetime(dashboard.generated_at),
        }
    }
}

impl From<EarningSeries> for SeriesResponse {
    fn from(series: EarningSeries) -> Self {
        Self {
            labels: series.labels,
            data: series.data.iter().map(|d| d.to_string()).collect(),
            orders: series.orders,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price.to_string(),
            created_at: format_datetime(product.created_at),
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            product_id: order.product_id,
            total_price: order.total_price.to_string(),
            is_paid: order.is_paid,
            paid_at: order.paid_at.map(format_datetime),
            created_at: format_datetime(order.created_at),
        }
    }
}

/// GET /dashboard
///
/// Totals, order lists and earning series for the authenticated seller.
/// `days` and `months` override the configured window sizes.
pub async fn get_dashboard(
    service: web::Data<Arc<DashboardService>>,
    clock: web::Data<Arc<dyn Clock>>,
    settings: web::Data<DashboardConfig>,
    seller: SellerId,
    query: web::Query<DashboardQuery>,
) -> Result<HttpResponse, AppError> {
    let windows = settings.windows(query.days, query.months)?;

    let dashboard = service
        .generate_dashboard(seller.0, windows, clock.now())
        .await
        .map_err(|e| {
            tracing::error!(seller_id = seller.0, "Failed to generate dashboard: {}", e);
            e
        })?;

    Ok(HttpResponse::Ok().json(DashboardResponse::from(dashboard)))
}

/// Configure dashboard routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(get_dashboard));
}
