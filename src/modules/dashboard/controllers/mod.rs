mod dashboard_controller;

pub use dashboard_controller::{
    get_dashboard, DashboardQuery, DashboardResponse, DashboardSummary, OrderResponse,
    ProductResponse, SeriesResponse,
};

// Re-export configure for main.rs
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    dashboard_controller::configure(cfg);
}
