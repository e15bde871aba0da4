pub mod dashboard_service;
pub mod series_builder;

pub use dashboard_service::DashboardService;
pub use series_builder::SeriesWindow;
