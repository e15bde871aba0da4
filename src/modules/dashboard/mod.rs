pub mod controllers;
pub mod models;
pub mod services;

pub use models::{DashboardWindows, EarningSeries, SellerDashboard};
pub use services::DashboardService;
