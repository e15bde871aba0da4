//! Seller dashboard service
//!
//! Aggregates a seller's orders into revenue totals and gap-filled daily and
//! monthly earning series for the admin panel.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::dashboard;
pub use modules::orders;
pub use modules::products;
