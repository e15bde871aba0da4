pub mod dashboard;
pub mod health;
pub mod orders;
pub mod products;
