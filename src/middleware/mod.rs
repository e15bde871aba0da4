pub mod auth;
pub mod request_id;

pub use auth::{SellerId, SELLER_ID_HEADER};
pub use request_id::{RequestId, RequestIdValue};
