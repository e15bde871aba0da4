use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::core::AppError;

/// Header set by the trusted gateway after it has authenticated the seller
pub const SELLER_ID_HEADER: &str = "X-Seller-Id";

/// Identifier of the authenticated seller making the request.
///
/// Authentication itself happens upstream. An identity middleware may insert a
/// `SellerId` into the request extensions; otherwise the id is read from the
/// `X-Seller-Id` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellerId(pub u64);

impl FromRequest for SellerId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_seller_id(req))
    }
}

fn extract_seller_id(req: &HttpRequest) -> Result<SellerId, AppError> {
    if let Some(seller) = req.extensions().get::<SellerId>() {
        return Ok(*seller);
    }

    let raw = req
        .headers()
        .get(SELLER_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing seller identity"))?;

    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(SellerId(id)),
        _ => Err(AppError::unauthorized(format!("Invalid seller id: '{}'", raw))),
    }
}
