//! Invitation coupon method table.

#[cfg(test)]
#[path = "coupon_test.rs"]
mod coupon_test;

use serde_json::json;

use crate::net::client::{ApiClient, RequestOptions};
use crate::net::error::ApiError;
use crate::net::types::Coupon;

fn occupy_endpoint(code: &str) -> String {
    format!("/coupons/{code}")
}

/// Coupon listing, minting and redemption.
#[derive(Clone, Copy, Debug)]
pub struct CouponApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CouponApi<'a> {
    /// Table over `client`.
    #[must_use]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// The caller's unredeemed coupons.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn index(&self) -> Result<Vec<Coupon>, ApiError> {
        self.client.get("/coupon", RequestOptions::new()).await
    }

    /// Mint `quantity` fresh coupons. Admin only.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn create(&self, quantity: i64) -> Result<Vec<Coupon>, ApiError> {
        self.client
            .post("/coupons", json!({ "quantity": quantity }), RequestOptions::new())
            .await
    }

    /// Redeem a coupon by code, binding it to the caller.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn occupy(&self, code: &str) -> Result<Coupon, ApiError> {
        self.client
            .post(&occupy_endpoint(code), json!({}), RequestOptions::new())
            .await
    }
}
