//! Admin property method table.
//!
//! The single writable property toggles whether member messaging is
//! prohibited group-wide.

use serde_json::{Value, json};

use crate::net::client::{ApiClient, RequestOptions};
use crate::net::error::ApiError;

/// Admin-only group property toggles.
#[derive(Clone, Copy, Debug)]
pub struct PropertyApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PropertyApi<'a> {
    /// Table over `client`.
    #[must_use]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Set the prohibited-messaging flag. Admin only; blank response.
    /// Non-admin callers receive a server-declared 403.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn create(&self, value: bool) -> Result<(), ApiError> {
        let _: Option<Value> = self
            .client
            .post("/properties", json!({ "value": value }), RequestOptions::new())
            .await?;
        Ok(())
    }
}
