//! Site metadata method table.

use serde_json::Value;

use crate::net::client::{ApiClient, RequestOptions};
use crate::net::error::ApiError;
use crate::net::types::Statistic;

/// Landing-page metadata: member statistics and exported configuration.
#[derive(Clone, Copy, Debug)]
pub struct WebsiteApi<'a> {
    client: &'a ApiClient,
}

impl<'a> WebsiteApi<'a> {
    /// Table over `client`.
    #[must_use]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Member count and the prohibited-messaging flag.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn amount(&self) -> Result<Statistic, ApiError> {
        self.client.get("/amount", RequestOptions::new()).await
    }

    /// Exported site configuration, passed through untyped.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn config(&self) -> Result<Value, ApiError> {
        self.client.get("/config", RequestOptions::new()).await
    }
}
