//! Broadcaster method table.
//!
//! Broadcasters are members allowed to send announcements to the whole
//! group; the server renders them as plain user views.

use serde_json::json;

use crate::net::client::{ApiClient, RequestOptions};
use crate::net::error::ApiError;
use crate::net::types::{Asset, User};

/// Broadcaster management and treasury listing.
#[derive(Clone, Copy, Debug)]
pub struct BroadcasterApi<'a> {
    client: &'a ApiClient,
}

impl<'a> BroadcasterApi<'a> {
    /// Table over `client`.
    #[must_use]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Current broadcasters.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn index(&self) -> Result<Vec<User>, ApiError> {
        self.client.get("/broadcasters", RequestOptions::new()).await
    }

    /// Promote the member with `identity` to broadcaster. Admin only.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn create(&self, identity: i64) -> Result<User, ApiError> {
        self.client
            .post("/broadcasters", json!({ "identity": identity }), RequestOptions::new())
            .await
    }

    /// Treasury assets of the group account.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn assets(&self) -> Result<Vec<Asset>, ApiError> {
        self.client.get("/assets", RequestOptions::new()).await
    }
}
