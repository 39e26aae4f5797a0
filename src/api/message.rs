//! Group message method table.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use serde_json::{Value, json};

use crate::net::client::{ApiClient, RequestOptions};
use crate::net::error::ApiError;
use crate::net::types::Message;

fn recall_endpoint(message_id: &str) -> String {
    format!("/messages/{message_id}/recall")
}

/// Listing and recall of recent group messages.
#[derive(Clone, Copy, Debug)]
pub struct MessageApi<'a> {
    client: &'a ApiClient,
}

impl<'a> MessageApi<'a> {
    /// Table over `client`.
    #[must_use]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Recent messages, newest first.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn index(&self) -> Result<Vec<Message>, ApiError> {
        self.client.get("/messages", RequestOptions::new()).await
    }

    /// Recall a distributed message. Admin only; blank response.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn recall(&self, message_id: &str) -> Result<(), ApiError> {
        let _: Option<Value> = self
            .client
            .post(&recall_endpoint(message_id), json!({}), RequestOptions::new())
            .await?;
        Ok(())
    }
}
