//! Red packet method table.

#[cfg(test)]
#[path = "packet_test.rs"]
mod packet_test;

use serde::Serialize;
use serde_json::json;

use crate::net::client::{ApiClient, RequestOptions};
use crate::net::error::ApiError;
use crate::net::types::{Packet, Preparation};

fn packet_endpoint(packet_id: &str, action: &str) -> String {
    format!("/packets/{packet_id}{action}")
}

/// Parameters for creating a red packet.
#[derive(Clone, Debug, Serialize)]
pub struct PacketParams {
    /// Asset to fund the packet from.
    pub asset_id: String,
    /// Total decimal amount string.
    pub amount: String,
    /// Number of shares to split the amount into.
    pub total_count: i64,
    /// Greeting shown to claimants.
    pub greeting: String,
}

/// Red packet lifecycle: prepare, create, show, claim.
#[derive(Clone, Copy, Debug)]
pub struct PacketApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PacketApi<'a> {
    /// Table over `client`.
    #[must_use]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Group size and spendable balances for the creation form.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn prepare(&self) -> Result<Preparation, ApiError> {
        self.client.get("/packets/prepare", RequestOptions::new()).await
    }

    /// Create a packet and obtain its payment handle.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn create(&self, params: &PacketParams) -> Result<Packet, ApiError> {
        let body = json!({
            "asset_id": params.asset_id,
            "amount": params.amount,
            "total_count": params.total_count,
            "greeting": params.greeting,
        });
        self.client.post("/packets", body, RequestOptions::new()).await
    }

    /// A packet with its claim progress.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn show(&self, packet_id: &str) -> Result<Packet, ApiError> {
        self.client
            .get(&packet_endpoint(packet_id, ""), RequestOptions::new())
            .await
    }

    /// Claim a share of a packet.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn claim(&self, packet_id: &str) -> Result<Packet, ApiError> {
        self.client
            .post(&packet_endpoint(packet_id, "/claim"), json!({}), RequestOptions::new())
            .await
    }
}
