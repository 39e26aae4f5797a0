//! Account and membership method table.
//!
//! `authenticate` is the one table operation with a side effect: a
//! successful exchange persists the session trio so subsequent calls pick
//! the token up through the client's token source.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use serde_json::{Value, json};

use crate::net::client::{ApiClient, RequestOptions};
use crate::net::error::ApiError;
use crate::net::types::{Account, User};
use crate::session::{Session, SessionStore};

fn user_endpoint(user_id: &str, action: &str) -> String {
    format!("/users/{user_id}{action}")
}

fn subscribers_endpoint(offset: &str, query: &str) -> String {
    format!("/subscribers?offset={offset}&q={query}")
}

/// Operations on the caller's account and on other members.
#[derive(Clone, Copy, Debug)]
pub struct AccountApi<'a> {
    client: &'a ApiClient,
    sessions: &'a SessionStore,
}

impl<'a> AccountApi<'a> {
    /// Table over `client`, persisting credentials into `sessions`.
    #[must_use]
    pub fn new(client: &'a ApiClient, sessions: &'a SessionStore) -> Self {
        Self { client, sessions }
    }

    /// Exchange an authorization `code` for an account and persist the
    /// session trio.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`], plus
    /// [`ApiError::Store`] when the credentials cannot be persisted.
    pub async fn authenticate(&self, code: &str) -> Result<Account, ApiError> {
        let account: Account = self
            .client
            .post("/auth", json!({ "code": code }), RequestOptions::new())
            .await?;
        self.sessions.store(&Session {
            token: account.authentication_token.clone(),
            user_id: account.user.user_id.clone(),
            role: account.user.role,
        })?;
        Ok(account)
    }

    /// The caller's own account.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn me(&self) -> Result<Account, ApiError> {
        self.client.get("/me", RequestOptions::new()).await
    }

    /// Update the caller's display name.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn update(&self, full_name: &str) -> Result<Account, ApiError> {
        self.client
            .post("/account", json!({ "full_name": full_name }), RequestOptions::new())
            .await
    }

    /// Subscribe to the group feed.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn subscribe(&self) -> Result<Account, ApiError> {
        self.client
            .post("/subscribe", json!({}), RequestOptions::new())
            .await
    }

    /// Unsubscribe from the group feed.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn unsubscribe(&self) -> Result<Account, ApiError> {
        self.client
            .post("/unsubscribe", json!({}), RequestOptions::new())
            .await
    }

    /// Page through subscribers. `offset` is an RFC 3339 cursor; `query`
    /// filters by identity number or name and may be empty.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn subscribers(&self, offset: &str, query: &str) -> Result<Vec<User>, ApiError> {
        self.client
            .get(&subscribers_endpoint(offset, query), RequestOptions::new())
            .await
    }

    /// A single member by identifier.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn show(&self, user_id: &str) -> Result<User, ApiError> {
        self.client
            .get(&user_endpoint(user_id, ""), RequestOptions::new())
            .await
    }

    /// Remove a member from the group. Admin only; blank response.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn remove(&self, user_id: &str) -> Result<(), ApiError> {
        let _: Option<Value> = self
            .client
            .post(&user_endpoint(user_id, "/remove"), json!({}), RequestOptions::new())
            .await?;
        Ok(())
    }

    /// Block a member permanently. Admin only; blank response.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn block(&self, user_id: &str) -> Result<(), ApiError> {
        let _: Option<Value> = self
            .client
            .post(&user_endpoint(user_id, "/block"), json!({}), RequestOptions::new())
            .await?;
        Ok(())
    }

    /// Create a membership-fee payment order. The returned order and
    /// vendor pay parameters are passed through untyped.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn create_payment_order(
        &self,
        open_id: &str,
        user_id: &str,
    ) -> Result<Value, ApiError> {
        self.client
            .post(
                "/wechat/pay/create",
                json!({ "open_id": open_id, "user_id": user_id }),
                RequestOptions::new(),
            )
            .await
    }

    /// Poll a membership-fee payment order.
    ///
    /// # Errors
    ///
    /// Gateway kinds per [`ApiClient::request`].
    pub async fn check_payment_order(&self, order_id: &str) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/wechat/pay/{order_id}"), RequestOptions::new())
            .await
    }

    /// Drop the persisted session, logging the caller out locally.
    ///
    /// # Errors
    ///
    /// [`ApiError::Store`] when the backing store cannot be written.
    pub fn clear(&self) -> Result<(), ApiError> {
        self.sessions.clear()?;
        Ok(())
    }
}
