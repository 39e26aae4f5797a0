//! Thin method tables, one module per server resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every table builds a verb/path/body triple and delegates to
//! [`ApiClient`](crate::ApiClient); no table issues requests itself or
//! holds state beyond its borrowed collaborators. [`Gateway`] bundles the
//! client and the session store and hands out the tables.

pub mod account;
pub mod broadcaster;
pub mod coupon;
pub mod message;
pub mod packet;
pub mod property;
pub mod website;

use std::sync::Arc;

use crate::config::Config;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::hooks::Hooks;
use crate::session::SessionStore;

pub use account::AccountApi;
pub use broadcaster::BroadcasterApi;
pub use coupon::CouponApi;
pub use message::MessageApi;
pub use packet::PacketApi;
pub use property::PropertyApi;
pub use website::WebsiteApi;

/// Entry point bundling the gateway client with the session store.
///
/// The session store is wired in as the client's token source, so every
/// table issued from here authenticates with the persisted session unless
/// a call overrides the token explicitly.
#[derive(Clone, Debug)]
pub struct Gateway {
    client: ApiClient,
    sessions: SessionStore,
}

impl Gateway {
    /// Build the client from `config`, wire `sessions` as its token
    /// source, and take ownership of the hook registry.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::new`].
    pub fn new(config: &Config, hooks: Hooks, sessions: SessionStore) -> Result<Self, ApiError> {
        let client =
            ApiClient::new(config, hooks)?.with_token_source(Arc::new(sessions.clone()));
        Ok(Self { client, sessions })
    }

    /// The underlying gateway client.
    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// The durable session store.
    #[must_use]
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Account and membership operations.
    #[must_use]
    pub fn account(&self) -> AccountApi<'_> {
        AccountApi::new(&self.client, &self.sessions)
    }

    /// Group message listing and recall.
    #[must_use]
    pub fn messages(&self) -> MessageApi<'_> {
        MessageApi::new(&self.client)
    }

    /// Red packet lifecycle operations.
    #[must_use]
    pub fn packets(&self) -> PacketApi<'_> {
        PacketApi::new(&self.client)
    }

    /// Admin property toggles.
    #[must_use]
    pub fn properties(&self) -> PropertyApi<'_> {
        PropertyApi::new(&self.client)
    }

    /// Invitation coupon operations.
    #[must_use]
    pub fn coupons(&self) -> CouponApi<'_> {
        CouponApi::new(&self.client)
    }

    /// Broadcaster management.
    #[must_use]
    pub fn broadcasters(&self) -> BroadcasterApi<'_> {
        BroadcasterApi::new(&self.client)
    }

    /// Site metadata and statistics.
    #[must_use]
    pub fn website(&self) -> WebsiteApi<'_> {
        WebsiteApi::new(&self.client)
    }
}
