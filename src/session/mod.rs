//! Durable client-side session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! A flat string-to-string key-value store backs the session trio
//! (`token`, `user_id`, `role`) plus feature-specific keys. The typed
//! [`SessionStore`] facade enforces the all-or-nothing invariant on the
//! trio and supplies the gateway client's fallback bearer token.

mod store;

pub use store::{KvStore, Session, SessionStore, StoreError};
