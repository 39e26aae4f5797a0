//! Networking modules for the HTTP gateway transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` issues REST calls and interprets response envelopes, `error`
//! defines the failure taxonomy, `hooks` carries cross-cutting status-code
//! subscriptions, and `types` defines the shared wire schema.

pub mod client;
pub mod error;
pub mod hooks;
pub mod types;
