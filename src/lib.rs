//! API gateway client for the group chat + red packet companion service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `net` owns the HTTP transport, response-envelope interpretation and the
//! status-code hook registry; `session` owns durable client-side session
//! state; `api` exposes one thin method table per server resource. All
//! resource modules build a verb/path/body triple and delegate to
//! [`ApiClient`], which is the only place requests are issued from.

pub mod api;
pub mod config;
pub mod net;
pub mod session;

pub use config::Config;
pub use net::client::{ApiClient, RawResponse, RequestOptions, TokenSource};
pub use net::error::{ApiError, ErrorBody};
pub use net::hooks::Hooks;
pub use net::types::{
    Account, Asset, Coupon, Envelope, Message, Packet, Participant, Preparation, Role, Statistic,
    User,
};
pub use session::{KvStore, Session, SessionStore, StoreError};
