//! Shared wire schema for the gateway boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's view rendering field-for-field so serde
//! can stay derive-driven. Numeric amounts are decimal strings on the wire
//! and stay strings here; arithmetic on them is a caller concern.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ErrorBody;

/// Sentinel timestamp the server uses for "never subscribed".
pub const NEVER_SUBSCRIBED: &str = "0001-01-01T00:00:00Z";

/// Top-level response envelope. A response is interpreted as exactly one
/// of `data` or `error`, never both.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Envelope {
    /// Payload of a successful response.
    pub data: Option<Value>,
    /// Server-declared error of a failed response.
    pub error: Option<ErrorBody>,
    /// Opaque backward pagination cursor, passed through untouched.
    pub prev: Option<String>,
    /// Opaque forward pagination cursor, passed through untouched.
    pub next: Option<String>,
}

/// Membership role attached to a user and to the persisted session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Ordinary group member.
    Member,
    /// Group administrator; may toggle properties and mint coupons.
    Admin,
}

impl Role {
    /// The wire/storage spelling of this role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "member" => Ok(Self::Member),
            "admin" => Ok(Self::Admin),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// Error parsing a stored or wire role string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

/// A group member as rendered by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Wire discriminator, always `"user"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Unique user identifier (UUID string).
    pub user_id: String,
    /// Numeric identity handle, rendered as a string.
    pub identity_number: String,
    /// Display name.
    pub full_name: String,
    /// Avatar image URL; may be empty.
    pub avatar_url: String,
    /// RFC 3339 subscription timestamp; [`NEVER_SUBSCRIBED`] when unset.
    pub subscribed_at: String,
    /// Membership role.
    pub role: Role,
}

impl User {
    /// Whether this user has ever subscribed to the group feed.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscribed_at != NEVER_SUBSCRIBED
    }
}

/// The authenticated caller's own account, a user plus credentials.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The embedded user view.
    #[serde(flatten)]
    pub user: User,
    /// Bearer token for subsequent requests.
    pub authentication_token: String,
    /// Payment trace identifier for the membership fee flow.
    pub trace_id: String,
    /// Account state, e.g. `"pending"` until the entry fee clears.
    pub state: String,
}

/// A transferable asset with balances and fiat reference prices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Wire discriminator, always `"asset"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Unique asset identifier (UUID string).
    pub asset_id: String,
    /// Ticker symbol, e.g. `"BTC"`.
    pub symbol: String,
    /// Full asset name.
    pub name: String,
    /// Icon image URL.
    pub icon_url: String,
    /// Decimal balance string.
    pub balance: String,
    /// Decimal BTC reference price string.
    pub price_btc: String,
    /// Decimal USD reference price string.
    pub price_usd: String,
}

/// A user who claimed a share of a packet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Wire discriminator, always `"participant"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Claiming user identifier (UUID string).
    pub user_id: String,
    /// Claiming user display name.
    pub full_name: String,
    /// Claiming user avatar URL.
    pub avatar_url: String,
    /// Decimal amount string this participant received.
    pub amount: String,
    /// RFC 3339 claim timestamp.
    pub created_at: String,
}

/// A red packet with its claim progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Packet {
    /// Wire discriminator, always `"packet"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Unique packet identifier (UUID string).
    pub packet_id: String,
    /// Sender.
    pub user: User,
    /// Asset the packet distributes.
    pub asset: Asset,
    /// Total decimal amount string.
    pub amount: String,
    /// Greeting text shown to claimants.
    pub greeting: String,
    /// Number of shares the packet was split into.
    pub total_count: i64,
    /// Shares not yet claimed.
    pub remaining_count: i64,
    /// Decimal amount string not yet claimed.
    pub remaining_amount: String,
    /// Shares already claimed.
    pub opened_count: i64,
    /// Decimal amount string already claimed.
    pub opened_amount: String,
    /// Lifecycle state, e.g. `"INITIAL"`, `"PAID"`, `"EXPIRED"`, `"REFUNDED"`.
    pub state: String,
    /// Claim records, newest first.
    pub participants: Vec<Participant>,
}

/// Conversation headline data for the packet creation form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Number of participants in the group conversation.
    pub participants_count: i64,
}

/// Everything the packet creation form needs: group size and balances.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preparation {
    /// The group conversation headline.
    pub conversation: Conversation,
    /// Assets the caller can fund a packet from.
    pub assets: Vec<Asset>,
}

/// An invitation coupon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    /// Wire discriminator, always `"coupon"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Unique coupon identifier (UUID string).
    pub coupon_id: String,
    /// Redeemable code.
    pub code: String,
    /// Display name of the user the coupon belongs to; may be empty.
    pub full_name: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// A group message as rendered for the recall list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Wire discriminator, always `"message"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Unique message identifier (UUID string).
    pub message_id: String,
    /// Message category, e.g. `"PLAIN_TEXT"`.
    pub category: String,
    /// Base64 message payload.
    pub data: String,
    /// Sender display name; `"NULL"` when the sender is gone.
    pub full_name: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Group-level statistics for the landing view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    /// Number of paid members.
    pub users_count: i64,
    /// Whether member messaging is currently prohibited.
    pub prohibited: bool,
}
