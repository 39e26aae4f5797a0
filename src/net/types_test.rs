use super::*;

fn user_json() -> &'static str {
    r#"{
        "type": "user",
        "user_id": "8c292431-ee33-4ed0-9fa5-0b3f9f8c2d61",
        "identity_number": "37194",
        "full_name": "Ada",
        "avatar_url": "",
        "subscribed_at": "0001-01-01T00:00:00Z",
        "role": "member"
    }"#
}

// =============================================================================
// Envelope
// =============================================================================

#[test]
fn envelope_parses_data_side() {
    let envelope: Envelope = serde_json::from_str(r#"{"data":{"users_count":7}}"#).unwrap();
    assert!(envelope.data.is_some());
    assert!(envelope.error.is_none());
}

#[test]
fn envelope_parses_error_side() {
    let raw = r#"{"error":{"status":202,"code":404,"description":"The endpoint is not found."}}"#;
    let envelope: Envelope = serde_json::from_str(raw).unwrap();
    assert!(envelope.data.is_none());
    assert_eq!(envelope.error.unwrap().code, 404);
}

#[test]
fn envelope_parses_blank_response() {
    let envelope: Envelope = serde_json::from_str("{}").unwrap();
    assert!(envelope.data.is_none());
    assert!(envelope.error.is_none());
    assert!(envelope.prev.is_none());
    assert!(envelope.next.is_none());
}

#[test]
fn envelope_carries_pagination_cursors() {
    let raw = r#"{"data":[],"next":"2024-05-01T00:00:00Z"}"#;
    let envelope: Envelope = serde_json::from_str(raw).unwrap();
    assert_eq!(envelope.next.as_deref(), Some("2024-05-01T00:00:00Z"));
}

// =============================================================================
// Role
// =============================================================================

#[test]
fn role_parses_known_values() {
    assert_eq!("member".parse::<Role>().unwrap(), Role::Member);
    assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
}

#[test]
fn role_rejects_unknown_value() {
    let error = "owner".parse::<Role>().unwrap_err();
    assert_eq!(error, UnknownRole("owner".to_owned()));
}

#[test]
fn role_display_matches_wire_spelling() {
    assert_eq!(Role::Admin.to_string(), "admin");
    assert_eq!(Role::Member.as_str(), "member");
}

// =============================================================================
// Views
// =============================================================================

#[test]
fn user_deserializes_and_reports_unsubscribed() {
    let user: User = serde_json::from_str(user_json()).unwrap();
    assert_eq!(user.kind, "user");
    assert_eq!(user.role, Role::Member);
    assert!(!user.is_subscribed());
}

#[test]
fn subscribed_user_reports_subscribed() {
    let raw = user_json().replace("0001-01-01T00:00:00Z", "2024-01-02T03:04:05Z");
    let user: User = serde_json::from_str(&raw).unwrap();
    assert!(user.is_subscribed());
}

#[test]
fn account_flattens_user_fields() {
    let raw = r#"{
        "type": "user",
        "user_id": "u1",
        "identity_number": "1",
        "full_name": "Ada",
        "avatar_url": "",
        "subscribed_at": "2024-01-02T03:04:05Z",
        "role": "admin",
        "authentication_token": "tok-123",
        "trace_id": "trace-1",
        "state": "paid"
    }"#;
    let account: Account = serde_json::from_str(raw).unwrap();
    assert_eq!(account.user.user_id, "u1");
    assert_eq!(account.user.role, Role::Admin);
    assert_eq!(account.authentication_token, "tok-123");
    assert_eq!(account.state, "paid");
}

#[test]
fn packet_deserializes_with_participants() {
    let raw = r#"{
        "type": "packet",
        "packet_id": "p1",
        "user": {
            "type": "user", "user_id": "u1", "identity_number": "1",
            "full_name": "Ada", "avatar_url": "", "subscribed_at": "0001-01-01T00:00:00Z",
            "role": "member"
        },
        "asset": {
            "type": "asset", "asset_id": "a1", "symbol": "XIN", "name": "Mixin",
            "icon_url": "", "balance": "10", "price_btc": "0.01", "price_usd": "200"
        },
        "amount": "1",
        "greeting": "gl hf",
        "total_count": 10,
        "remaining_count": 9,
        "remaining_amount": "0.9",
        "opened_count": 1,
        "opened_amount": "0.1",
        "state": "PAID",
        "participants": [{
            "type": "participant", "user_id": "u2", "full_name": "Grace",
            "avatar_url": "", "amount": "0.1", "created_at": "2024-01-02T03:04:05Z"
        }]
    }"#;
    let packet: Packet = serde_json::from_str(raw).unwrap();
    assert_eq!(packet.total_count, 10);
    assert_eq!(packet.participants.len(), 1);
    assert_eq!(packet.participants[0].amount, "0.1");
}

#[test]
fn preparation_deserializes_conversation_and_assets() {
    let raw = r#"{
        "conversation": {"participants_count": 42},
        "assets": [{
            "type": "asset", "asset_id": "a1", "symbol": "BTC", "name": "Bitcoin",
            "icon_url": "", "balance": "0.5", "price_btc": "1", "price_usd": "60000"
        }]
    }"#;
    let preparation: Preparation = serde_json::from_str(raw).unwrap();
    assert_eq!(preparation.conversation.participants_count, 42);
    assert_eq!(preparation.assets[0].symbol, "BTC");
}

#[test]
fn statistic_deserializes() {
    let statistic: Statistic =
        serde_json::from_str(r#"{"users_count": 7, "prohibited": true}"#).unwrap();
    assert_eq!(statistic.users_count, 7);
    assert!(statistic.prohibited);
}
