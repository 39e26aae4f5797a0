use std::env;
use std::path::PathBuf;

use super::*;

fn temp_store_path() -> PathBuf {
    env::temp_dir().join(format!("groupgate-store-{}.json", uuid::Uuid::new_v4()))
}

fn member_session() -> Session {
    Session {
        token: "tok-abc".to_owned(),
        user_id: "u1".to_owned(),
        role: Role::Member,
    }
}

// =============================================================================
// KvStore
// =============================================================================

#[test]
fn in_memory_store_round_trips_keys() {
    let kv = KvStore::in_memory();
    kv.set("asset_id", "a1").unwrap();
    assert_eq!(kv.get("asset_id").as_deref(), Some("a1"));
    assert_eq!(kv.get("missing"), None);
}

#[test]
fn set_overwrites_existing_value() {
    let kv = KvStore::in_memory();
    kv.set("k", "one").unwrap();
    kv.set("k", "two").unwrap();
    assert_eq!(kv.get("k").as_deref(), Some("two"));
    assert_eq!(kv.len(), 1);
}

#[test]
fn remove_and_clear_drop_keys() {
    let kv = KvStore::in_memory();
    kv.set("a", "1").unwrap();
    kv.set("b", "2").unwrap();
    kv.remove("a").unwrap();
    assert_eq!(kv.get("a"), None);
    kv.clear().unwrap();
    assert!(kv.is_empty());
}

#[test]
fn open_with_absent_file_is_empty() {
    let path = temp_store_path();
    let kv = KvStore::open(&path).unwrap();
    assert!(kv.is_empty());
}

#[test]
fn file_backed_store_survives_reopen() {
    let path = temp_store_path();
    {
        let kv = KvStore::open(&path).unwrap();
        kv.set("token", "tok").unwrap();
        kv.set("user_id", "u1").unwrap();
    }
    let reopened = KvStore::open(&path).unwrap();
    assert_eq!(reopened.get("token").as_deref(), Some("tok"));
    assert_eq!(reopened.len(), 2);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn open_rejects_non_map_image() {
    let path = temp_store_path();
    std::fs::write(&path, b"[1, 2, 3]").unwrap();
    let error = KvStore::open(&path).unwrap_err();
    assert!(matches!(error, StoreError::Malformed(_)));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn clones_share_state() {
    let kv = KvStore::in_memory();
    let clone = kv.clone();
    clone.set("k", "v").unwrap();
    assert_eq!(kv.get("k").as_deref(), Some("v"));
}

// =============================================================================
// SessionStore
// =============================================================================

#[test]
fn store_then_load_round_trips() {
    let sessions = SessionStore::new(KvStore::in_memory());
    sessions.store(&member_session()).unwrap();
    assert_eq!(sessions.load(), Some(member_session()));
    assert_eq!(sessions.token().as_deref(), Some("tok-abc"));
    assert_eq!(sessions.user_id().as_deref(), Some("u1"));
    assert_eq!(sessions.role(), Some(Role::Member));
}

#[test]
fn partial_trio_loads_as_none() {
    let kv = KvStore::in_memory();
    kv.set("token", "tok").unwrap();
    kv.set("user_id", "u1").unwrap();
    let sessions = SessionStore::new(kv);
    assert_eq!(sessions.load(), None);
    assert_eq!(sessions.token(), None);
}

#[test]
fn unknown_role_loads_as_none() {
    let kv = KvStore::in_memory();
    kv.set("token", "tok").unwrap();
    kv.set("user_id", "u1").unwrap();
    kv.set("role", "owner").unwrap();
    let sessions = SessionStore::new(kv);
    assert_eq!(sessions.load(), None);
}

#[test]
fn clear_drops_feature_keys_too() {
    let kv = KvStore::in_memory();
    let sessions = SessionStore::new(kv.clone());
    sessions.store(&member_session()).unwrap();
    kv.set("asset_id", "a1").unwrap();

    sessions.clear().unwrap();
    assert_eq!(sessions.load(), None);
    assert_eq!(kv.get("asset_id"), None);
    assert!(kv.is_empty());
}

#[test]
fn session_persists_across_reopen() {
    let path = temp_store_path();
    {
        let sessions = SessionStore::new(KvStore::open(&path).unwrap());
        sessions
            .store(&Session {
                token: "tok".to_owned(),
                user_id: "u9".to_owned(),
                role: Role::Admin,
            })
            .unwrap();
    }
    let sessions = SessionStore::new(KvStore::open(&path).unwrap());
    assert_eq!(sessions.role(), Some(Role::Admin));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn token_source_view_matches_store() {
    let sessions = SessionStore::new(KvStore::in_memory());
    assert_eq!(TokenSource::token(&sessions), None);
    sessions.store(&member_session()).unwrap();
    assert_eq!(TokenSource::token(&sessions).as_deref(), Some("tok-abc"));
}
