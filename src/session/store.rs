//! Flat key-value persistence and the typed session facade.
//!
//! DESIGN
//! ======
//! The backing store is a flat `String -> String` map written as a JSON
//! file on every mutation, with an in-memory variant for tests. There is
//! no schema versioning. The session trio is written in a single persisted
//! mutation so a crash can never leave a partial session on disk, and a
//! stored session loads only when all three keys are present and valid.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use crate::net::client::TokenSource;
use crate::net::types::Role;

const KEY_TOKEN: &str = "token";
const KEY_USER_ID: &str = "user_id";
const KEY_ROLE: &str = "role";

/// Error raised by store mutations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("storage io error: {0}")]
    Io(#[from] io::Error),
    /// The backing file does not contain a flat JSON string map.
    #[error("storage image is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

struct StoreInner {
    path: Option<PathBuf>,
    map: RwLock<HashMap<String, String>>,
}

/// Durable flat string-to-string store.
///
/// Clones share the same map and backing file.
#[derive(Clone)]
pub struct KvStore {
    inner: Arc<StoreInner>,
}

impl KvStore {
    /// A store with no backing file; contents die with the process.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(StoreInner {
                path: None,
                map: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Open a file-backed store, loading the existing image if present.
    /// An absent file is an empty store, not an error.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] for unreadable files, [`StoreError::Malformed`]
    /// when the file is not a flat JSON string map.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let map = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(error) if error.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(error) => return Err(error.into()),
        };
        Ok(Self {
            inner: Arc::new(StoreInner {
                path: Some(path),
                map: RwLock::new(map),
            }),
        })
    }

    /// Value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let map = self.inner.map.read().unwrap_or_else(PoisonError::into_inner);
        map.get(key).cloned()
    }

    /// Store `value` under `key` and persist.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] when the backing file cannot be written.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Result<(), StoreError> {
        self.set_many(vec![(key.into(), value.into())])
    }

    /// Store every entry and persist once. This is the all-or-nothing
    /// primitive the session trio relies on.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] when the backing file cannot be written.
    pub fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), StoreError> {
        let mut map = self.inner.map.write().unwrap_or_else(PoisonError::into_inner);
        for (key, value) in entries {
            map.insert(key, value);
        }
        self.persist(&map)
    }

    /// Remove `key` and persist. Removing an absent key is a no-op write.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] when the backing file cannot be written.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.inner.map.write().unwrap_or_else(PoisonError::into_inner);
        map.remove(key);
        self.persist(&map)
    }

    /// Drop every key and persist.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] when the backing file cannot be written.
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut map = self.inner.map.write().unwrap_or_else(PoisonError::into_inner);
        map.clear();
        self.persist(&map)
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        let map = self.inner.map.read().unwrap_or_else(PoisonError::into_inner);
        map.len()
    }

    /// Whether the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn persist(&self, map: &HashMap<String, String>) -> Result<(), StoreError> {
        let Some(path) = &self.inner.path else {
            return Ok(());
        };
        let image = serde_json::to_vec(map)?;
        fs::write(path, image)?;
        Ok(())
    }
}

impl std::fmt::Debug for KvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvStore")
            .field("path", &self.inner.path)
            .field("len", &self.len())
            .finish()
    }
}

/// The authenticated caller's durable credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Bearer token for gateway calls.
    pub token: String,
    /// Authenticated user identifier.
    pub user_id: String,
    /// Membership role.
    pub role: Role,
}

/// Typed facade over the session trio.
#[derive(Clone, Debug)]
pub struct SessionStore {
    kv: KvStore,
}

impl SessionStore {
    /// Wrap a backing store.
    #[must_use]
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Persist the full trio in a single mutation.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] when the backing file cannot be written.
    pub fn store(&self, session: &Session) -> Result<(), StoreError> {
        self.kv.set_many(vec![
            (KEY_TOKEN.to_owned(), session.token.clone()),
            (KEY_USER_ID.to_owned(), session.user_id.clone()),
            (KEY_ROLE.to_owned(), session.role.as_str().to_owned()),
        ])
    }

    /// The stored session, only when all three keys are present and the
    /// role parses. A partial trio loads as `None`.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        let token = self.kv.get(KEY_TOKEN)?;
        let user_id = self.kv.get(KEY_USER_ID)?;
        let role = self.kv.get(KEY_ROLE)?.parse::<Role>().ok()?;
        Some(Session {
            token,
            user_id,
            role,
        })
    }

    /// The stored bearer token, if a complete session is present.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.load().map(|session| session.token)
    }

    /// The stored user identifier, if a complete session is present.
    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        self.load().map(|session| session.user_id)
    }

    /// The stored role, if a complete session is present.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.load().map(|session| session.role)
    }

    /// Drop the whole store, feature keys included, matching the logout
    /// behavior of clearing client-side storage wholesale.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] when the backing file cannot be written.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.kv.clear()
    }

    /// The backing store, for feature-specific keys.
    #[must_use]
    pub fn kv(&self) -> &KvStore {
        &self.kv
    }
}

impl TokenSource for SessionStore {
    fn token(&self) -> Option<String> {
        SessionStore::token(self)
    }
}
