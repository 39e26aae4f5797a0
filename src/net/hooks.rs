//! Cross-cutting status-code subscriptions.
//!
//! DESIGN
//! ======
//! The registry is a value owned by the client instance and injected at
//! construction; there is no process-global handler table. Registration is
//! explicit and append-only (no removal operation exists), and handlers
//! for one code run in registration order, at most once per matching
//! error response. Dispatch is fire-and-forget: handlers must not panic.

#[cfg(test)]
#[path = "hooks_test.rs"]
mod hooks_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use super::error::ErrorBody;

type Handler = Box<dyn Fn(&ErrorBody) + Send + Sync>;

/// Ordered per-code subscriber lists for server-declared errors.
///
/// Registration is expected during application initialization, before
/// requests are in flight; the registry is synchronized internally so a
/// late registration cannot corrupt it, but no ordering is promised for
/// registrations racing an in-flight dispatch.
#[derive(Default)]
pub struct Hooks {
    handlers: RwLock<HashMap<i64, Vec<Handler>>>,
}

impl Hooks {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for server errors carrying `code`.
    pub fn on<F>(&self, code: i64, handler: F)
    where
        F: Fn(&ErrorBody) + Send + Sync + 'static,
    {
        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        handlers.entry(code).or_default().push(Box::new(handler));
    }

    /// Invoke every handler registered for `error.code`, in registration
    /// order. Codes with no subscribers are a no-op.
    pub(crate) fn dispatch(&self, error: &ErrorBody) {
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(list) = handlers.get(&error.code) {
            for handler in list {
                handler(error);
            }
        }
    }

    /// Number of handlers currently registered for `code`.
    #[must_use]
    pub fn handler_count(&self, code: i64) -> usize {
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        handlers.get(&code).map_or(0, Vec::len)
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        let mut counts: Vec<(i64, usize)> =
            handlers.iter().map(|(code, list)| (*code, list.len())).collect();
        counts.sort_unstable();
        f.debug_struct("Hooks").field("handlers", &counts).finish()
    }
}
