//! Gateway client configuration.
//!
//! The transport timeout is a fixed constant per client instance; there is
//! no per-call override and no retry policy to configure.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env;
use std::time::Duration;

/// Connect + read timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Default `Accept-Language` sent with every request.
pub const DEFAULT_LOCALE: &str = "en-cn";

const ENV_API_ROOT: &str = "GROUPGATE_API_ROOT";
const ENV_LOCALE: &str = "GROUPGATE_LOCALE";

const DEFAULT_API_ROOT: &str = "http://127.0.0.1:8080";

/// Configuration for an [`ApiClient`](crate::ApiClient).
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL every path is joined to. A trailing slash is tolerated.
    pub api_root: String,
    /// Value of the default `Accept-Language` header.
    pub locale: String,
    /// Fixed transport timeout.
    pub timeout: Duration,
}

impl Config {
    /// Configuration pointing at `api_root` with default locale and timeout.
    pub fn new(api_root: impl Into<String>) -> Self {
        Self {
            api_root: api_root.into(),
            locale: DEFAULT_LOCALE.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read configuration from `GROUPGATE_API_ROOT` / `GROUPGATE_LOCALE`,
    /// falling back to the local development server and default locale.
    #[must_use]
    pub fn from_env() -> Self {
        let api_root = env::var(ENV_API_ROOT).unwrap_or_else(|_| DEFAULT_API_ROOT.to_owned());
        let locale = env::var(ENV_LOCALE).unwrap_or_else(|_| DEFAULT_LOCALE.to_owned());
        Self {
            api_root,
            locale,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replace the `Accept-Language` value.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Replace the fixed transport timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
