//! The gateway client: a uniform call surface over the HTTP transport.
//!
//! BEHAVIOR
//! ========
//! Every call joins a relative path to the configured base URL, merges the
//! fixed header set with per-call headers, attaches `Authorization:
//! Bearer <token>` when a token is available (per-call override first,
//! then the injected [`TokenSource`]), and interprets the response
//! envelope: the `data` payload resolves the call, a server-declared
//! `error` object is dispatched to the hook registry and rejects it.
//! When no token is available the header is omitted entirely. No retries
//! are performed; every failure surfaces to the caller.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::fmt;
use std::sync::Arc;

use reqwest::header::{
    ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue,
};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ApiError, ErrorBody};
use super::hooks::Hooks;
use super::types::Envelope;
use crate::config::Config;

/// Collaborator that supplies the fallback bearer token.
///
/// Session lookup deliberately lives outside the transport; the client
/// never reads ambient storage itself. [`SessionStore`](crate::SessionStore)
/// is the standard implementation.
pub trait TokenSource: Send + Sync {
    /// The current token, if any.
    fn token(&self) -> Option<String>;
}

/// Per-call options: extra headers and a bearer-token override.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
    token: Option<String>,
}

impl RequestOptions {
    /// Empty options: default headers, token from the client's source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header for this call only. Per-call headers win over the
    /// client's defaults.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Use `token` for this call instead of the client's token source.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Transport-level view of a response, for callers opting out of envelope
/// interpretation.
#[derive(Clone, Debug)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Body parsed leniently as JSON; `Value::Null` when empty or not JSON.
    pub body: Value,
}

/// HTTP gateway client.
///
/// Cheap to clone: clones share the transport, the hook registry and the
/// token source. Stateless across calls apart from those two.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    hooks: Arc<Hooks>,
    tokens: Option<Arc<dyn TokenSource>>,
}

impl ApiClient {
    /// Build a client from `config`, taking ownership of the hook
    /// registry.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidBaseUrl`] unless the base URL is absolute
    /// http(s); [`ApiError::InvalidHeader`] for an unrepresentable locale;
    /// [`ApiError::Build`] if the transport cannot be constructed.
    pub fn new(config: &Config, hooks: Hooks) -> Result<Self, ApiError> {
        if !config.api_root.starts_with("http://") && !config.api_root.starts_with("https://") {
            return Err(ApiError::InvalidBaseUrl(config.api_root.clone()));
        }

        let mut headers = HeaderMap::new();
        let locale = HeaderValue::from_str(&config.locale).map_err(|_| ApiError::InvalidHeader {
            name: "Accept-Language".to_owned(),
        })?;
        headers.insert(ACCEPT_LANGUAGE, locale);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(ApiError::Build)?;

        Ok(Self {
            http,
            base_url: config.api_root.trim_end_matches('/').to_owned(),
            hooks: Arc::new(hooks),
            tokens: None,
        })
    }

    /// Attach the collaborator consulted when a call carries no token
    /// override.
    #[must_use]
    pub fn with_token_source(mut self, source: Arc<dyn TokenSource>) -> Self {
        self.tokens = Some(source);
        self
    }

    /// The hook registry owned by this client.
    #[must_use]
    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    /// Register `handler` for server errors carrying `code`.
    pub fn on<F>(&self, code: i64, handler: F)
    where
        F: Fn(&ErrorBody) + Send + Sync + 'static,
    {
        self.hooks.on(code, handler);
    }

    /// GET `path` and unwrap the payload into `T`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(Method::GET, path, None, options).await
    }

    /// POST `body` to `path` and unwrap the payload into `T`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, Some(body), options).await
    }

    /// PUT `body` to `path` and unwrap the payload into `T`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, Some(body), options).await
    }

    /// DELETE `path` and unwrap the payload into `T`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, None, options).await
    }

    /// Issue a request and interpret the response envelope.
    ///
    /// An `Option<T>` target accepts a blank (`{}`) response as `None`;
    /// any other target treats an absent payload as invalid data.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] when no response is received;
    /// [`ApiError::EmptyResponse`] for a bodyless response;
    /// [`ApiError::InvalidData`] for an unparseable body or payload;
    /// [`ApiError::Server`] for a server-declared error, after the hook
    /// registry has been notified.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let (status, bytes) = self.send(method, path, body, options).await?;
        if bytes.is_empty() {
            return Err(ApiError::EmptyResponse {
                status: status.as_u16(),
            });
        }

        let envelope: Envelope =
            serde_json::from_slice(&bytes).map_err(|error| ApiError::InvalidData {
                status: status.as_u16(),
                detail: error.to_string(),
            })?;

        if let Some(error) = envelope.error {
            tracing::warn!(code = error.code, status = error.status, "server declared error");
            self.hooks.dispatch(&error);
            return Err(ApiError::Server(error));
        }

        let data = envelope.data.unwrap_or(Value::Null);
        serde_json::from_value(data).map_err(|error| ApiError::InvalidData {
            status: status.as_u16(),
            detail: error.to_string(),
        })
    }

    /// Issue a request without envelope interpretation: no payload unwrap,
    /// no error extraction, no hook dispatch.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] when no response is received; header and
    /// construction kinds as for [`ApiClient::request`].
    pub async fn request_raw(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<RawResponse, ApiError> {
        let (status, bytes) = self.send(method, path, body, options).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<(StatusCode, Vec<u8>), ApiError> {
        let url = self.endpoint(path);
        tracing::debug!(%method, %url, "dispatching gateway request");

        let mut request = self.http.request(method, &url);
        if let Some(token) = self.bearer_token(&options) {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                ApiError::InvalidHeader {
                    name: "Authorization".to_owned(),
                }
            })?;
            request = request.header(AUTHORIZATION, value);
        }
        for (name, value) in &options.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|_| ApiError::InvalidHeader {
                    name: name.clone(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| ApiError::InvalidHeader {
                    name: name.clone(),
                })?;
            request = request.header(header_name, header_value);
        }
        if let Some(json) = body {
            request = request.json(&json);
        }

        let response = request.send().await.map_err(ApiError::Network)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ApiError::Network)?;
        Ok((status, bytes.to_vec()))
    }

    /// Resolve the bearer token: per-call override first, then the
    /// injected source. `None` means the header is omitted.
    fn bearer_token(&self, options: &RequestOptions) -> Option<String> {
        options
            .token
            .clone()
            .or_else(|| self.tokens.as_ref().and_then(|source| source.token()))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("hooks", &self.hooks)
            .field("has_token_source", &self.tokens.is_some())
            .finish()
    }
}
