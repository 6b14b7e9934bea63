//! Shared plumbing for requests against the log service.

use gloo_net::http::RequestBuilder;

use crate::shared::config;

/// Failure taxonomy for calls against the log service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Missing startup configuration; no request was attempted
    Config(String),
    /// The request never completed (DNS, CORS, aborted fetch, ...)
    Transport(String),
    /// Non-2xx response
    Http(u16),
    /// 404 on an operation where absence is an expected state
    NotFound,
    /// 2xx response whose payload did not decode
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "configuration error: {}", msg),
            ApiError::Transport(msg) => write!(f, "Failed to send request: {}", msg),
            ApiError::Http(status) => write!(f, "HTTP {}", status),
            ApiError::NotFound => write!(f, "not found"),
            ApiError::Decode(msg) => write!(f, "Failed to parse response: {}", msg),
        }
    }
}

/// API base URL; fails with `ApiError::Config` when startup config is absent.
pub fn api_base() -> Result<&'static str, ApiError> {
    config::get()
        .map(|cfg| cfg.base_url.as_str())
        .map_err(|e| ApiError::Config(e.0))
}

/// Attach the standard headers: JSON accept plus the configured API key.
pub fn with_api_headers(builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    let cfg = config::get().map_err(|e| ApiError::Config(e.0))?;
    let builder = builder.header("Accept", "application/json");
    Ok(match &cfg.api_key {
        Some(key) => builder.header("X-API-Key", key),
        None => builder,
    })
}
