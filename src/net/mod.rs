//! Commerce platform HTTP surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cart and predictive-search endpoints are owned by the commerce
//! platform; this layer consumes them and must preserve their paths, query
//! parameters, and JSON field names byte-for-byte. Calls are fire-and-forget
//! from the UI's perspective: no retries, no cancellation. A failed call is
//! surfaced as an [`ApiError`] for the caller to turn into a transient
//! toast, and visible state simply stays stale until the next success.

pub mod cart;
pub mod search;

use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Error raised by commerce endpoint calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to build http client: {0}")]
    ClientBuild(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("commerce endpoint {endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: u16,
        body: String,
    },
    #[error("failed to parse response from {endpoint}: {source}")]
    Parse {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// HTTP client over the platform's cart and search endpoints.
pub struct CommerceClient {
    http: reqwest::Client,
    base_url: String,
}

impl CommerceClient {
    /// Build a client for the shop at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}
