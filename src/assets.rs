//! Asset loading seams and the HTTP text fetcher.
//!
//! DESIGN
//! ======
//! Image decoding and network access belong to the host. The core only needs
//! to know whether a load succeeded and, if so, the natural size of the image
//! ([`AssetLoader`]), or the markup text behind a URL ([`TextFetcher`]). Both
//! are async traits so hosts and tests can plug in their own implementations;
//! each call settles exactly once.

use std::time::Duration;

use crate::config::FetchTimeouts;
use crate::object::Size;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The payload could not be decoded.
    #[error("decode failed: {0}")]
    Decode(String),
}

impl FetchError {
    /// Transport failures and 429/5xx statuses may succeed on retry.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status(429 | 500..=599))
    }
}

// =============================================================================
// TRAITS
// =============================================================================

/// Loads an image and reports its natural size.
#[async_trait::async_trait]
pub trait AssetLoader: Send + Sync {
    /// Load the image behind `url` (remote URI or data-URI).
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the image cannot be fetched or decoded.
    async fn load(&self, url: &str) -> Result<Size, FetchError>;
}

/// Fetches the text body behind a URL.
#[async_trait::async_trait]
pub trait TextFetcher: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the request fails or the status is not 2xx.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

// =============================================================================
// HTTP
// =============================================================================

/// [`TextFetcher`] over HTTP(S).
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the given timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] if the HTTP client cannot be built.
    pub fn new(timeouts: FetchTimeouts) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait::async_trait]
impl TextFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(FetchError::Status(status));
        }

        response.text().await.map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
#[path = "assets_test.rs"]
mod tests;
