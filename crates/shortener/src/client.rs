//! HTTP client for the third-party shortening endpoint.
//!
//! One `GET <base>?s=<url-encoded long URL>` per call, bounded by a timeout. No retry,
//! cache, or deduplication of concurrent identical requests.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{info, instrument, warn};

use crate::config::ShortenerConfig;
use crate::error::ShortenError;
use crate::validation::{is_valid, normalize};

/// Query parameter carrying the long URL.
const LONG_URL_PARAM: &str = "s";

const LOG_PREVIEW_LEN: usize = 200;

/// Shortening endpoint client. Cheap to clone; share one per process.
#[derive(Debug, Clone)]
pub struct ShortenClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ShortenClient {
    /// Creates a client for the given endpoint base and per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &dyn ShortenerConfig) -> Self {
        Self::new(config.base_url(), config.timeout())
    }

    /// Replaces the underlying HTTP client (proxies, custom TLS, tests).
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Shortens `long_url`, returning the trimmed short URL or the reason it failed.
    ///
    /// The input is normalized first; if it is still not a valid URL no request is made.
    /// Any transport failure (timeout, DNS, reset) becomes an error value, never a panic.
    #[instrument(skip(self))]
    pub async fn shorten(&self, long_url: &str) -> Result<String, ShortenError> {
        let normalized = normalize(long_url);
        if !is_valid(&normalized) {
            return Err(ShortenError::InvalidInput(long_url.trim().to_string()));
        }

        info!(url = %normalized, "step: shorten request");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[(LONG_URL_PARAM, normalized.as_str())])
            .timeout(self.timeout)
            .send()
            .await?;

        // Only 200 carries a short URL; 201/202/204 and friends are failures too.
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ShortenError::Status(status));
        }

        let body = response.text().await?;
        let short_url = body.trim();
        if !is_valid(short_url) {
            return Err(ShortenError::UnexpectedResponse(
                short_url.chars().take(LOG_PREVIEW_LEN).collect(),
            ));
        }

        info!(url = %normalized, short_url = %short_url, "step: shorten done");
        Ok(short_url.to_string())
    }

    /// Like [`shorten`](Self::shorten) but collapses every failure to `None` after logging it.
    pub async fn try_shorten(&self, long_url: &str) -> Option<String> {
        match self.shorten(long_url).await {
            Ok(short_url) => Some(short_url),
            Err(e) => {
                warn!(url = %long_url, kind = ?e.kind(), reason = %e, "Shortening failed");
                None
            }
        }
    }
}
