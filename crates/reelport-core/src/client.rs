//! HTTP client for the managed backend
//!
//! All persistence is delegated to an external managed backend exposing a
//! JSON REST facade over the catalog collection and the site-config
//! singletons. This module wraps `reqwest` with rate limiting and retry
//! with exponential backoff for transient failures; non-transient failures
//! surface immediately without retry.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::error::{ReelportError, Result};

/// Configuration for the backend client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, no trailing slash
    pub base_url: String,
    /// Maximum requests per second (default: 4.0)
    pub requests_per_second: f64,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Maximum retry attempts for transient errors (default: 3)
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9000".to_string(),
            requests_per_second: 4.0,
            timeout_secs: 30,
            max_retries: 3,
        }
    }
}

impl ClientConfig {
    /// Config pointing at a specific backend, other fields defaulted
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// Rate limiter to control request frequency
///
/// Ensures requests are spaced at least `min_interval` apart.
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Arc<Mutex<Instant>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the specified requests per second
    pub fn new(requests_per_second: f64) -> Self {
        let min_interval = Duration::from_secs_f64(1.0 / requests_per_second);
        Self {
            min_interval,
            last_request: Arc::new(Mutex::new(Instant::now() - min_interval)),
        }
    }

    /// Acquire permission to make a request
    ///
    /// If called before the minimum interval has passed since the last
    /// request, sleeps until the interval has elapsed.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();

        if elapsed < self.min_interval {
            let wait_time = self.min_interval - elapsed;
            sleep(wait_time).await;
        }

        *last = Instant::now();
    }

    /// Get the minimum interval between requests
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

/// JSON client for the managed backend with rate limiting and retries
///
/// Status mapping: 404 → `NotFound`, 429 → `RateLimited` (retryable),
/// 401/403 → `Forbidden`, 5xx → retryable `Backend`.
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
    rate_limiter: RateLimiter,
    max_retries: u32,
}

impl BackendClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ReelportError::Backend)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            rate_limiter: RateLimiter::new(config.requests_per_second),
            max_retries: config.max_retries,
        })
    }

    /// GET a JSON document from a backend path
    ///
    /// # Errors
    /// - `NotFound` - backend returned 404
    /// - `RateLimited` - 429 after all retries exhausted
    /// - `Backend` - network failures or 5xx after all retries
    /// - `Decode` - response body is not the expected shape
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self
            .execute_with_retry(|| self.client.get(self.url(path)))
            .await?;
        serde_json::from_str(&body).map_err(|e| ReelportError::Decode(e.to_string()))
    }

    /// POST a JSON document, returning the decoded response body
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T> {
        let body = self
            .execute_with_retry(|| self.client.post(self.url(path)).json(payload))
            .await?;
        serde_json::from_str(&body).map_err(|e| ReelportError::Decode(e.to_string()))
    }

    /// PATCH a JSON document; the response body is discarded
    pub async fn patch_json<B: Serialize>(&self, path: &str, payload: &B) -> Result<()> {
        self.execute_with_retry(|| self.client.patch(self.url(path)).json(payload))
            .await?;
        Ok(())
    }

    /// PUT a JSON document; the response body is discarded
    pub async fn put_json<B: Serialize>(&self, path: &str, payload: &B) -> Result<()> {
        self.execute_with_retry(|| self.client.put(self.url(path)).json(payload))
            .await?;
        Ok(())
    }

    /// DELETE a backend document
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute_with_retry(|| self.client.delete(self.url(path)))
            .await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Internal request loop with rate limiting and exponential backoff
    async fn execute_with_retry<F>(&self, build: F) -> Result<String>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let mut last_error: Option<ReelportError> = None;
        let mut attempt = 0;

        while attempt <= self.max_retries {
            self.rate_limiter.acquire().await;

            match self.execute_once(build()).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    if Self::is_retryable(&e) && attempt < self.max_retries {
                        // Exponential backoff: 1s, 2s, 4s
                        let backoff = Duration::from_secs(1 << attempt);
                        tracing::debug!(error = %e, attempt, "retrying backend request");
                        tokio::time::sleep(backoff).await;
                        last_error = Some(e);
                        attempt += 1;
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(last_error.unwrap_or(ReelportError::RateLimited))
    }

    /// Perform a single request attempt and map the status code
    async fn execute_once(&self, request: reqwest::RequestBuilder) -> Result<String> {
        let response = request.send().await.map_err(ReelportError::Backend)?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ReelportError::RateLimited);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            let url = response.url().path().to_string();
            return Err(ReelportError::NotFound(url));
        }
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(ReelportError::Forbidden(format!(
                "backend rejected request with {status}"
            )));
        }
        if status.is_server_error() || status.is_client_error() {
            return Err(ReelportError::Backend(
                response.error_for_status().unwrap_err(),
            ));
        }

        response.text().await.map_err(ReelportError::Backend)
    }

    /// Check if an error is retryable
    fn is_retryable(error: &ReelportError) -> bool {
        match error {
            ReelportError::RateLimited => true,
            ReelportError::Backend(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e.status().map(|s| s.is_server_error()).unwrap_or(false)
            }
            _ => false,
        }
    }

    /// Get a reference to the rate limiter (for testing)
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }
}
