//! Distance-matrix HTTP client.
//!
//! One POST per batch of locations. Authentication is a per-key header;
//! concurrency is capped with a semaphore so a many-batch enrichment run
//! cannot stampede the provider.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use tokio::sync::Semaphore;

use super::error::RoutingError;
use super::types::{Matrix, MatrixRequest, MatrixResponse};

/// Default base URL for the routing matrix API.
const DEFAULT_BASE_URL: &str = "https://api.routingmatrix.io/v1/matrix";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Configuration for the routing client.
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RoutingConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Routing matrix API client.
#[derive(Debug, Clone)]
pub struct RoutingClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl RoutingClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RoutingConfig) -> Result<Self, RoutingError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| RoutingError::NotConfigured("API key is not a valid header value".into()))?;
        headers.insert("x-api-key", api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Request the distance/time matrix for a list of locations.
    ///
    /// The caller's own address must be the first location. The returned
    /// arrays are exactly as the provider sent them; batch-shape validation
    /// belongs to the caller, which knows the batch size.
    pub async fn matrix(&self, locations: &[String]) -> Result<Matrix, RoutingError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| RoutingError::NotConfigured("client is shut down".into()))?;

        let response = self
            .http
            .post(&self.base_url)
            .json(&MatrixRequest { locations })
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(RoutingError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RoutingError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RoutingError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: MatrixResponse =
            serde_json::from_str(&body).map_err(|e| RoutingError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        if let Some(err) = parsed.error {
            return Err(RoutingError::Provider(err.message));
        }

        match (parsed.distance, parsed.time) {
            (Some(distances), Some(times)) => Ok(Matrix { distances, times }),
            _ => Err(RoutingError::MissingMatrix),
        }
    }
}
