//! HTTP transport used by the clients

use reqwest::Url;
use std::future::Future;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::debug;

use crate::core::errors::{Result, YandexError};

/// Unparsed body of a successful response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Decoded response body
    pub body: String,
}

/// Issues GET requests on behalf of the clients.
///
/// Non-success statuses are reported as errors, so any `RawResponse` handed
/// back is ready for decoding.
pub trait Transport: Send + Sync + 'static {
    /// Blocking GET
    fn get(&self, url: &Url) -> Result<RawResponse>;

    /// Awaitable GET
    fn get_async(&self, url: Url) -> impl Future<Output = Result<RawResponse>> + Send;
}

/// reqwest backed transport
///
/// The blocking client is only built on the first blocking call. Blocking
/// calls must not be made from inside a Tokio runtime.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    blocking: OnceLock<reqwest::blocking::Client>,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport with the given per-request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .build()?;

        Ok(Self {
            client,
            blocking: OnceLock::new(),
            timeout,
        })
    }

    fn blocking_client(&self) -> Result<&reqwest::blocking::Client> {
        if let Some(client) = self.blocking.get() {
            return Ok(client);
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        Ok(self.blocking.get_or_init(|| client))
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<RawResponse> {
        let response = self
            .blocking_client()?
            .get(url.clone())
            .send()
            .map_err(network_error)?;

        let status = response.status();
        let body = response.text().map_err(network_error)?;
        check_status(status, body)
    }

    async fn get_async(&self, url: Url) -> Result<RawResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let body = response.text().await.map_err(network_error)?;
        check_status(status, body)
    }
}

fn network_error(err: reqwest::Error) -> YandexError {
    if err.is_timeout() {
        YandexError::TimeoutError
    } else {
        YandexError::NetworkError {
            message: err.to_string(),
        }
    }
}

fn check_status(status: reqwest::StatusCode, body: String) -> Result<RawResponse> {
    debug!("Response status {}, {} bytes", status, body.len());
    if status.is_success() {
        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    } else {
        Err(YandexError::ApiError {
            status: status.as_u16(),
            message: body,
        })
    }
}
