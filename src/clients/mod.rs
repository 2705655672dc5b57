//! Clients for the translation and dictionary services
//!
//! Both clients share one request path: build the endpoint URI, fetch it
//! through the [`Transport`], decode the body. The blocking and async entry
//! points of each client only differ in how the fetch is performed.

pub mod dictionary;
pub mod translate;

use reqwest::Url;
use std::sync::Arc;
use tracing::debug;

use crate::core::config::ClientConfig;
use crate::core::endpoint::Endpoint;
use crate::core::errors::Result;
use crate::core::language::Language;
use crate::core::transport::{RawResponse, Transport};

/// Response decoder for one endpoint
pub(crate) type Decoder<R> = fn(&str) -> Result<R>;

/// Read-only request state shared by clones of a client
pub(crate) struct Api<T> {
    endpoint: Endpoint,
    transport: Arc<T>,
    api_key: Arc<str>,
    api_version: Arc<str>,
}

impl<T> Clone for Api<T> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint,
            transport: Arc::clone(&self.transport),
            api_key: Arc::clone(&self.api_key),
            api_version: Arc::clone(&self.api_version),
        }
    }
}

impl<T: Transport> Api<T> {
    pub(crate) fn new(endpoint: Endpoint, config: &ClientConfig, transport: T) -> Self {
        Self {
            endpoint,
            transport: Arc::new(transport),
            api_key: Arc::from(config.api_key.as_str()),
            api_version: Arc::from(config.api_version.as_str()),
        }
    }

    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) fn api_version(&self) -> &str {
        &self.api_version
    }

    fn request_uri(&self, from: Language, to: Language, text: &str) -> Result<Url> {
        debug!("Building {} request {}-{}", self.endpoint, from, to);
        self.endpoint
            .request_uri(from, to, text, &self.api_version, &self.api_key)
    }

    /// Blocking fetch of the raw response
    pub(crate) fn fetch(&self, from: Language, to: Language, text: &str) -> Result<RawResponse> {
        let uri = self.request_uri(from, to, text)?;
        self.transport.get(&uri)
    }

    /// Awaitable fetch of the raw response
    pub(crate) async fn fetch_async(
        &self,
        from: Language,
        to: Language,
        text: &str,
    ) -> Result<RawResponse> {
        let uri = self.request_uri(from, to, text)?;
        self.transport.get_async(uri).await
    }

    /// Fetch and decode, blocking
    pub(crate) fn call<R>(
        &self,
        from: Language,
        to: Language,
        text: &str,
        decode: Decoder<R>,
    ) -> Result<R> {
        let raw = self.fetch(from, to, text)?;
        decode(&raw.body)
    }

    /// Fetch and decode, async
    pub(crate) async fn call_async<R>(
        &self,
        from: Language,
        to: Language,
        text: &str,
        decode: Decoder<R>,
    ) -> Result<R> {
        let raw = self.fetch_async(from, to, text).await?;
        decode(&raw.body)
    }
}
