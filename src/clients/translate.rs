//! Translation service client

use tracing::info;

use crate::clients::Api;
use crate::core::config::ClientConfig;
use crate::core::endpoint::Endpoint;
use crate::core::errors::Result;
use crate::core::language::Language;
use crate::core::transport::{HttpTransport, RawResponse, Transport};
use crate::parsers::translation::parse_translation;

/// Client for the `tr/translate` endpoint
///
/// Clones share the same transport. The blocking methods must not be called
/// from inside a Tokio runtime when using [`HttpTransport`].
pub struct TranslateClient<T = HttpTransport> {
    api: Api<T>,
}

impl<T> Clone for TranslateClient<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
        }
    }
}

impl TranslateClient<HttpTransport> {
    /// Create a client using API version `v1`
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key))
    }

    /// Create a client for a specific API version
    pub fn with_version(api_key: impl Into<String>, api_version: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key).with_version(api_version))
    }

    /// Create a client from configuration
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::with_transport(&config, transport))
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }
}

impl<T: Transport> TranslateClient<T> {
    /// Create a client on top of any transport
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self {
            api: Api::new(Endpoint::Translate, config, transport),
        }
    }

    /// API version the client was built with
    pub fn api_version(&self) -> &str {
        self.api.api_version()
    }

    /// Transport the client sends requests through
    pub fn transport(&self) -> &T {
        self.api.transport()
    }

    /// Fetch the undecoded response, blocking
    pub fn translate_raw(&self, from: Language, to: Language, text: &str) -> Result<RawResponse> {
        self.api.fetch(from, to, text)
    }

    /// Fetch the undecoded response
    pub async fn translate_raw_async(
        &self,
        from: Language,
        to: Language,
        text: &str,
    ) -> Result<RawResponse> {
        self.api.fetch_async(from, to, text).await
    }

    /// Translate `text`, blocking
    pub fn translate(&self, from: Language, to: Language, text: &str) -> Result<String> {
        let translation = self.api.call(from, to, text, parse_translation)?;
        info!("Translated {} chars {}-{}", text.chars().count(), from, to);
        Ok(translation)
    }

    /// Translate `text`
    pub async fn translate_async(&self, from: Language, to: Language, text: &str) -> Result<String> {
        let translation = self.api.call_async(from, to, text, parse_translation).await?;
        info!("Translated {} chars {}-{}", text.chars().count(), from, to);
        Ok(translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::YandexError;
    use crate::core::transport::mock::MockTransport;
    use tokio_test::{assert_err, assert_ok};

    const HOLA: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<Translation code=\"200\" lang=\"en-es\"><text>Hola</text></Translation>";

    fn client(transport: MockTransport) -> TranslateClient<MockTransport> {
        TranslateClient::with_transport(&ClientConfig::new("trnsl.key"), transport)
    }

    #[test]
    fn test_translate_blocking() {
        let client = client(MockTransport::body(HOLA));
        let text = assert_ok!(client.translate(Language::En, Language::Es, "Hello"));
        assert_eq!(text, "Hola");

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].as_str(),
            "https://translate.yandex.net/api/v1/tr/translate?key=trnsl.key&text=Hello&lang=en-es"
        );
    }

    #[test]
    fn test_translate_raw_returns_body() {
        let client = client(MockTransport::body(HOLA));
        let raw = assert_ok!(client.translate_raw(Language::En, Language::Es, "Hello"));
        assert_eq!(raw.status, 200);
        assert_eq!(raw.body, HOLA);
    }

    #[tokio::test]
    async fn test_translate_async() {
        let client = client(MockTransport::body(HOLA));
        let text = assert_ok!(client.translate_async(Language::En, Language::Es, "Hello").await);
        assert_eq!(text, "Hola");

        let raw = assert_ok!(client.translate_raw_async(Language::En, Language::Es, "Hello").await);
        assert_eq!(raw.body, HOLA);
        assert_eq!(client.transport().requests().len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_calls_on_clones() {
        let client = client(MockTransport::body(HOLA));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let client = client.clone();
                tokio::spawn(async move {
                    client.translate_async(Language::En, Language::Es, "Hello").await
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), "Hola");
        }
        assert_eq!(client.transport().requests().len(), 8);
    }

    #[test]
    fn test_missing_close_marker_is_parse_error() {
        let body = "<?xml version=\"1.0\"?>\n<Translation><text>Hola</Translation>";
        let client = client(MockTransport::body(body));
        let err = assert_err!(client.translate(Language::En, Language::Es, "Hello"));
        assert!(matches!(err, YandexError::TranslationParseError { .. }));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let client = client(MockTransport::status(403));
        let err = assert_err!(client.translate_async(Language::En, Language::Es, "Hello").await);
        assert!(err.is_transport());
        assert!(matches!(err, YandexError::ApiError { status: 403, .. }));
    }

    #[test]
    fn test_custom_version() {
        let config = ClientConfig::new("k").with_version("v1.5");
        let client = TranslateClient::with_transport(&config, MockTransport::body(HOLA));
        assert_eq!(client.api_version(), "v1.5");
        assert_ok!(client.translate(Language::Ru, Language::En, "привет"));
        assert_eq!(client.transport().requests()[0].path(), "/api/v1.5/tr/translate");
    }

    #[tokio::test]
    async fn test_http_client_creation() {
        let client = TranslateClient::new("trnsl.key");
        assert!(client.is_ok());
        assert_eq!(client.unwrap().api_version(), "v1");
    }
}
