//! Dictionary service client

use tracing::{debug, info};

use crate::clients::Api;
use crate::core::config::ClientConfig;
use crate::core::endpoint::Endpoint;
use crate::core::errors::{Result, YandexError};
use crate::core::language::Language;
use crate::core::transport::{HttpTransport, Transport};
use crate::parsers::dictionary::DictionaryResponse;

/// Client for the `dicservice/lookup` endpoint
///
/// Clones share the same transport. The blocking method must not be called
/// from inside a Tokio runtime when using [`HttpTransport`].
pub struct DictionaryClient<T = HttpTransport> {
    api: Api<T>,
}

impl<T> Clone for DictionaryClient<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
        }
    }
}

impl DictionaryClient<HttpTransport> {
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

impl<T: Transport> DictionaryClient<T> {
    /// Create a client on top of any transport
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self {
            api: Api::new(Endpoint::Dictionary, config, transport),
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

    /// Look up `text`, blocking
    pub fn translate(&self, from: Language, to: Language, text: &str) -> Result<DictionaryResponse> {
        let response = self.api.call(from, to, text, DictionaryResponse::parse)?;
        info!("Dictionary lookup {}-{} done", from, to);
        Ok(response)
    }

    /// Look up `text` on a background task.
    ///
    /// Building the request, fetching and parsing run as a single spawned
    /// task; the returned future completes once the response is parsed.
    pub async fn translate_async(
        &self,
        from: Language,
        to: Language,
        text: &str,
    ) -> Result<DictionaryResponse> {
        let api = self.api.clone();
        let text = text.to_owned();

        let task = tokio::spawn(async move {
            api.call_async(from, to, &text, DictionaryResponse::parse).await
        });

        let response = task.await.map_err(|e| {
            debug!("Dictionary task failed: {}", e);
            YandexError::TaskError {
                message: e.to_string(),
            }
        })??;

        info!("Dictionary lookup {}-{} done", from, to);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::mock::MockTransport;
    use crate::parsers::dictionary::Word;
    use tokio_test::{assert_err, assert_ok};

    const LOOKUP: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<DicResult><head/><def pos="noun"><text>house</text><tr pos="noun" gen="f"><text>casa</text><syn>hogar</syn><syn pos="noun">domicilio</syn></tr><tr pos="noun"><text>vivienda</text></tr></def></DicResult>"#;

    fn client(transport: MockTransport) -> DictionaryClient<MockTransport> {
        DictionaryClient::with_transport(&ClientConfig::new("dict.key"), transport)
    }

    #[test]
    fn test_lookup_blocking() {
        let client = client(MockTransport::body(LOOKUP));
        let response = assert_ok!(client.translate(Language::En, Language::Es, "house"));

        let translations = response.translations();
        assert_eq!(translations.len(), 2);
        assert_eq!(translations[0].value(), &Word::new("casa", "noun", "f"));
        assert_eq!(
            translations[0].synonyms(),
            vec![Word::new("hogar", "", ""), Word::new("domicilio", "noun", "")]
        );

        let requests = client.transport().requests();
        assert_eq!(
            requests[0].as_str(),
            "https://dictionary.yandex.net/api/v1/dicservice/lookup?key=dict.key&text=house&lang=en-es"
        );
    }

    #[tokio::test]
    async fn test_lookup_async() {
        let client = client(MockTransport::body(LOOKUP));
        let response = assert_ok!(client.translate_async(Language::En, Language::Es, "house").await);
        assert_eq!(response.translations().len(), 2);
        assert_eq!(response.translations()[1].to_string(), "vivienda");
    }

    #[tokio::test]
    async fn test_lookup_async_encodes_text() {
        let client = client(MockTransport::body(LOOKUP));
        assert_ok!(client.translate_async(Language::En, Language::Es, "rock & roll").await);

        let requests = client.transport().requests();
        let text = requests[0]
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned());
        assert_eq!(text.as_deref(), Some("rock & roll"));
    }

    #[tokio::test]
    async fn test_malformed_xml_is_parse_error() {
        let client = client(MockTransport::body("<DicResult><def>"));
        let err = assert_err!(client.translate_async(Language::En, Language::Es, "house").await);
        assert!(err.is_parse());
    }

    #[test]
    fn test_missing_text_is_parse_error() {
        let body = "<DicResult><def><tr pos=\"noun\"><syn>x</syn></tr></def></DicResult>";
        let client = client(MockTransport::body(body));
        let err = assert_err!(client.translate(Language::En, Language::Es, "house"));
        assert!(matches!(err, YandexError::MissingTextElement { index: 0 }));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let client = client(MockTransport::status(401));
        let err = assert_err!(client.translate_async(Language::En, Language::Es, "house").await);
        assert!(err.is_transport());

        let err = assert_err!(client.translate(Language::En, Language::Es, "house"));
        assert!(matches!(err, YandexError::ApiError { status: 401, .. }));
    }

    /// Transport whose request handling crashes
    struct CrashingTransport;

    impl Transport for CrashingTransport {
        fn get(&self, _url: &reqwest::Url) -> Result<crate::core::transport::RawResponse> {
            panic!("connection handler crashed");
        }

        async fn get_async(&self, _url: reqwest::Url) -> Result<crate::core::transport::RawResponse> {
            panic!("connection handler crashed");
        }
    }

    #[tokio::test]
    async fn test_crashed_lookup_task_is_task_error() {
        let client = DictionaryClient::with_transport(&ClientConfig::new("dict.key"), CrashingTransport);
        let err = assert_err!(client.translate_async(Language::En, Language::Es, "house").await);
        assert!(matches!(err, YandexError::TaskError { .. }));
        assert!(!err.is_transport());
        assert!(!err.is_parse());
    }
}
