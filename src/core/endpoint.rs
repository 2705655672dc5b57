//! Request URI construction for the two remote services

use reqwest::Url;
use std::fmt;

use crate::core::errors::{Result, YandexError};
use crate::core::language::Language;

/// Remote service a request is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Plain text translation
    Translate,
    /// Dictionary lookup with part of speech, gender and synonyms
    Dictionary,
}

impl Endpoint {
    /// Base URI (scheme, host and path) for the given API version
    fn base(self, version: &str) -> String {
        match self {
            Endpoint::Translate => {
                format!("https://translate.yandex.net/api/{}/tr/translate", version)
            }
            Endpoint::Dictionary => {
                format!("https://dictionary.yandex.net/api/{}/dicservice/lookup", version)
            }
        }
    }

    /// Build the full request URI.
    ///
    /// `key` and `text` are percent-encoded, so text holding `&`, `%` or
    /// non-ASCII characters cannot break the query string.
    pub fn request_uri(
        self,
        from: Language,
        to: Language,
        text: &str,
        version: &str,
        key: &str,
    ) -> Result<Url> {
        let lang = format!("{}-{}", from, to);
        Url::parse_with_params(
            &self.base(version),
            &[("key", key), ("text", text), ("lang", lang.as_str())],
        )
        .map_err(|e| YandexError::InvalidUri {
            message: e.to_string(),
        })
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Translate => write!(f, "translate"),
            Endpoint::Dictionary => write!(f, "dictionary"),
        }
    }
}
