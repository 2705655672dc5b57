//! Yandex Translate - client library for Yandex Translate and Yandex Dictionary
//!
//! This library builds request URIs for both services, sends them over HTTP
//! and decodes the responses, with a blocking and an async variant of every
//! call.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod clients;
pub mod core;
pub mod parsers;

// Re-export key types for convenience
pub use clients::{dictionary::DictionaryClient, translate::TranslateClient};
pub use crate::core::{
    config::{ClientConfig, DEFAULT_API_VERSION},
    endpoint::Endpoint,
    errors::{Result, YandexError},
    language::Language,
    transport::{HttpTransport, RawResponse, Transport},
};
pub use parsers::{
    dictionary::{DictionaryResponse, Translation, Word},
    translation::parse_translation,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
