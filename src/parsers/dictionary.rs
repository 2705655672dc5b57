//! Dictionary lookup response model
//!
//! A lookup answers with a `DicResult` document. Every `tr` element under
//! `/DicResult/def` is one translation: its `text` child is the primary word,
//! its `syn` children are synonyms, and each of those may carry `pos`
//! (part of speech) and `gen` (gender) attributes.
//!
//! The document is parsed once and kept; translations and synonyms are
//! re-read from it on every call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use xmltree::{Element, XMLNode};

use crate::core::errors::{Result, YandexError};

const ROOT: &str = "DicResult";
const DEFINITION: &str = "def";
const TRANSLATION: &str = "tr";
const SYNONYM: &str = "syn";
const TEXT: &str = "text";
const PART_OF_SPEECH: &str = "pos";
const GENDER: &str = "gen";

/// A word with its grammatical metadata.
///
/// Missing attributes are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    /// The word itself
    pub text: String,
    /// Value of the `pos` attribute
    pub part_of_speech: String,
    /// Value of the `gen` attribute
    pub gender: String,
}

impl Word {
    /// Create a word
    pub fn new(
        text: impl Into<String>,
        part_of_speech: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            part_of_speech: part_of_speech.into(),
            gender: gender.into(),
        }
    }

    /// Build a word from an element's text content and its own attributes
    fn from_element(text: String, node: &Element) -> Self {
        Self {
            text,
            part_of_speech: attribute(node, PART_OF_SPEECH),
            gender: attribute(node, GENDER),
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// One `tr` entry of a lookup response
#[derive(Debug, Clone)]
pub struct Translation<'a> {
    node: &'a Element,
    value: Word,
}

impl<'a> Translation<'a> {
    fn new(node: &'a Element) -> Self {
        let text = child_elements(node, TEXT)
            .next()
            .map(inner_text)
            .unwrap_or_default();
        Self {
            value: Word::from_element(text, node),
            node,
        }
    }

    /// The primary translated word
    pub fn value(&self) -> &Word {
        &self.value
    }

    /// Synonyms in document order, each with its own attributes
    pub fn synonyms(&self) -> Vec<Word> {
        child_elements(self.node, SYNONYM)
            .map(|syn| Word::from_element(inner_text(syn), syn))
            .collect()
    }
}

impl PartialEq for Translation<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.synonyms() == other.synonyms()
    }
}

impl fmt::Display for Translation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// Parsed dictionary lookup response
#[derive(Debug, Clone)]
pub struct DictionaryResponse {
    document: Element,
}

impl DictionaryResponse {
    /// Parse a response body.
    ///
    /// Fails on malformed XML, and on any `tr` entry that has no `text`
    /// child, so that `translations()` itself cannot fail later.
    pub fn parse(body: &str) -> Result<Self> {
        let document = Element::parse(body.as_bytes())?;
        let response = Self { document };

        if let Some(index) = response
            .translation_nodes()
            .position(|tr| child_elements(tr, TEXT).next().is_none())
        {
            return Err(YandexError::MissingTextElement { index });
        }

        Ok(response)
    }

    /// Translations in document order
    pub fn translations(&self) -> Vec<Translation<'_>> {
        self.translation_nodes().map(Translation::new).collect()
    }

    /// True when the lookup found nothing
    pub fn is_empty(&self) -> bool {
        self.translation_nodes().next().is_none()
    }

    /// Elements matching `/DicResult/def/tr`
    fn translation_nodes(&self) -> impl Iterator<Item = &Element> {
        let root = (self.document.name == ROOT).then_some(&self.document);
        root.into_iter()
            .flat_map(|root| child_elements(root, DEFINITION))
            .flat_map(|def| child_elements(def, TRANSLATION))
    }
}

impl FromStr for DictionaryResponse {
    type Err = YandexError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn child_elements<'a>(node: &'a Element, name: &'a str) -> impl Iterator<Item = &'a Element> {
    node.children
        .iter()
        .filter_map(|child| match child {
            XMLNode::Element(element) => Some(element),
            _ => None,
        })
        .filter(move |child| child.name == name)
}

fn attribute(node: &Element, name: &str) -> String {
    node.attributes.get(name).cloned().unwrap_or_default()
}

/// Concatenated text of all descendants
fn inner_text(node: &Element) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Element, out: &mut String) {
    for child in &node.children {
        match child {
            XMLNode::Text(text) | XMLNode::CData(text) => out.push_str(text),
            XMLNode::Element(element) => collect_text(element, out),
            _ => {}
        }
    }
}
