//! Localized text values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A text field that is either a single string or a set of translations.
///
/// Deserializes from a plain JSON string or from an object mapping
/// language codes to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    /// Text without per-language variants
    Plain(String),
    /// Translations keyed by language code
    Multilingual(IndexMap<String, String>),
}

impl LocalizedText {
    /// Build a multilingual value from `(language, text)` pairs.
    pub fn multilingual<I, L, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, T)>,
        L: Into<String>,
        T: Into<String>,
    {
        LocalizedText::Multilingual(
            pairs
                .into_iter()
                .map(|(lang, text)| (lang.into(), text.into()))
                .collect(),
        )
    }

    /// True when there is no text at all.
    pub fn is_empty(&self) -> bool {
        match self {
            LocalizedText::Plain(text) => text.is_empty(),
            LocalizedText::Multilingual(map) => map.is_empty(),
        }
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        LocalizedText::Plain(text.to_string())
    }
}

impl From<String> for LocalizedText {
    fn from(text: String) -> Self {
        LocalizedText::Plain(text)
    }
}
