//! Resolution of localized text.
//!
//! The extract schema models every multilingual value as a list of
//! `{Language, Text}` objects, even though exactly one translation is
//! emitted per value:
//!
//! ```text
//! [{"Language": "de", "Text": "Nutzungsplanung"}]
//! ```
//!
//! Lookup order for a multilingual value is the requested language, then
//! the default language. No further fallback is attempted: the default
//! language has to be covered upstream. A plain string has no language of
//! its own and is reported in the default language.

use crate::error::{Error, Result};
use crate::mode::RenderMode;
use crate::records::LocalizedText;
use serde_json::{json, Value};

/// One resolved translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation<'a> {
    pub language: &'a str,
    pub text: &'a str,
}

/// Pick the translation of `value` for `requested`, falling back to `default`.
///
/// # Errors
///
/// Returns [`Error::MissingTranslation`] (without a field path) if a
/// multilingual value has neither language.
pub fn resolve<'a>(
    value: &'a LocalizedText,
    requested: &'a str,
    default: &'a str,
) -> Result<Translation<'a>> {
    match value {
        LocalizedText::Plain(text) => Ok(Translation {
            language: default,
            text,
        }),
        LocalizedText::Multilingual(translations) => {
            if let Some(text) = translations.get(requested) {
                return Ok(Translation {
                    language: requested,
                    text,
                });
            }
            translations
                .get(default)
                .map(|text| Translation {
                    language: default,
                    text,
                })
                .ok_or_else(|| Error::MissingTranslation {
                    field: None,
                    language: default.to_string(),
                })
        },
    }
}

/// Render a localized value as its schema node for the given mode.
///
/// `field` is the output key path reported if the translation is missing.
pub fn localized_text(value: &LocalizedText, mode: &RenderMode, field: &str) -> Result<Value> {
    let translation =
        resolve(value, &mode.language, &mode.default_language).map_err(|e| e.at_field(field))?;
    Ok(json!([{
        "Language": translation.language,
        "Text": translation.text,
    }]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::mode::Flavour;

    fn en_fr() -> LocalizedText {
        LocalizedText::multilingual([("en", "A"), ("fr", "B")])
    }

    #[test]
    fn test_requested_language_present() {
        let value = en_fr();
        let t = resolve(&value, "fr", "en").unwrap();
        assert_eq!((t.language, t.text), ("fr", "B"));
    }

    #[test]
    fn test_falls_back_to_default() {
        let value = en_fr();
        let t = resolve(&value, "de", "en").unwrap();
        assert_eq!((t.language, t.text), ("en", "A"));
    }

    #[test]
    fn test_missing_default_fails() {
        let value = en_fr();
        match resolve(&value, "de", "de") {
            Err(Error::MissingTranslation { field, language }) => {
                assert!(field.is_none());
                assert_eq!(language, "de");
            },
            other => panic!("Expected MissingTranslation, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_text_reported_in_default_language() {
        let value = LocalizedText::from("x");
        let t = resolve(&value, "fr", "de").unwrap();
        assert_eq!((t.language, t.text), ("de", "x"));
    }

    #[test]
    fn test_localized_text_node_shape() {
        let config = RenderConfig::default();
        let mode = RenderMode::new(&config, Flavour::Full).with_language("fr");
        let value = LocalizedText::multilingual([("de", "Gemeinde"), ("fr", "Commune")]);
        let node = localized_text(&value, &mode, "Test").unwrap();
        assert_eq!(node, json!([{"Language": "fr", "Text": "Commune"}]));
    }

    #[test]
    fn test_localized_text_reports_field() {
        let config = RenderConfig::default();
        let mode = RenderMode::new(&config, Flavour::Full).with_language("fr");
        let value = LocalizedText::multilingual([("it", "Comune")]);
        let err = localized_text(&value, &mode, "RealEstate.Reference.Title").unwrap_err();
        assert!(err.to_string().contains("RealEstate.Reference.Title"));
    }
}
