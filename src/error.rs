//! Error types for extract rendering.
//!
//! Every variant is fatal to the render that raised it: formatters propagate
//! errors with `?` and never turn a failure into an omitted output key.

use crate::records::DocumentId;

/// Result type alias for extract rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering an extract.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A multilingual value has neither the requested nor the default language
    #[error("Missing translation for language '{language}'{}", field_suffix(.field))]
    MissingTranslation {
        /// Output key path of the value, when known
        field: Option<String>,
        /// Default language that was expected to be present
        language: String,
    },

    /// Native geometry type is not part of any configured category
    #[error("The geometry type '{geom_type}' is not configured in \"geometry_types\"")]
    UnknownGeometryType {
        /// Native type tag of the offending geometry
        geom_type: String,
    },

    /// Restriction without legal provisions in a non-reduced extract
    #[error(
        "Restriction #{index} (theme '{theme_code}') has no legal provision; \
         restrictions without legal provision are only allowed in reduced extracts"
    )]
    MissingLegalBasis {
        /// Position of the restriction in its real estate's list
        index: usize,
        /// Code of the restriction's theme
        theme_code: String,
    },

    /// Malformed render mode (unknown flavour, unsupported language, ...)
    #[error("Invalid render mode: {0}")]
    InvalidMode(String),

    /// A document appears again on its own reference chain
    #[error("Circular reference detected: document '{0}'")]
    CircularReference(DocumentId),

    /// Reference chain deeper than the supported maximum
    #[error("Recursion depth limit exceeded (max: {0})")]
    RecursionLimitExceeded(u32),

    /// A document id that is not part of the extract's document list
    #[error("Document not found: '{0}'")]
    UnknownDocument(DocumentId),

    /// Two documents in the extract share the same id
    #[error("Duplicate document id: '{0}'")]
    DuplicateDocument(DocumentId),

    /// A record violates a construction-time invariant
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON decoding or encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Attach the output key path to a translation error.
    ///
    /// Errors of any other kind, and translation errors that already carry
    /// a path, are returned unchanged.
    pub fn at_field(self, path: &str) -> Self {
        match self {
            Error::MissingTranslation {
                field: None,
                language,
            } => Error::MissingTranslation {
                field: Some(path.to_string()),
                language,
            },
            other => other,
        }
    }
}

fn field_suffix(field: &Option<String>) -> String {
    match field {
        Some(path) => format!(" in field '{}'", path),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_translation_message() {
        let err = Error::MissingTranslation {
            field: Some("RealEstate.PlanForLandRegister".to_string()),
            language: "de".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("'de'"));
        assert!(msg.contains("RealEstate.PlanForLandRegister"));
    }

    #[test]
    fn test_at_field_fills_missing_path() {
        let err = Error::MissingTranslation {
            field: None,
            language: "fr".to_string(),
        }
        .at_field("BaseData");
        match err {
            Error::MissingTranslation { field, language } => {
                assert_eq!(field.as_deref(), Some("BaseData"));
                assert_eq!(language, "fr");
            },
            _ => panic!("Expected MissingTranslation"),
        }
    }

    #[test]
    fn test_at_field_keeps_innermost_path() {
        let err = Error::MissingTranslation {
            field: Some("Theme.Text".to_string()),
            language: "de".to_string(),
        }
        .at_field("ConcernedTheme");
        assert!(format!("{}", err).contains("Theme.Text"));
    }

    #[test]
    fn test_at_field_ignores_other_errors() {
        let err = Error::InvalidMode("flavour".to_string()).at_field("x");
        assert!(matches!(err, Error::InvalidMode(_)));
    }

    #[test]
    fn test_missing_legal_basis_message() {
        let err = Error::MissingLegalBasis {
            index: 2,
            theme_code: "LandUsePlans".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("#2"));
        assert!(msg.contains("LandUsePlans"));
        assert!(msg.contains("reduced"));
    }

    #[test]
    fn test_circular_reference_message() {
        let err = Error::CircularReference(DocumentId::new("doc-1"));
        assert!(format!("{}", err).contains("doc-1"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
