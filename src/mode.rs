//! Render mode: which language, how complete, and how images and
//! geometries are delivered.
//!
//! # Examples
//!
//! ```
//! use oereb_extract::config::RenderConfig;
//! use oereb_extract::mode::{Flavour, RenderMode};
//!
//! let config = RenderConfig::default();
//! let mode = RenderMode::new(&config, Flavour::Full)
//!     .with_language("FR")
//!     .with_images(true);
//!
//! assert_eq!(mode.language, "fr");
//! assert!(!mode.is_reduced());
//! assert!(mode.validate(&config).is_ok());
//! ```

use crate::config::{normalize_language, RenderConfig};
use crate::error::{Error, Result};
use std::str::FromStr;

/// Completeness of an extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavour {
    /// Complete extract; every restriction needs a legal basis.
    Full,
    /// Reduced extract; restrictions may lack legal provisions.
    Reduced,
    /// Reduced extract meant to be embedded in other documents.
    Embeddable,
}

impl Flavour {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavour::Full => "full",
            Flavour::Reduced => "reduced",
            Flavour::Embeddable => "embeddable",
        }
    }
}

impl FromStr for Flavour {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(Flavour::Full),
            "reduced" => Ok(Flavour::Reduced),
            "embeddable" => Ok(Flavour::Embeddable),
            other => Err(Error::InvalidMode(format!(
                "unknown flavour '{}' (expected full, reduced or embeddable)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Flavour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for one render call.
///
/// Passed explicitly to every formatter; never stored between renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderMode {
    /// Requested output language (lower case).
    pub language: String,

    /// Language used when a value has no translation in `language`.
    pub default_language: String,

    pub flavour: Flavour,

    /// Inline image payloads when true, reference descriptors when false.
    pub include_images: bool,

    /// Emit geometries and the real estate limit.
    pub include_geometry: bool,
}

impl RenderMode {
    /// Mode in the configured default language, without images or geometries.
    pub fn new(config: &RenderConfig, flavour: Flavour) -> Self {
        Self {
            language: normalize_language(config.default_language()),
            default_language: normalize_language(config.default_language()),
            flavour,
            include_images: false,
            include_geometry: false,
        }
    }

    /// Build and validate a mode from raw request parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] for an unknown flavour or an
    /// unsupported language.
    pub fn from_params(
        config: &RenderConfig,
        flavour: &str,
        language: Option<&str>,
        include_images: bool,
        include_geometry: bool,
    ) -> Result<Self> {
        let mut mode = Self::new(config, flavour.parse()?)
            .with_images(include_images)
            .with_geometry(include_geometry);
        if let Some(language) = language {
            mode = mode.with_language(language);
        }
        mode.validate(config)?;
        Ok(mode)
    }

    /// Set the requested language; it is normalized to lower case.
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = normalize_language(language);
        self
    }

    pub fn with_images(mut self, include_images: bool) -> Self {
        self.include_images = include_images;
        self
    }

    pub fn with_geometry(mut self, include_geometry: bool) -> Self {
        self.include_geometry = include_geometry;
        self
    }

    /// Check the mode against the configuration.
    pub fn validate(&self, config: &RenderConfig) -> Result<()> {
        if self.language.is_empty() {
            return Err(Error::InvalidMode("language must not be empty".to_string()));
        }
        if !config.supports_language(&self.language) {
            return Err(Error::InvalidMode(format!(
                "language '{}' is not supported (configured: {:?})",
                self.language, config.languages
            )));
        }
        if self.default_language.is_empty() {
            return Err(Error::InvalidMode(
                "default language must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Value of the `isReduced` output flag.
    pub fn is_reduced(&self) -> bool {
        matches!(self.flavour, Flavour::Reduced | Flavour::Embeddable)
    }

    /// Whether restrictions without legal provisions are rejected.
    ///
    /// Only the `reduced` flavour tolerates them; `embeddable` does not.
    pub fn requires_legal_basis(&self) -> bool {
        self.flavour != Flavour::Reduced
    }
}
