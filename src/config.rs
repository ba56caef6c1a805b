//! Configuration for extract rendering.
//!
//! The configuration is loaded once at process start and passed by
//! reference into every render. It is never mutated afterwards.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Process-wide rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Language used when a requested translation is missing.
    pub default_language: String,

    /// Languages an extract may be requested in.
    pub languages: Vec<String>,

    /// EPSG code of the spatial reference system of all geometries.
    pub srid: u32,

    /// Native geometry type tags per output category.
    pub geometry_types: GeometryCategories,
}

/// Native geometry type tags accepted for each output category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryCategories {
    pub point: GeometryTypeSet,
    pub line: GeometryTypeSet,
    /// Emitted as `Surface`
    #[serde(alias = "surface")]
    pub polygon: GeometryTypeSet,
}

/// A set of native geometry type tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryTypeSet {
    pub types: Vec<String>,
}

impl GeometryTypeSet {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact membership test.
    pub fn contains(&self, geom_type: &str) -> bool {
        self.types.iter().any(|t| t == geom_type)
    }
}

impl Default for GeometryCategories {
    fn default() -> Self {
        Self {
            point: GeometryTypeSet::new(["Point", "MultiPoint"]),
            line: GeometryTypeSet::new(["LineString", "LinearRing", "MultiLineString"]),
            polygon: GeometryTypeSet::new(["Polygon", "MultiPolygon"]),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderConfig {
    /// Create a configuration with the Swiss defaults (LV95, five languages).
    pub fn new() -> Self {
        Self {
            default_language: "de".to_string(),
            languages: ["de", "fr", "it", "rm", "en"]
                .iter()
                .map(|l| l.to_string())
                .collect(),
            srid: 2056,
            geometry_types: GeometryCategories::default(),
        }
    }

    /// Parse and validate a JSON configuration.
    ///
    /// Language codes are normalized to lower case.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut config: RenderConfig = serde_json::from_str(json)?;
        config.default_language = normalize_language(&config.default_language);
        config.languages = config.languages.iter().map(|l| normalize_language(l)).collect();
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading render configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Set the default language.
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        let language: String = language.into();
        self.default_language = normalize_language(&language);
        self
    }

    /// Set the supported languages.
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages
            .into_iter()
            .map(|language| normalize_language(&Into::<String>::into(language)))
            .collect();
        self
    }

    /// Set the EPSG code.
    pub fn with_srid(mut self, srid: u32) -> Self {
        self.srid = srid;
        self
    }

    /// Replace the geometry category table.
    pub fn with_geometry_types(mut self, geometry_types: GeometryCategories) -> Self {
        self.geometry_types = geometry_types;
        self
    }

    /// Check internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no language is configured, the default
    /// language is not one of the configured languages, the srid is zero or
    /// a geometry category has no types.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            return Err(Error::Config("no languages configured".to_string()));
        }
        if !self.supports_language(&self.default_language) {
            return Err(Error::Config(format!(
                "default language '{}' is not one of the configured languages {:?}",
                self.default_language, self.languages
            )));
        }
        if self.srid == 0 {
            return Err(Error::Config("srid must be a positive EPSG code".to_string()));
        }
        let categories = [
            ("point", &self.geometry_types.point),
            ("line", &self.geometry_types.line),
            ("polygon", &self.geometry_types.polygon),
        ];
        for (name, set) in categories {
            if set.types.is_empty() {
                return Err(Error::Config(format!(
                    "geometry_types.{}.types must not be empty",
                    name
                )));
            }
        }
        Ok(())
    }

    /// True if `language` is one of the configured languages.
    pub fn supports_language(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn geometry_categories(&self) -> &GeometryCategories {
        &self.geometry_types
    }

    pub fn spatial_reference_id(&self) -> u32 {
        self.srid
    }

    /// CRS descriptor attached to every rendered geometry.
    pub fn crs(&self) -> String {
        format!("EPSG:{}", self.srid)
    }
}

/// Language codes are compared in trimmed lower case.
pub(crate) fn normalize_language(language: &str) -> String {
    language.trim().to_ascii_lowercase()
}
