//! Extract renderer.
//!
//! Turns an [`Extract`] into the nested document structure mandated by the
//! federal extract schema. Each record type has its own formatter; the
//! formatters are plain functions of (record, [`RenderContext`]) and never
//! keep state between calls.
//!
//! Formatter hierarchy, leaves first:
//!
//! ```text
//! office, theme, view_service      leaf records
//! document                         recursive over articles and references
//! geometry                         classification + office
//! plr                              restrictions, legal basis check
//! real_estate                      parcel + restrictions + references
//! extract                          top-level document
//! ```
//!
//! Optional record fields are emitted only when present; empty lists and
//! empty strings count as absent, so no empty keys reach the output.
//!
//! # Examples
//!
//! ```no_run
//! use oereb_extract::config::RenderConfig;
//! use oereb_extract::mode::RenderMode;
//! use oereb_extract::records::Extract;
//! use oereb_extract::references::UrlReferenceBuilder;
//! use oereb_extract::renderer::ExtractRenderer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RenderConfig::from_file("config.json")?;
//! let extract: Extract = serde_json::from_str(&std::fs::read_to_string("extract.json")?)?;
//!
//! let renderer = ExtractRenderer::new(config, UrlReferenceBuilder::new("https://example.ch/oereb"));
//! let mode = RenderMode::from_params(renderer.config(), "reduced", Some("fr"), false, false)?;
//! let json = renderer.to_json_string(&extract, &mode, true)?;
//! println!("{}", json);
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod document;
pub mod extract;
pub mod geometry;
pub mod office;
pub mod plr;
pub mod real_estate;
pub mod theme;
pub mod view_service;

pub use context::{DocumentIndex, ReferenceTrail, RenderContext, MAX_REFERENCE_DEPTH};

use crate::config::RenderConfig;
use crate::error::Result;
use crate::mode::RenderMode;
use crate::records::Extract;
use crate::references::ReferenceBuilder;
use serde_json::{json, Value};

/// One output object; keys keep insertion order.
pub type Node = serde_json::Map<String, Value>;

/// Renders extracts with a fixed configuration and reference builder.
///
/// The renderer holds no per-render state, so one instance can serve any
/// number of renders, also from several threads at once.
pub struct ExtractRenderer {
    config: RenderConfig,
    references: Box<dyn ReferenceBuilder>,
}

impl ExtractRenderer {
    pub fn new(config: RenderConfig, references: impl ReferenceBuilder + 'static) -> Self {
        Self {
            config,
            references: Box::new(references),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render the extract document.
    ///
    /// # Errors
    ///
    /// Fails on an invalid mode, missing translations, unknown geometry
    /// types, restrictions without legal basis (unless reduced), and broken
    /// document references. No partial document is returned.
    pub fn render(&self, extract: &Extract, mode: &RenderMode) -> Result<Value> {
        mode.validate(&self.config)?;
        log::info!(
            "Rendering extract {} (flavour: {}, language: {}, images: {}, geometry: {})",
            extract.extract_identifier,
            mode.flavour,
            mode.language,
            mode.include_images,
            mode.include_geometry
        );

        let documents = DocumentIndex::build(&extract.documents)?;
        let ctx = RenderContext::new(&self.config, mode, self.references.as_ref(), &documents);
        let node = extract::format_extract(extract, &ctx)?;

        log::info!("Rendered extract {}", extract.extract_identifier);
        Ok(Value::Object(node))
    }

    /// Render the extract wrapped in the service response envelope.
    pub fn render_response(&self, extract: &Extract, mode: &RenderMode) -> Result<Value> {
        let document = self.render(extract, mode)?;
        Ok(json!({
            "GetExtractByIdResponse": {
                "extract": document
            }
        }))
    }

    /// Render the response envelope and encode it as JSON text.
    pub fn to_json_string(&self, extract: &Extract, mode: &RenderMode, pretty: bool) -> Result<String> {
        let response = self.render_response(extract, mode)?;
        let encoded = if pretty {
            serde_json::to_string_pretty(&response)?
        } else {
            serde_json::to_string(&response)?
        };
        Ok(encoded)
    }
}

/// Insert an optional string, skipping `None` and empty strings.
pub(crate) fn insert_str(node: &mut Node, key: &str, value: Option<&String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        node.insert(key.to_string(), Value::String(value.clone()));
    }
}

/// Insert a list of nodes, skipping empty lists.
pub(crate) fn insert_list(node: &mut Node, key: &str, items: Vec<Value>) {
    if !items.is_empty() {
        node.insert(key.to_string(), Value::Array(items));
    }
}

/// Join an output key path.
pub(crate) fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}
