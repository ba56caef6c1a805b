// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::module_inception)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # OeREB Extract
//!
//! Renders a cadastral extract of public-law restrictions on landownership
//! (PLR) into the nested document structure of the federal extract schema.
//!
//! ## Core Features
//!
//! - **Localized text**: requested language with default-language fallback,
//!   emitted as the schema's `[{Language, Text}]` lists
//! - **Flavours**: full, reduced and embeddable extracts
//! - **Images**: inline base64 payloads or reference descriptors from a
//!   pluggable [`ReferenceBuilder`](references::ReferenceBuilder)
//! - **Geometries**: native type tags classified into `Point`/`Line`/`Surface`
//!   via the configured category table
//! - **Validation**: restrictions without legal basis are rejected outside
//!   reduced extracts; document reference cycles are detected
//!
//! ## Architecture
//!
//! ```text
//! records/        immutable input records (serde)
//! localization    LocalizedText -> [{Language, Text}]
//! classification  native geometry type -> category
//! renderer/       one formatter per record type, ExtractRenderer on top
//! ```
//!
//! Rendering is a pure function of (extract, mode, configuration). Nothing
//! is cached between renders and inputs are never modified.
//!
//! ## Quick Start
//!
//! ```ignore
//! use oereb_extract::{ExtractRenderer, Flavour, RenderConfig, RenderMode};
//! use oereb_extract::references::UrlReferenceBuilder;
//!
//! let config = RenderConfig::default();
//! let renderer = ExtractRenderer::new(config, UrlReferenceBuilder::new("https://example.ch/oereb"));
//! let mode = RenderMode::new(renderer.config(), Flavour::Reduced).with_language("fr");
//! let document = renderer.render(&extract, &mode)?;
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

// Error handling
pub mod error;

// Configuration and render options
pub mod config;
pub mod mode;

// Input records
pub mod records;

// Leaf algorithms
pub mod classification;
pub mod localization;
pub mod references;

// Formatters
pub mod renderer;

// Re-exports
pub use config::RenderConfig;
pub use error::{Error, Result};
pub use mode::{Flavour, RenderMode};
pub use records::Extract;
pub use renderer::ExtractRenderer;

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
