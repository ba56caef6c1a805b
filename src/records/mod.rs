//! Input records of an extract.
//!
//! The records are plain value types built upstream and handed to the
//! renderer as a whole. The renderer only reads them. All records derive
//! serde so an extract can be loaded from JSON.

pub mod document;
pub mod extract;
pub mod geometry;
pub mod image;
pub mod office;
pub mod plr;
pub mod real_estate;
pub mod text;
pub mod theme;
pub mod view_service;

pub use document::{Article, Document, DocumentId, LegalDocument};
pub use extract::{Extract, TitledContent};
pub use geometry::{Geometry, NativeGeometry};
pub use image::ImagePayload;
pub use office::Office;
pub use plr::Restriction;
pub use real_estate::RealEstate;
pub use text::LocalizedText;
pub use theme::Theme;
pub use view_service::{LegendEntry, Map};
