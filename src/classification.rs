//! Classification of native geometry types into output categories.

use crate::config::GeometryCategories;
use crate::error::{Error, Result};

/// Output category of a restriction geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryCategory {
    Point,
    Line,
    Surface,
}

impl GeometryCategory {
    /// Output key holding the geometry.
    pub fn key(&self) -> &'static str {
        match self {
            GeometryCategory::Point => "Point",
            GeometryCategory::Line => "Line",
            GeometryCategory::Surface => "Surface",
        }
    }
}

/// Map a native geometry type tag to its category.
///
/// Categories are checked in the order point, line, surface; the first set
/// containing the tag wins.
///
/// # Errors
///
/// Returns [`Error::UnknownGeometryType`] if no configured set contains the tag.
pub fn classify(geom_type: &str, categories: &GeometryCategories) -> Result<GeometryCategory> {
    let table = [
        (GeometryCategory::Point, &categories.point),
        (GeometryCategory::Line, &categories.line),
        (GeometryCategory::Surface, &categories.polygon),
    ];
    table
        .iter()
        .find(|(_, set)| set.contains(geom_type))
        .map(|(category, _)| *category)
        .ok_or_else(|| Error::UnknownGeometryType {
            geom_type: geom_type.to_string(),
        })
}
