//! Geometry records.

use crate::records::Office;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A geometry in its native form: a type tag plus a GeoJSON-like coordinate
/// structure that is passed through to the output untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeGeometry {
    /// Native type tag, e.g. `Polygon` or `MultiLineString`
    #[serde(rename = "type")]
    pub geom_type: String,
    pub coordinates: Value,
}

impl NativeGeometry {
    pub fn new(geom_type: impl Into<String>, coordinates: Value) -> Self {
        Self {
            geom_type: geom_type.into(),
            coordinates,
        }
    }
}

/// One geometry of a restriction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub geom: NativeGeometry,
    pub legal_state: String,
    pub office: Office,
    /// Metadata URL of the geographical base data
    #[serde(default)]
    pub geo_metadata: Option<String>,
}
